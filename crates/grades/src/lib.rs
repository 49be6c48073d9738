// ABOUTME: DOM-free core of Enhanced QIS: grade table normalization and weighted average.
// ABOUTME: Re-exports the layout, vocabulary, row snapshot, normalizer and calculator APIs.

//! Grade table logic for the QIS grade overview.
//!
//! Everything here works on [`GradeRow`] snapshots: plain cell texts taken
//! from the page before it is mutated. [`normalize`] returns the
//! [`Directive`]s a DOM adapter applies, and [`weighted_average`] computes the
//! credit-weighted mean over a fresh snapshot of the cleaned table.
//!
//! # Example
//!
//! ```
//! use qis_grades::{rows_from, weighted_average, header_suffix, ColumnLayout};
//!
//! let rows = rows_from([
//!     ["1", "Analysis", "PL", "WiSe 25/26", "2,3", "bestanden", "6"],
//!     ["2", "Algebra", "PL", "WiSe 25/26", "1,7", "bestanden", "3"],
//! ]);
//! let avg = weighted_average(&rows, &ColumnLayout::default());
//! assert_eq!(header_suffix(avg).as_deref(), Some(" (2.10)"));
//! ```

pub mod average;
pub mod header;
pub mod layout;
pub mod mode;
pub mod normalize;
pub mod numeric;
pub mod row;
pub mod vocabulary;

pub use crate::average::{
    assess, parse_entry, weighted_average, Accumulator, Assessment, Exclusion, GradeEntry,
};
pub use crate::header::{annotate_label, header_suffix};
pub use crate::layout::ColumnLayout;
pub use crate::mode::PageMode;
pub use crate::normalize::{
    normalize, Action, CellRole, Directive, NormalizeRules, RemovalReason,
};
pub use crate::row::{rows_from, GradeRow, RowId};
pub use crate::vocabulary::{Palette, Vocabulary};
