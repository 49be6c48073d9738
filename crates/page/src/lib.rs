// ABOUTME: Page adapter for Enhanced QIS: rewrites saved QIS grade overview and registration pages.
// ABOUTME: Re-exports the public API: Enhancer, EnhancerBuilder, EnhancerConfig, Enhanced, EnhanceError.

//! Enhanced QIS page rewriting.
//!
//! Parses a saved QIS page, picks the pipeline from the `state` query
//! parameter of its URL and returns the rewritten HTML together with a report.
//!
//! # Example
//!
//! ```
//! use qis_page::Enhancer;
//!
//! let html = r#"<form><table></table><table>
//!   <tr><th class="tabelleheader">Note</th></tr>
//!   <tr><td>1</td><td>Analysis</td><td>PL</td><td>WiSe 25/26</td>
//!       <td>2,3</td><td>bestanden</td><td>6</td></tr>
//! </table></form>"#;
//! let out = Enhancer::builder()
//!     .year(2026)
//!     .build()
//!     .enhance(html, "https://qis.example.de/qisserver/rds?state=notenspiegelStudent")
//!     .unwrap();
//! assert!(out.html.contains("Note (2.30)"));
//! ```

pub mod config;
pub mod decode;
pub mod dom;
pub mod enhancer;
pub mod error;
pub mod options;
pub mod report;
pub mod selectors;

pub use crate::config::{EnhancerConfig, Selectors};
pub use crate::decode::decode_html;
pub use crate::enhancer::{page_mode, Enhancer};
pub use crate::error::{EnhanceError, ErrorCode};
pub use crate::options::EnhancerBuilder;
pub use crate::report::{Enhanced, GradeReport};
pub use qis_grades::PageMode;
