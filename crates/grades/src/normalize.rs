// ABOUTME: Grade table normalizer: decides which rows to remove and which cells to paint.
// ABOUTME: Pure over row snapshots; returns directives that a DOM adapter applies.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::layout::ColumnLayout;
use crate::row::{GradeRow, RowId};
use crate::vocabulary::{Palette, Vocabulary};

/// Whole-word special-attempt marker inside an annotation.
static SPECIAL_ATTEMPT_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bAT\b").unwrap());

/// Why a row is taken out of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// Account-grouping or grouping-header row.
    GroupingRow,
    /// Special attempt from a previous year.
    StaleSpecialAttempt,
    /// Withdrawn exam.
    Withdrawn,
    /// Module summary line.
    ModuleSummary,
}

/// Which cell of a row a paint directive targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRole {
    Status,
    Annotation,
}

impl CellRole {
    pub fn index(self, layout: &ColumnLayout) -> usize {
        match self {
            CellRole::Status => layout.status,
            CellRole::Annotation => layout.annotation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Remove { reason: RemovalReason },
    Paint { cell: CellRole, color: String },
}

/// One mutation of the grade table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub row: RowId,
    #[serde(flatten)]
    pub action: Action,
}

impl Directive {
    pub fn remove(row: RowId, reason: RemovalReason) -> Self {
        Self {
            row,
            action: Action::Remove { reason },
        }
    }

    pub fn paint(row: RowId, cell: CellRole, color: impl Into<String>) -> Self {
        Self {
            row,
            action: Action::Paint {
                cell,
                color: color.into(),
            },
        }
    }
}

/// Everything the normalizer matches against.
#[derive(Debug, Clone)]
pub struct NormalizeRules {
    pub layout: ColumnLayout,
    pub vocabulary: Vocabulary,
    pub palette: Palette,
    /// Current calendar year, e.g. 2026.
    pub year: i32,
}

impl NormalizeRules {
    pub fn new(year: i32) -> Self {
        Self {
            layout: ColumnLayout::default(),
            vocabulary: Vocabulary::default(),
            palette: Palette::default(),
            year,
        }
    }

    /// Last two digits of the year, zero padded ("26" for 2026).
    pub fn year_suffix(&self) -> String {
        format!("{:02}", self.year.rem_euclid(100))
    }
}

/// Computes the directives for a snapshot of the grade table, in row order.
///
/// A removed row gets exactly one directive: its removal.
pub fn normalize(rows: &[GradeRow], rules: &NormalizeRules) -> Vec<Directive> {
    let year_suffix = rules.year_suffix();
    rows.iter()
        .flat_map(|row| normalize_row(row, rules, &year_suffix))
        .collect()
}

fn normalize_row(row: &GradeRow, rules: &NormalizeRules, year_suffix: &str) -> Vec<Directive> {
    let layout = &rules.layout;
    let vocab = &rules.vocabulary;
    let palette = &rules.palette;

    if vocab.grouping_classes.iter().any(|c| row.has_class(c)) {
        return vec![Directive::remove(row.id, RemovalReason::GroupingRow)];
    }
    if !row.is_exam_row(layout) {
        return Vec::new();
    }

    let status = row.cell_or_empty(layout.status).trim().to_lowercase();
    let annotation = row.cell_or_empty(layout.annotation).trim().to_uppercase();
    let mut out = Vec::new();

    if status == vocab.status_passed.to_lowercase() {
        out.push(Directive::paint(row.id, CellRole::Status, &palette.passed));
    } else if status == vocab.status_failed.to_lowercase() {
        out.push(Directive::paint(row.id, CellRole::Status, &palette.failed));
    } else if status == vocab.status_registered.to_lowercase()
        && !SPECIAL_ATTEMPT_WORD.is_match(&annotation)
    {
        out.push(Directive::paint(row.id, CellRole::Status, &palette.registered));
    }

    if annotation == vocab.special_attempt.to_uppercase() {
        if is_current_cycle(row.cell_or_empty(layout.semester), year_suffix) {
            out.push(Directive::paint(row.id, CellRole::Annotation, &palette.passed));
        } else {
            return vec![Directive::remove(row.id, RemovalReason::StaleSpecialAttempt)];
        }
    }

    if annotation.starts_with(&vocab.withdrawal_prefix.to_uppercase()) {
        return vec![Directive::remove(row.id, RemovalReason::Withdrawn)];
    }

    if row.cell_or_empty(layout.label).starts_with(&vocab.module_prefix) {
        return vec![Directive::remove(row.id, RemovalReason::ModuleSummary)];
    }

    out
}

/// The semester label names the current year past its first two characters.
///
/// Positions count UTF-16 code units, as the page's own scripts do.
fn is_current_cycle(semester: &str, year_suffix: &str) -> bool {
    semester
        .find(year_suffix)
        .is_some_and(|i| semester[..i].encode_utf16().count() > 1)
}
