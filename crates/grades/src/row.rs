// ABOUTME: Immutable snapshot of one grade-table row: its position, classes and cell texts.
// ABOUTME: Cell access goes through ColumnLayout so callers never use raw offsets.

use serde::{Deserialize, Serialize};

use crate::layout::ColumnLayout;

/// Position of a row in the queried row sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub usize);

/// Text snapshot of a table row, taken before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRow {
    pub id: RowId,
    pub classes: Vec<String>,
    pub cells: Vec<String>,
}

impl GradeRow {
    pub fn new(id: usize, classes: Vec<String>, cells: Vec<String>) -> Self {
        Self {
            id: RowId(id),
            classes,
            cells,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Cell text, or "" when the row is too short.
    pub fn cell_or_empty(&self, index: usize) -> &str {
        self.cell(index).unwrap_or("")
    }

    pub fn is_exam_row(&self, layout: &ColumnLayout) -> bool {
        layout.is_exam_row(self.cells.len())
    }
}

/// Builds rows from plain string slices. Handy for tests and fixtures.
pub fn rows_from<I, R, S>(rows: I) -> Vec<GradeRow>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    rows.into_iter()
        .enumerate()
        .map(|(i, cells)| GradeRow::new(i, Vec::new(), cells.into_iter().map(Into::into).collect()))
        .collect()
}
