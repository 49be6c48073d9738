// ABOUTME: Column layout schema for the QIS grade table (named positional cell indices).
// ABOUTME: Deserialisable from JSON so a changed page layout is a one-place edit.

use serde::{Deserialize, Serialize};

/// Positional indices of the cells in one grade-table row.
///
/// The defaults describe the current grade overview:
/// `0 exam number | 1 label | 2 exam type | 3 semester | 4 grade | 5 status |
/// 6 credits | 7 date | 8 attempt | 9 annotation | 10 free attempt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub exam_number: usize,
    pub label: usize,
    pub exam_type: usize,
    pub semester: usize,
    pub grade: usize,
    pub status: usize,
    pub credits: usize,
    pub date: usize,
    pub attempt: usize,
    pub annotation: usize,
    pub free_attempt: usize,
    /// Rows with fewer cells are not exam rows.
    pub min_cells: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            exam_number: 0,
            label: 1,
            exam_type: 2,
            semester: 3,
            grade: 4,
            status: 5,
            credits: 6,
            date: 7,
            attempt: 8,
            annotation: 9,
            free_attempt: 10,
            min_cells: 7,
        }
    }
}

impl ColumnLayout {
    /// Returns true if a row with `cell_count` cells counts as an exam row.
    pub fn is_exam_row(&self, cell_count: usize) -> bool {
        cell_count >= self.min_cells
    }
}
