// ABOUTME: Serializable summary of one enhancement run.
// ABOUTME: Carries the directives, the average inputs with exclusion reasons, and the header outcome.

use qis_grades::{Accumulator, Assessment, Directive, Exclusion, GradeEntry, PageMode, RowId};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct IncludedRow {
    pub row: RowId,
    #[serde(flatten)]
    pub entry: GradeEntry,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExcludedRow {
    pub row: RowId,
    #[serde(flatten)]
    pub reason: Exclusion,
}

/// What the grade overview pipeline did.
///
/// Directive rows index the table before cleaning; `included` and `excluded`
/// index the cleaned table the average was computed from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GradeReport {
    pub rows_seen: usize,
    pub directives: Vec<Directive>,
    pub removed: usize,
    pub painted: usize,
    pub included: Vec<IncludedRow>,
    pub excluded: Vec<ExcludedRow>,
    pub totals: Accumulator,
    pub average: Option<f64>,
    pub header_suffix: Option<String>,
    pub header_annotated: bool,
}

impl GradeReport {
    pub(crate) fn record_assessment(&mut self, assessment: Assessment) {
        self.average = assessment.mean();
        self.header_suffix = qis_grades::header_suffix(assessment.average());
        self.totals = assessment.totals;
        self.included = assessment
            .entries
            .into_iter()
            .map(|(row, entry)| IncludedRow { row, entry })
            .collect();
        self.excluded = assessment
            .exclusions
            .into_iter()
            .map(|(row, reason)| ExcludedRow { row, reason })
            .collect();
    }
}

/// Result of [`crate::Enhancer::enhance`].
#[derive(Debug, Clone, Serialize)]
pub struct Enhanced {
    pub mode: PageMode,
    /// The rewritten page; the input unchanged for an unknown page.
    #[serde(skip)]
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grades: Option<GradeReport>,
    /// Anchors recoloured on the registration page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<usize>,
}

impl Enhanced {
    pub fn unchanged(html: &str) -> Self {
        Self {
            mode: PageMode::Unknown,
            html: html.to_string(),
            grades: None,
            highlighted: None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
