// ABOUTME: Credit-weighted average grade over the exam rows of the grade table.
// ABOUTME: Rows that do not qualify are excluded with a reason instead of failing the computation.

use serde::Serialize;
use thiserror::Error;

use crate::layout::ColumnLayout;
use crate::numeric::{normalize_decimal, parse_float_prefix};
use crate::row::{GradeRow, RowId};

/// A grade row that counts towards the average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeEntry {
    pub grade: f64,
    pub credits: f64,
    pub weighted: f64,
}

impl GradeEntry {
    pub fn new(grade: f64, credits: f64) -> Self {
        Self {
            grade,
            credits,
            weighted: grade * credits,
        }
    }
}

/// Why a row does not count towards the average.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Exclusion {
    #[error("row has {found} cells")]
    TooFewCells { found: usize },
    #[error("grade {text:?} is not a number")]
    GradeNotNumeric { text: String },
    #[error("grade {value} is outside (0, 5)")]
    GradeOutOfRange { value: f64 },
    #[error("credits {text:?} are not a number")]
    CreditsNotNumeric { text: String },
    #[error("credits {value} are not positive")]
    CreditsNotPositive { value: f64 },
}

/// Running sums over grade entries. Order of accumulation does not matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Accumulator {
    pub grade_sum: f64,
    pub credit_sum: f64,
    pub weighted_sum: f64,
    pub count: usize,
}

impl Accumulator {
    pub fn add(&mut self, entry: &GradeEntry) {
        self.grade_sum += entry.grade;
        self.credit_sum += entry.credits;
        self.weighted_sum += entry.weighted;
        self.count += 1;
    }

    pub fn merge(self, other: Accumulator) -> Accumulator {
        Accumulator {
            grade_sum: self.grade_sum + other.grade_sum,
            credit_sum: self.credit_sum + other.credit_sum,
            weighted_sum: self.weighted_sum + other.weighted_sum,
            count: self.count + other.count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Credit-weighted mean, or NaN when nothing was accumulated.
    pub fn weighted_mean(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        self.weighted_sum / self.credit_sum
    }
}

impl<'a> FromIterator<&'a GradeEntry> for Accumulator {
    fn from_iter<I: IntoIterator<Item = &'a GradeEntry>>(iter: I) -> Self {
        let mut acc = Accumulator::default();
        for entry in iter {
            acc.add(entry);
        }
        acc
    }
}

/// Reads one row into a grade entry.
pub fn parse_entry(row: &GradeRow, layout: &ColumnLayout) -> Result<GradeEntry, Exclusion> {
    if !row.is_exam_row(layout) {
        return Err(Exclusion::TooFewCells {
            found: row.cells.len(),
        });
    }

    let grade_text = normalize_decimal(row.cell_or_empty(layout.grade));
    let mut credit_text = normalize_decimal(row.cell_or_empty(layout.credits));
    if credit_text.is_empty() {
        credit_text = "0".to_string();
    }

    let grade = parse_float_prefix(&grade_text)
        .filter(|g| g.is_finite())
        .ok_or_else(|| Exclusion::GradeNotNumeric {
            text: grade_text.clone(),
        })?;
    let credits = parse_float_prefix(&credit_text)
        .filter(|c| c.is_finite())
        .ok_or_else(|| Exclusion::CreditsNotNumeric {
            text: credit_text.clone(),
        })?;

    if grade <= 0.0 || grade >= 5.0 {
        return Err(Exclusion::GradeOutOfRange { value: grade });
    }
    if credits <= 0.0 {
        return Err(Exclusion::CreditsNotPositive { value: credits });
    }
    Ok(GradeEntry::new(grade, credits))
}

/// Included entries and exclusions of one average computation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Assessment {
    pub entries: Vec<(RowId, GradeEntry)>,
    pub exclusions: Vec<(RowId, Exclusion)>,
    pub totals: Accumulator,
}

impl Assessment {
    /// Weighted average, or the NaN sentinel when no row qualified.
    pub fn average(&self) -> f64 {
        self.totals.weighted_mean()
    }

    pub fn mean(&self) -> Option<f64> {
        let avg = self.average();
        (!avg.is_nan()).then_some(avg)
    }
}

pub fn assess(rows: &[GradeRow], layout: &ColumnLayout) -> Assessment {
    let mut assessment = Assessment::default();
    for row in rows {
        match parse_entry(row, layout) {
            Ok(entry) => {
                assessment.totals.add(&entry);
                assessment.entries.push((row.id, entry));
            }
            Err(reason) => assessment.exclusions.push((row.id, reason)),
        }
    }
    assessment
}

/// Credit-weighted average grade of `rows`, NaN if none qualifies.
pub fn weighted_average(rows: &[GradeRow], layout: &ColumnLayout) -> f64 {
    assess(rows, layout).average()
}
