// ABOUTME: Fixed page strings (status texts, annotation markers, labels) and the colour palette.
// ABOUTME: Defaults are the German strings the QIS grade overview renders.

use serde::{Deserialize, Serialize};

/// Source-language strings the normalizer and annotator match against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Status text of a passed exam (matched lower-cased).
    pub status_passed: String,
    /// Status text of a failed exam (matched lower-cased).
    pub status_failed: String,
    /// Status text of a registered, not yet graded exam (matched lower-cased).
    pub status_registered: String,
    /// Annotation marking a special (repeat) attempt.
    pub special_attempt: String,
    /// Annotation prefix marking a withdrawn exam.
    pub withdrawal_prefix: String,
    /// Exam-label prefix of module summary rows.
    pub module_prefix: String,
    /// Exact label of the grade column header.
    pub grade_header: String,
    /// Row classes of account-grouping and grouping-header rows.
    pub grouping_classes: Vec<String>,
    /// Substring marking a completed course on the registration page.
    pub completed_marker: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            status_passed: "bestanden".to_string(),
            status_failed: "nicht bestanden".to_string(),
            status_registered: "angemeldet".to_string(),
            special_attempt: "AT".to_string(),
            withdrawal_prefix: "RT".to_string(),
            module_prefix: "Modul:".to_string(),
            grade_header: "Note".to_string(),
            grouping_classes: vec!["qis_konto".to_string(), "qis_kontoOnTop".to_string()],
            completed_marker: "[Status: BE]".to_string(),
        }
    }
}

impl Vocabulary {
    /// Strings of the English rendering of the same pages.
    pub fn english() -> Self {
        Self {
            status_passed: "passed".to_string(),
            status_failed: "failed".to_string(),
            status_registered: "registered".to_string(),
            module_prefix: "Module:".to_string(),
            grade_header: "Grade".to_string(),
            ..Self::default()
        }
    }
}

/// Colours applied by the normalizer and the highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub passed: String,
    pub failed: String,
    pub registered: String,
    /// Text colour of completed courses on the registration page.
    pub completed: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            passed: "#00ef00".to_string(),
            failed: "#ef0000".to_string(),
            registered: "#ebef00".to_string(),
            completed: "rgb(0, 151, 0)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_keeps_markers() {
        let en = Vocabulary::english();
        assert_eq!(en.status_passed, "passed");
        assert_eq!(en.grade_header, "Grade");
        assert_eq!(en.special_attempt, "AT");
        assert_eq!(en.withdrawal_prefix, "RT");
        assert_eq!(en.grouping_classes, Vocabulary::default().grouping_classes);
    }
}
