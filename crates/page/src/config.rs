// ABOUTME: Enhancer configuration: column layout, vocabulary, palette and page selectors.
// ABOUTME: Loadable from a JSON file in which every section and field is optional.

use std::fs;
use std::path::Path;

use qis_grades::{ColumnLayout, Palette, Vocabulary};
use serde::{Deserialize, Serialize};

use crate::error::EnhanceError;

/// CSS selectors locating the parts of the QIS pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Rows of the grade table: the second table inside the form.
    pub grade_rows: String,
    /// Column header cells of the grade table.
    pub grade_header: String,
    /// Course anchors in the registration page tree.
    pub completed_courses: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            grade_rows: "form table ~ table tbody tr".to_string(),
            grade_header: "th.tabelleheader".to_string(),
            completed_courses: "ul li.treelist a.Konto".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub layout: ColumnLayout,
    pub vocabulary: Vocabulary,
    pub palette: Palette,
    pub selectors: Selectors,
    /// Fixed calendar year; the local clock is used when unset.
    pub year: Option<i32>,
}

impl EnhancerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, EnhanceError> {
        serde_json::from_str(json)
            .map_err(|e| EnhanceError::config("<json>", "parse config", Some(e.into())))
    }

    pub fn from_path(path: &Path) -> Result<Self, EnhanceError> {
        let shown = path.display().to_string();
        let json = fs::read_to_string(path).map_err(|e| EnhanceError::io(&shown, "read config", e))?;
        serde_json::from_str(&json)
            .map_err(|e| EnhanceError::config(shown, "parse config", Some(e.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let cfg = EnhancerConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, EnhancerConfig::default());
    }

    #[test]
    fn test_nested_sections_merge_with_defaults() {
        let cfg = EnhancerConfig::from_json_str(
            r#"{
                "layout": { "annotation": 8 },
                "vocabulary": { "grade_header": "Grade" },
                "year": 2025
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.layout.annotation, 8);
        assert_eq!(cfg.layout.grade, 4);
        assert_eq!(cfg.vocabulary.grade_header, "Grade");
        assert_eq!(cfg.vocabulary.status_passed, "bestanden");
        assert_eq!(cfg.year, Some(2025));
        assert_eq!(cfg.selectors, Selectors::default());
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = EnhancerConfig::from_json_str("{ layout: }").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EnhancerConfig::from_path(Path::new("/nonexistent/qis.json")).unwrap_err();
        assert!(err.is_io());
    }
}
