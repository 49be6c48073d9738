// ABOUTME: Page mode selection from the value of the `state` query parameter.
// ABOUTME: Maps the two known QIS views to their pipelines; everything else is Unknown.

use serde::Serialize;

/// Query parameter naming the QIS view.
pub const STATE_PARAM: &str = "state";

/// `state` value of the grade overview.
pub const STATE_GRADE_OVERVIEW: &str = "notenspiegelStudent";

/// `state` value of the exam registration page.
pub const STATE_EXAM_REGISTRATION: &str = "prfAnmStudent";

/// Diagnostic emitted when the page is not recognised.
pub const UNKNOWN_PAGE_MESSAGE: &str = "[Enhanced QIS] could not identify site. No modifications.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    GradeOverview,
    ExamRegistration,
    Unknown,
}

impl PageMode {
    pub fn from_state(state: Option<&str>) -> Self {
        match state {
            Some(STATE_GRADE_OVERVIEW) => PageMode::GradeOverview,
            Some(STATE_EXAM_REGISTRATION) => PageMode::ExamRegistration,
            _ => PageMode::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_states() {
        assert_eq!(
            PageMode::from_state(Some("notenspiegelStudent")),
            PageMode::GradeOverview
        );
        assert_eq!(
            PageMode::from_state(Some("prfAnmStudent")),
            PageMode::ExamRegistration
        );
    }

    #[test]
    fn test_state_match_is_exact() {
        assert_eq!(PageMode::from_state(Some("notenspiegelstudent")), PageMode::Unknown);
        assert_eq!(PageMode::from_state(Some("")), PageMode::Unknown);
        assert_eq!(PageMode::from_state(None), PageMode::Unknown);
    }
}
