// ABOUTME: Writes the average grade into the grade column header.

use dom_query::{Document, Matcher};
use qis_grades::annotate_label;

use super::normalized_text;

/// Appends the formatted average to the header cell labelled `label`.
///
/// When several headers carry the label the last one wins. Returns whether a
/// header was changed; a NaN average or a missing header changes nothing.
pub fn annotate_grade_header(doc: &Document, headers: &Matcher, label: &str, average: f64) -> bool {
    let selection = doc.select_matcher(headers);
    let Some(header) = selection
        .nodes()
        .iter()
        .rev()
        .find(|th| normalized_text(th) == label)
    else {
        return false;
    };
    let Some(text) = annotate_label(&normalized_text(header), average) else {
        return false;
    };
    header.set_text(text.as_str());
    true
}
