// ABOUTME: Completed-course highlighter for the exam registration page.
// ABOUTME: Recolours course anchors whose text carries the completed marker.

use dom_query::{Document, Matcher};

use super::style::set_style_property;

/// Sets the text colour of every anchor containing `marker`. Returns how many changed.
pub fn highlight_completed(doc: &Document, anchors: &Matcher, marker: &str, color: &str) -> usize {
    let selection = doc.select_matcher(anchors);
    let mut count = 0;
    for anchor in selection.nodes() {
        if anchor.text().contains(marker) {
            set_style_property(anchor, "color", color);
            count += 1;
        }
    }
    count
}
