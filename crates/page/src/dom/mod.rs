// ABOUTME: DOM side of the enhancer: row snapshots, directive application and page annotations.
// ABOUTME: All mutation of the parsed document happens in this module.

//! DOM adapter over `dom_query`.
//!
//! The grade logic in `qis_grades` never sees a DOM node. This module turns
//! table rows into [`qis_grades::GradeRow`] snapshots, applies the resulting
//! directives to the live document, and performs the header and registration
//! page edits.

pub mod header;
pub mod highlight;
pub mod style;
pub mod table;

use dom_query::NodeRef;

/// Element children of a node, in document order.
pub(crate) fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(|child| child.is_element())
        .collect()
}

/// Text content with whitespace runs collapsed and ends trimmed.
pub(crate) fn normalized_text(node: &NodeRef<'_>) -> String {
    node.text().split_whitespace().collect::<Vec<_>>().join(" ")
}
