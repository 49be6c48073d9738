// ABOUTME: Inline style editing: set one CSS property while keeping the other declarations.

use dom_query::NodeRef;

/// Returns the `style` attribute value with `property` set to `value`.
pub fn with_property(existing: Option<&str>, property: &str, value: &str) -> String {
    let mut declarations: Vec<String> = existing
        .unwrap_or("")
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| {
            decl.split(':')
                .next()
                .map(|name| !name.trim().eq_ignore_ascii_case(property))
                .unwrap_or(true)
        })
        .map(str::to_string)
        .collect();
    declarations.push(format!("{property}: {value}"));
    let mut style = declarations.join("; ");
    style.push(';');
    style
}

/// Sets one inline style property on an element.
pub fn set_style_property(node: &NodeRef<'_>, property: &str, value: &str) {
    let existing = node.attr("style");
    let style = with_property(existing.as_deref(), property, value);
    node.set_attr("style", &style);
}
