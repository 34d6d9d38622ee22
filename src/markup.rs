//! HTML tag assembly.

/// Builds `<name k1="v1" k2="v2"></name>` from a tag name and
/// attribute key/value pairs.
///
/// # Behavior
/// - attributes render in argument order; values are always double-quoted
/// - zero attributes gives `<name></name>`
/// - the closing tag is always emitted with no content in between;
///   void elements are not special-cased (`tag("input", ..)` closes
///   with `</input>`)
///
/// Keys and values are written verbatim; no escaping is applied.
pub fn tag(name: &str, attrs: &[(&str, &str)]) -> String {
    let mut html = String::with_capacity(2 * name.len() + 5);

    html.push('<');
    html.push_str(name);
    for (key, value) in attrs {
        html.push(' ');
        html.push_str(key);
        html.push_str("=\"");
        html.push_str(value);
        html.push('"');
    }
    html.push('>');

    html.push_str("</");
    html.push_str(name);
    html.push('>');

    html
}
