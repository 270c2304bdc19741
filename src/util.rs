//! Shared text helpers for building and reading page documents.

/// Escape text for use in HTML element content or a quoted attribute.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Make serialized JSON safe to place inside a `<script>` element.
///
/// `<` only occurs inside JSON strings, where `<` is an equivalent
/// escape, so no string can close the element early.
pub fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Extract the text content of the element whose opening tag is `open_tag`,
/// up to the next `</script>`.
pub fn extract_script_block<'a>(html: &'a str, open_tag: &str) -> Option<&'a str> {
    let start = html.find(open_tag)? + open_tag.len();
    let len = html[start..].find("</script>")?;
    Some(html[start..start + len].trim())
}
