//! HTML escaping helpers and the escape-text stage.

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Reverse [`escape_html`]. `&amp;` is decoded last so `&amp;lt;` becomes
/// `&lt;`, not `<`.
pub fn unescape_html(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// The escape-text stage: escape the whole document once.
///
/// Runs right after code extraction, before any stage emits markup, so every
/// `<` left in the document afterwards was written by the pipeline.
/// Placeholder tokens hold no escapable characters and pass through intact.
pub fn escape_text(text: &str) -> String {
    escape_html(text)
}
