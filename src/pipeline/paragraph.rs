//! Paragraph wrapping, the last text pass before placeholders are restored.

use crate::pipeline::code_block::is_placeholder_line;
use crate::style::Style;

/// Openings of the block elements the earlier stages emit.
const BLOCK_OPENINGS: [&str; 7] = [
    "<h1 ",
    "<h2 ",
    "<h3 ",
    "<blockquote ",
    "<table ",
    "<ul ",
    "<ol ",
];

/// True if `line` is a block element produced by a block stage.
pub fn is_block_html(line: &str) -> bool {
    BLOCK_OPENINGS.iter().any(|open| line.starts_with(open))
}

/// Trim every line, drop empty ones, and wrap each remaining line in a `<p>`
/// unless it is a block element or holds only a code-block placeholder (a
/// `<section>` must not end up inside a `<p>`). Lines that start with inline
/// markup such as a link span or an image are still wrapped.
pub fn wrap_paragraphs(text: &str, style: &Style) -> String {
    let attr = style.attr();
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if is_block_html(line) || is_placeholder_line(line) {
                line.to_string()
            } else {
                format!("<p {attr}>{line}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
