//! Reference section listing every link URL collected by the link stage.

use crate::pipeline::escape::escape_html;
use crate::style::StyleSheet;

/// Render the footnote section, or an empty string when there are no links.
///
/// Entry `i` (zero-based) is printed as `[i + 1] url`, matching the markers
/// inserted by [`crate::pipeline::link::replace_links`].
pub fn render_footnotes(footnotes: &[String], title: &str, styles: &StyleSheet) -> String {
    if footnotes.is_empty() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(footnotes.len() + 2);
    parts.push(format!("<hr {} />", styles.footnote_rule.attr()));
    parts.push(format!(
        "<h2 {}>{}</h2>",
        styles.footnote_heading.attr(),
        escape_html(title)
    ));
    let item_attr = styles.footnote_item.attr();
    for (i, url) in footnotes.iter().enumerate() {
        parts.push(format!("<p {item_attr}>[{}] {}</p>", i + 1, escape_html(url)));
    }
    parts.join("\n")
}
