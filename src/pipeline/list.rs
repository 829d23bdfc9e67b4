//! List items.
//!
//! Three independent passes, in order: `•` bullets, `-`/`*`/`+` markers, and
//! `1.`-style ordered markers. Every matched line becomes a complete
//! single-item list; consecutive items are not grouped into one `<ul>`.
//! Item text arrives escaped and is inserted as-is.

use crate::style::StyleSheet;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^•(.+)$").unwrap());
static RE_UNORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*+] (.+)$").unwrap());
static RE_ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\.(.+)$").unwrap());

pub fn render_lists(text: &str, styles: &StyleSheet) -> String {
    let s = render_pass(text, &RE_BULLET, "ul", styles);
    let s = render_pass(&s, &RE_UNORDERED, "ul", styles);
    render_pass(&s, &RE_ORDERED, "ol", styles)
}

fn render_pass(text: &str, re: &Regex, tag: &str, styles: &StyleSheet) -> String {
    re.replace_all(text, |caps: &Captures<'_>| {
        format!(
            "<{tag} {}><li {}>{}</li></{tag}>",
            styles.list.attr(),
            styles.list_item.attr(),
            caps[1].trim()
        )
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        render_lists(text, &StyleSheet::default())
    }

    #[test]
    fn test_consecutive_items_not_grouped() {
        let out = render("- a\n- b");
        assert_eq!(out.matches("<ul ").count(), 2);
        assert_eq!(out.matches("<li ").count(), 2);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].ends_with(">a</li></ul>"));
        assert!(lines[1].ends_with(">b</li></ul>"));
    }

    #[test]
    fn test_all_unordered_markers() {
        let out = render("* star\n+ plus\n- dash");
        assert_eq!(out.matches("<ul ").count(), 3);
    }

    #[test]
    fn test_bullet_glyph() {
        let out = render("• dot item");
        assert!(out.ends_with(">dot item</li></ul>"), "got: {out}");
    }

    #[test]
    fn test_ordered_marker_dropped() {
        let out = render("12. twelfth");
        assert!(out.starts_with("<ol style="));
        assert!(out.ends_with(">twelfth</li></ol>"), "got: {out}");
    }

    #[test]
    fn test_item_content_not_reescaped() {
        let out = render("- x &lt; y");
        assert!(out.contains(">x &lt; y</li>"));
    }

    #[test]
    fn test_emphasis_line_not_a_list() {
        assert_eq!(render("*not* a list"), "*not* a list");
    }
}
