//! Blockquotes. Each `> ` line becomes its own `<blockquote>`; consecutive
//! quote lines are not merged.
//!
//! This stage runs on escaped text, where the marker reads `&gt; `.

use crate::style::Style;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^&gt; (.+)$").unwrap());

pub fn render_blockquotes(text: &str, style: &Style) -> String {
    RE_QUOTE
        .replace_all(text, |caps: &Captures<'_>| {
            format!("<blockquote {}>{}</blockquote>", style.attr(), caps[1].trim())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_line_is_its_own_quote() {
        let out = render_blockquotes("&gt; first\n&gt; second", &Style::new("margin: 0;"));
        assert_eq!(
            out,
            "<blockquote style=\"margin: 0;\">first</blockquote>\n\
             <blockquote style=\"margin: 0;\">second</blockquote>"
        );
    }

    #[test]
    fn test_quote_text_not_reescaped() {
        let out = render_blockquotes("&gt; &lt;b&gt;", &Style::new(""));
        assert_eq!(out, "<blockquote style=\"\">&lt;b&gt;</blockquote>");
    }

    #[test]
    fn test_marker_without_space_ignored() {
        assert_eq!(render_blockquotes("&gt;tight", &Style::new("")), "&gt;tight");
    }

    #[test]
    fn test_quote_marker_mid_line_ignored() {
        assert_eq!(render_blockquotes("a &gt; b", &Style::new("")), "a &gt; b");
    }
}
