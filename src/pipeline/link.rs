//! Links → styled text plus a numbered footnote marker.
//!
//! The WeChat editor renders `<a>` as plain, non-clickable text, so each
//! `[text](url)` becomes `<span>text</span><sup>[n]</sup>` and the URL is
//! recorded for the reference section appended at the end of the document.
//! Numbering follows document order and runs across the whole document.

use crate::pipeline::escape::unescape_html;
use crate::style::Style;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The optional leading `!` is captured so image syntax can be skipped.
static RE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?)\[([^\]\n]+)\]\(([^)\n]+)\)").unwrap());

/// Replace every link with a footnote marker, appending URLs to `footnotes`.
///
/// Runs after the escape-text stage: the link text is already escaped and is
/// inserted as-is, while the URL is stored unescaped and escaped again when
/// the reference section is rendered.
pub fn replace_links(text: &str, style: &Style, footnotes: &mut Vec<String>) -> String {
    let attr = style.attr();
    RE_LINK
        .replace_all(text, |caps: &Captures<'_>| {
            if !caps[1].is_empty() {
                return caps[0].to_string();
            }
            footnotes.push(unescape_html(&caps[3]));
            format!("<span {attr}>{}</span><sup>[{}]</sup>", &caps[2], footnotes.len())
        })
        .into_owned()
}
