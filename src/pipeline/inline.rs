//! Inline constructs: images, code spans, bold and italic.
//!
//! These run after the escape-text stage, so captured text is already
//! escaped and goes into the output unchanged.

use crate::pipeline::escape::unescape_html;
use crate::pipeline::placeholder::PlaceholderTable;
use crate::style::Style;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]\n]*)\]\(([^)\n]+)\)").unwrap());
static RE_INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").unwrap());
static RE_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());

// ── Images ───────────────────────────────────────────────────────────────────

/// `![alt](url)` → `<img>`, parked in `images` behind an `__IMAGE_<n>__`
/// token so the inline code and emphasis passes cannot reach its attributes.
///
/// The `src` attribute receives the raw URL without attribute escaping; the
/// alt text stays escaped.
pub fn render_images(text: &str, style: &Style, images: &mut PlaceholderTable) -> String {
    let attr = style.attr();
    RE_IMAGE
        .replace_all(text, |caps: &Captures<'_>| {
            images.insert(format!(
                "<img {attr} src=\"{}\" alt=\"{}\" />",
                unescape_html(&caps[2]),
                &caps[1]
            ))
        })
        .into_owned()
}

// ── Inline code ──────────────────────────────────────────────────────────────

/// `` `code` `` → `<code>`. Asterisks inside the span are emitted as `&#42;`
/// so the emphasis passes cannot pair them.
pub fn render_inline_code(text: &str, style: &Style) -> String {
    let attr = style.attr();
    RE_INLINE_CODE
        .replace_all(text, |caps: &Captures<'_>| {
            format!("<code {attr}>{}</code>", caps[1].replace('*', "&#42;"))
        })
        .into_owned()
}

// ── Emphasis ─────────────────────────────────────────────────────────────────

/// `**bold**` then `*italic*`; neither spans a line break.
pub fn render_emphasis(text: &str) -> String {
    let s = RE_BOLD.replace_all(text, "<strong>${1}</strong>");
    RE_ITALIC.replace_all(&s, "<em>${1}</em>").into_owned()
}
