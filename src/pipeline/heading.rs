//! ATX headings, levels 1–3.
//!
//! Only `# `, `## ` and `### ` at line start are recognised. `####` and
//! deeper, and setext underlines, fall through to the paragraph wrapper with
//! their `#` characters intact. Input is already escaped, so the heading
//! text is inserted as-is.

use crate::style::{Style, StyleSheet};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static RE_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static RE_H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());

pub fn render_headings(text: &str, styles: &StyleSheet) -> String {
    let s = render_level(text, &RE_H1, "h1", &styles.h1);
    let s = render_level(&s, &RE_H2, "h2", &styles.h2);
    render_level(&s, &RE_H3, "h3", &styles.h3)
}

fn render_level(text: &str, re: &Regex, tag: &str, style: &Style) -> String {
    re.replace_all(text, |caps: &Captures<'_>| {
        format!(
            "<{tag} {}>{}</{tag}>",
            style.attr(),
            caps[1].trim()
        )
    })
    .into_owned()
}
