//! Fenced code blocks: extraction to placeholders.
//!
//! Every later stage is a regex over the whole document, and code is exactly
//! the text those regexes must not touch. So code blocks are rendered to
//! their final HTML first, parked in a [`PlaceholderTable`], and represented
//! in the document by a `__CODE_BLOCK_<n>__` token until the very end.

use crate::pipeline::escape::escape_html;
use crate::pipeline::placeholder::PlaceholderTable;
use crate::style::Style;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, warn};

/// Opening fence at line start, optional language, body, closing fence.
/// Non-greedy so consecutive blocks are matched one by one.
static RE_FENCED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^```([^\n]*)\n(.*?)```").unwrap());

static RE_PLACEHOLDER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^__CODE_BLOCK_\d+__$").unwrap());

/// Replace every fenced block with a placeholder, storing its HTML in `table`.
///
/// The placeholder always ends its line: text following a closing fence is
/// moved to the next line. An opening fence without a closing one does not
/// match and stays in the document as literal text.
pub fn extract_code_blocks(text: &str, style: &Style, table: &mut PlaceholderTable) -> String {
    let result = RE_FENCED
        .replace_all(text, |caps: &Captures<'_>| {
            let lang = caps[1].trim();
            let body = &caps[2];
            let html = format!("<section {}>{}</section>", style.attr(), escape_html(body));
            let mut token = table.insert(html);
            debug!(
                "Extracted code block {} (lang: {:?}, {} bytes)",
                token,
                if lang.is_empty() { None } else { Some(lang) },
                body.len()
            );

            let end = caps.get(0).map_or(text.len(), |m| m.end());
            let rest = &text[end..];
            if !rest.is_empty() && !rest.starts_with('\n') {
                token.push('\n');
            }
            token
        })
        .into_owned();

    if result.lines().any(|l| l.starts_with("```")) {
        warn!("Unterminated code fence left as literal text");
    }
    result
}

/// True if `line` is nothing but a code-block placeholder.
pub fn is_placeholder_line(line: &str) -> bool {
    RE_PLACEHOLDER_LINE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::placeholder::CODE_BLOCK;

    fn style() -> Style {
        Style::new("white-space: pre;")
    }

    fn table() -> PlaceholderTable {
        PlaceholderTable::new(CODE_BLOCK)
    }

    #[test]
    fn test_extract_single_block() {
        let mut table = table();
        let out = extract_code_blocks("before\n```rust\nlet a = 1 < 2;\n```\nafter", &style(), &mut table);
        assert_eq!(out, "before\n__CODE_BLOCK_0__\nafter");
        assert_eq!(
            table.get(0),
            Some("<section style=\"white-space: pre;\">let a = 1 &lt; 2;\n</section>")
        );
    }

    #[test]
    fn test_multiple_blocks_not_merged() {
        let mut table = table();
        let input = "```\none\n```\nmiddle\n```py\ntwo\n```";
        let out = extract_code_blocks(input, &style(), &mut table);
        assert_eq!(out, "__CODE_BLOCK_0__\nmiddle\n__CODE_BLOCK_1__");
        assert_eq!(table.len(), 2);
        assert!(table.get(1).unwrap().contains("two"));
    }

    #[test]
    fn test_text_after_closing_fence_moves_to_next_line() {
        let mut table = table();
        let out = extract_code_blocks("```\ncode\n``` tail", &style(), &mut table);
        assert_eq!(out, "__CODE_BLOCK_0__\n tail");
        assert!(is_placeholder_line(out.lines().next().unwrap()));
    }

    #[test]
    fn test_unterminated_fence_is_literal() {
        let mut table = table();
        let input = "```js\nconsole.log(1)\nno closing fence";
        let out = extract_code_blocks(input, &style(), &mut table);
        assert_eq!(out, input);
        assert!(table.is_empty());
    }

    #[test]
    fn test_markdown_inside_code_is_escaped_verbatim() {
        let mut table = table();
        extract_code_blocks("```\n# not a heading\n**x** [a](b)\n```", &style(), &mut table);
        let html = table.get(0).unwrap();
        assert!(html.contains("# not a heading\n**x** [a](b)"));
    }

    #[test]
    fn test_restore_round_trip() {
        let mut table = table();
        let extracted = extract_code_blocks("x\n```\ncode\n```\ny", &style(), &mut table);
        assert_eq!(
            table.restore(&extracted),
            "x\n<section style=\"white-space: pre;\">code\n</section>\ny"
        );
    }

    #[test]
    fn test_placeholder_line() {
        assert!(is_placeholder_line("__CODE_BLOCK_12__"));
        assert!(!is_placeholder_line("see __CODE_BLOCK_1__"));
        assert!(!is_placeholder_line("__IMAGE_0__"));
    }
}
