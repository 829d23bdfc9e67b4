//! Rendered HTML parked behind `__<KIND>_<n>__` tokens.
//!
//! Code blocks and images are rendered before the inline regex stages run,
//! and those stages must not see inside them: a `*` in an image alt or a
//! backtick in its URL would otherwise be rewritten inside the attribute.
//! Each rendered fragment is stored in a [`PlaceholderTable`] and the
//! document carries only its token until a restore stage swaps it back.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Kind tag for fenced code blocks.
pub const CODE_BLOCK: &str = "CODE_BLOCK";
/// Kind tag for images.
pub const IMAGE: &str = "IMAGE";

static RE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__([A-Z]+(?:_[A-Z]+)*)_(\d+)__").unwrap());

/// Fragments of one kind for one conversion, indexed by emission order.
#[derive(Debug)]
pub struct PlaceholderTable {
    kind: &'static str,
    entries: Vec<String>,
}

impl PlaceholderTable {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The token for the fragment at `index`.
    pub fn token(&self, index: usize) -> String {
        format!("__{}_{index}__", self.kind)
    }

    /// Store rendered HTML and return its token.
    pub fn insert(&mut self, html: String) -> String {
        let token = self.token(self.entries.len());
        self.entries.push(html);
        token
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Swap every token of this kind for its stored HTML in a single pass.
    ///
    /// Restored HTML is never rescanned. Tokens of other kinds and unknown
    /// indices are kept as they are.
    pub fn restore(&self, text: &str) -> String {
        if self.entries.is_empty() {
            return text.to_string();
        }
        RE_TOKEN
            .replace_all(text, |caps: &Captures<'_>| {
                if &caps[1] != self.kind {
                    return caps[0].to_string();
                }
                caps[2]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.get(i))
                    .map(str::to_string)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_numbered_per_table() {
        let mut code = PlaceholderTable::new(CODE_BLOCK);
        let mut images = PlaceholderTable::new(IMAGE);
        assert_eq!(code.insert("a".into()), "__CODE_BLOCK_0__");
        assert_eq!(code.insert("b".into()), "__CODE_BLOCK_1__");
        assert_eq!(images.insert("c".into()), "__IMAGE_0__");
        assert_eq!(code.len(), 2);
        assert_eq!(images.kind(), IMAGE);
    }

    #[test]
    fn test_restore_only_own_kind() {
        let mut images = PlaceholderTable::new(IMAGE);
        images.insert("<img />".into());
        assert_eq!(
            images.restore("__IMAGE_0__ __CODE_BLOCK_0__"),
            "<img /> __CODE_BLOCK_0__"
        );
    }

    #[test]
    fn test_restore_does_not_rescan_inserted_html() {
        let mut table = PlaceholderTable::new(CODE_BLOCK);
        table.insert("<section>__CODE_BLOCK_1__</section>".into());
        table.insert("<section>second</section>".into());
        assert_eq!(
            table.restore("__CODE_BLOCK_0__"),
            "<section>__CODE_BLOCK_1__</section>"
        );
    }

    #[test]
    fn test_unknown_index_kept() {
        let mut table = PlaceholderTable::new(CODE_BLOCK);
        table.insert("<section>a</section>".into());
        assert_eq!(table.restore("__CODE_BLOCK_7__"), "__CODE_BLOCK_7__");
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = PlaceholderTable::new(IMAGE);
        assert_eq!(table.restore("__IMAGE_0__"), "__IMAGE_0__");
    }
}
