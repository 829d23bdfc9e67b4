//! Pipeline stages for Markdown-to-WeChat conversion.
//!
//! Each submodule implements one family of text transforms. Every stage takes
//! the whole document as a string and returns a new string; the only state
//! that crosses stages is the per-call [`ConversionContext`] (collected
//! footnote URLs and the code-block and image placeholder tables), created
//! fresh for every conversion and dropped when it returns.
//!
//! ## Data Flow
//!
//! ```text
//! markdown ──▶ preprocess ──▶ extract code ──▶ escape text ──▶ headings
//!          ──▶ quotes ──▶ tables ──▶ lists ──▶ links ──▶ images
//!          ──▶ inline code ──▶ emphasis ──▶ paragraphs
//!          ──▶ restore images ──▶ restore code ──▶ (+ footnotes)
//! ```
//!
//! The escape-text stage escapes the whole document before any stage emits
//! markup. Every stage after it inserts the text it captures verbatim, and
//! any `<` in the document from then on belongs to a tag the pipeline wrote.
//!
//! Order matters:
//! - code blocks are swapped for placeholders before any regex stage runs
//!   and restored after the last one, so no stage ever sees code text;
//! - links run before images and skip `![…](…)` matches;
//! - images are parked behind placeholders until after paragraphs, so the
//!   inline passes never rewrite `alt` or `src`;
//! - inline code runs before emphasis so `*` inside backticks stays literal;
//! - bold runs before italic so `**x**` is not half-consumed.

pub mod code_block;
pub mod escape;
pub mod footnote;
pub mod heading;
pub mod inline;
pub mod link;
pub mod list;
pub mod paragraph;
pub mod placeholder;
pub mod preprocess;
pub mod quote;
pub mod table;

use crate::config::ConversionConfig;
use placeholder::{PlaceholderTable, CODE_BLOCK, IMAGE};

/// State owned by exactly one conversion call.
#[derive(Debug)]
pub struct ConversionContext<'a> {
    /// Immutable configuration shared by every call on a converter.
    pub config: &'a ConversionConfig,
    /// Link URLs in document order; footnote number = index + 1.
    pub footnotes: Vec<String>,
    /// Rendered code blocks keyed by placeholder.
    pub code_blocks: PlaceholderTable,
    /// Rendered `<img>` tags keyed by placeholder.
    pub images: PlaceholderTable,
}

impl<'a> ConversionContext<'a> {
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            footnotes: Vec::new(),
            code_blocks: PlaceholderTable::new(CODE_BLOCK),
            images: PlaceholderTable::new(IMAGE),
        }
    }
}

/// One step of the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Preprocess,
    ExtractCodeBlocks,
    EscapeText,
    Headings,
    Blockquotes,
    Tables,
    Lists,
    Links,
    Images,
    InlineCode,
    Emphasis,
    Paragraphs,
    RestoreImages,
    RestoreCodeBlocks,
}

/// The pipeline, in execution order.
pub const STAGES: [Stage; 14] = [
    Stage::Preprocess,
    Stage::ExtractCodeBlocks,
    Stage::EscapeText,
    Stage::Headings,
    Stage::Blockquotes,
    Stage::Tables,
    Stage::Lists,
    Stage::Links,
    Stage::Images,
    Stage::InlineCode,
    Stage::Emphasis,
    Stage::Paragraphs,
    Stage::RestoreImages,
    Stage::RestoreCodeBlocks,
];

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Preprocess => "preprocess",
            Stage::ExtractCodeBlocks => "extract-code-blocks",
            Stage::EscapeText => "escape-text",
            Stage::Headings => "headings",
            Stage::Blockquotes => "blockquotes",
            Stage::Tables => "tables",
            Stage::Lists => "lists",
            Stage::Links => "links",
            Stage::Images => "images",
            Stage::InlineCode => "inline-code",
            Stage::Emphasis => "emphasis",
            Stage::Paragraphs => "paragraphs",
            Stage::RestoreImages => "restore-images",
            Stage::RestoreCodeBlocks => "restore-code-blocks",
        }
    }

    /// Run this stage over the whole document.
    pub fn apply(self, text: &str, cx: &mut ConversionContext<'_>) -> String {
        let config = cx.config;
        let styles = &config.styles;
        match self {
            Stage::Preprocess => preprocess::preprocess(text),
            Stage::ExtractCodeBlocks => {
                code_block::extract_code_blocks(text, &styles.code_block, &mut cx.code_blocks)
            }
            Stage::EscapeText => escape::escape_text(text),
            Stage::Headings => heading::render_headings(text, styles),
            Stage::Blockquotes => quote::render_blockquotes(text, &styles.quote),
            Stage::Tables => table::render_tables(text, styles, &config.table_rules),
            Stage::Lists => list::render_lists(text, styles),
            Stage::Links => link::replace_links(text, &styles.link, &mut cx.footnotes),
            Stage::Images => inline::render_images(text, &styles.image, &mut cx.images),
            Stage::InlineCode => inline::render_inline_code(text, &styles.inline_code),
            Stage::Emphasis => inline::render_emphasis(text),
            Stage::Paragraphs => paragraph::wrap_paragraphs(text, &styles.paragraph),
            Stage::RestoreImages => cx.images.restore(text),
            Stage::RestoreCodeBlocks => cx.code_blocks.restore(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_unique_and_ordered() {
        let names: Vec<&str> = STAGES.iter().map(|s| s.name()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), STAGES.len());
        assert_eq!(names.first(), Some(&"preprocess"));
        assert_eq!(names.last(), Some(&"restore-code-blocks"));
    }

    #[test]
    fn inline_code_runs_before_emphasis() {
        let pos = |s: Stage| STAGES.iter().position(|x| *x == s).unwrap();
        assert!(pos(Stage::InlineCode) < pos(Stage::Emphasis));
        assert!(pos(Stage::Links) < pos(Stage::Images));
        assert!(pos(Stage::Images) < pos(Stage::InlineCode));
        assert!(pos(Stage::Paragraphs) < pos(Stage::RestoreImages));
    }

    #[test]
    fn escape_runs_before_any_markup_is_emitted() {
        let pos = |s: Stage| STAGES.iter().position(|x| *x == s).unwrap();
        assert_eq!(pos(Stage::EscapeText), pos(Stage::ExtractCodeBlocks) + 1);
        assert!(pos(Stage::EscapeText) < pos(Stage::Headings));
    }

    #[test]
    fn fresh_context_is_empty() {
        let config = ConversionConfig::default();
        let cx = ConversionContext::new(&config);
        assert!(cx.footnotes.is_empty());
        assert!(cx.code_blocks.is_empty());
        assert!(cx.images.is_empty());
    }
}
