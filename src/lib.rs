//! # markdown-wx
//!
//! Convert Markdown to an HTML fragment that pastes cleanly into the WeChat
//! official account article editor.
//!
//! ## Why this crate?
//!
//! The WeChat editor drops `<style>` blocks and class attributes and renders
//! links as plain, non-clickable text. Output from a regular Markdown renderer
//! therefore loses its styling and its links on paste. This crate emits HTML
//! where every element carries an inline `style` attribute, and rewrites each
//! link as styled text with a numbered footnote listed at the end.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Preprocess   line endings, orphaned `1.` markers
//!  ├─ 2. Protect      fenced code → placeholders
//!  ├─ 3. Escape       the whole document, once
//!  ├─ 4. Blocks       headings, quotes, tables, lists
//!  ├─ 5. Inline       links → footnotes, images (parked), code spans, emphasis
//!  ├─ 6. Paragraphs   wrap non-block lines in <p>
//!  ├─ 7. Restore      placeholders → image and code HTML
//!  └─ 8. Footnotes    reference section, if any links were seen
//! ```
//!
//! This is a best-effort line/regex pipeline, not a CommonMark parser: lists
//! and quotes are single-line, headings stop at level 3, and nothing nests.
//!
//! ## Quick Start
//!
//! ```rust
//! use markdown_wx::{ConversionConfig, Converter};
//!
//! let converter = Converter::new(ConversionConfig::default());
//! let html = converter.convert("# Title\n\nHello **world**, see [here](https://x.com).\n");
//! assert!(html.contains("<strong>world</strong>"));
//! assert!(html.contains("[1] https://x.com"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2wx` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! markdown-wx = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod style;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, convert_file, read_markdown, Converter};
pub use error::Md2WxError;
pub use output::{ConversionOutput, ConversionStats};
pub use style::{Style, StyleSheet, TableCellRules};
