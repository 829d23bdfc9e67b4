//! Conversion entry points.
//!
//! [`Converter`] owns an immutable [`ConversionConfig`] and runs the
//! [`STAGES`] pipeline once per call. Per-call state (footnotes, code-block
//! placeholders) lives in a [`ConversionContext`] created inside each call,
//! so a single converter can be shared across threads and two calls can
//! never see each other's footnote numbering.

use crate::config::ConversionConfig;
use crate::error::Md2WxError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{footnote, ConversionContext, STAGES};
use once_cell::sync::Lazy;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

static DEFAULT_CONVERTER: Lazy<Converter> = Lazy::new(Converter::default);

/// Convert Markdown to a WeChat-ready HTML fragment with the default styles.
///
/// Never fails: constructs the pipeline does not recognise pass through as
/// (escaped) text.
///
/// # Example
/// ```rust
/// let html = markdown_wx::convert("# Hello\n\nSee [docs](https://docs.rs).");
/// assert!(html.contains("<h1 style="));
/// assert!(html.contains("<sup>[1]</sup>"));
/// assert!(html.contains("[1] https://docs.rs"));
/// ```
pub fn convert(markdown: &str) -> String {
    DEFAULT_CONVERTER.convert(markdown)
}

/// The Markdown-to-WeChat converter.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert Markdown to an HTML fragment.
    pub fn convert(&self, markdown: &str) -> String {
        self.convert_detailed(markdown).html
    }

    /// Convert Markdown and also return the collected footnotes and stats.
    pub fn convert_detailed(&self, markdown: &str) -> ConversionOutput {
        let start = Instant::now();
        debug!("Converting {} bytes of Markdown", markdown.len());

        let mut cx = ConversionContext::new(&self.config);
        let mut html = markdown.to_string();
        for stage in STAGES {
            html = stage.apply(&html, &mut cx);
            debug!("Stage {} -> {} bytes", stage.name(), html.len());
        }

        let section =
            footnote::render_footnotes(&cx.footnotes, &self.config.references_title, &self.config.styles);
        if !section.is_empty() {
            if !html.is_empty() {
                html.push('\n');
            }
            html.push_str(&section);
        }

        let stats = ConversionStats {
            input_bytes: markdown.len(),
            output_bytes: html.len(),
            code_blocks: cx.code_blocks.len(),
            footnotes: cx.footnotes.len(),
            duration_us: start.elapsed().as_micros() as u64,
        };
        debug!(
            "Conversion complete: {} code blocks, {} footnotes, {}us",
            stats.code_blocks, stats.footnotes, stats.duration_us
        );

        ConversionOutput {
            html,
            footnotes: cx.footnotes,
            stats,
        }
    }
}

/// Convert a Markdown file and write the HTML to `output_path`.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub fn convert_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Md2WxError> {
    let input_path = input_path.as_ref();
    let path = output_path.as_ref();
    info!("Converting {} -> {}", input_path.display(), path.display());

    let markdown = read_markdown(input_path)?;
    let output = Converter::new(config.clone()).convert_detailed(&markdown);

    let write_err = |e: std::io::Error| Md2WxError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp_path = path.with_extension("html.tmp");
    std::fs::write(&tmp_path, &output.html).map_err(write_err)?;
    std::fs::rename(&tmp_path, path).map_err(write_err)?;

    info!(
        "Wrote {} bytes ({} footnotes) to {}",
        output.stats.output_bytes,
        output.stats.footnotes,
        path.display()
    );
    Ok(output.stats)
}

/// Read a Markdown file as UTF-8 text.
pub fn read_markdown(path: impl AsRef<Path>) -> Result<String, Md2WxError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Md2WxError::from_read(path.to_path_buf(), e))?;
    String::from_utf8(bytes).map_err(|e| Md2WxError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })
}
