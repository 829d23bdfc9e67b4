//! Result types returned by [`crate::Converter::convert_detailed`] and
//! [`crate::convert_file`].

use serde::Serialize;

/// Everything one conversion produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutput {
    /// The HTML fragment, footnote section included.
    pub html: String,
    /// Link URLs in footnote order (`footnotes[0]` is `[1]`).
    pub footnotes: Vec<String>,
    pub stats: ConversionStats,
}

/// Summary numbers for one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Size of the Markdown input in bytes.
    pub input_bytes: usize,
    /// Size of the HTML output in bytes.
    pub output_bytes: usize,
    /// Fenced code blocks extracted and restored.
    pub code_blocks: usize,
    /// Links rewritten as footnotes.
    pub footnotes: usize,
    /// Wall-clock conversion time in microseconds.
    pub duration_us: u64,
}
