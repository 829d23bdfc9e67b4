//! Error types for the markdown-wx library.
//!
//! The conversion core is total: [`crate::convert`] accepts any UTF-8 text and
//! always returns HTML, degrading unrecognised constructs to literal text.
//! [`Md2WxError`] therefore only covers the edges around the core: reading
//! and writing files, and validating a [`crate::ConversionConfig`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the markdown-wx library.
#[derive(Debug, Error)]
pub enum Md2WxError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid UTF-8 text.
    #[error("File '{path}' is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidUtf8 { path: PathBuf, offset: usize },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {detail}")]
    ConfigParse { path: PathBuf, detail: String },
}

impl Md2WxError {
    /// Map an I/O error raised while reading `path` to the matching variant.
    pub(crate) fn from_read(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Md2WxError::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Md2WxError::PermissionDenied { path },
            _ => Md2WxError::ReadFailed { path, source },
        }
    }
}
