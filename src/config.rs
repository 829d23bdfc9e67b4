//! Configuration types for Markdown-to-WeChat conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`] or loaded from a JSON file. The config
//! is immutable once a [`crate::Converter`] owns it; nothing in the pipeline
//! writes to it.

use crate::error::Md2WxError;
use crate::style::{Style, StyleSheet, TableCellRules};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for a Markdown-to-WeChat conversion.
///
/// # Example
/// ```rust
/// use markdown_wx::{ConversionConfig, Style};
///
/// let config = ConversionConfig::builder()
///     .references_title("参考")
///     .link_style(Style::new("color: #1e6bb8;"))
///     .build()
///     .unwrap();
/// assert_eq!(config.references_title, "参考");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Inline style per output element kind.
    pub styles: StyleSheet,

    /// Styling hooks for table data cells.
    pub table_rules: TableCellRules,

    /// Heading text of the footnote section. Default: "References".
    pub references_title: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            styles: StyleSheet::default(),
            table_rules: TableCellRules::default(),
            references_title: "References".to_string(),
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults, so a file containing only
    /// `{"styles": {"link": "color: blue;"}}` is valid. The loaded config is
    /// validated the same way [`ConversionConfigBuilder::build`] validates.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Md2WxError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Md2WxError::from_read(path.to_path_buf(), e))?;
        let config: ConversionConfig =
            serde_json::from_str(&raw).map_err(|e| Md2WxError::ConfigParse {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check every style can be embedded in a double-quoted attribute.
    pub fn validate(&self) -> Result<(), Md2WxError> {
        if self.references_title.trim().is_empty() {
            return Err(Md2WxError::InvalidConfig(
                "references title must not be empty".into(),
            ));
        }
        let rule_styles = [
            ("table_rules.code_cell_style", &self.table_rules.code_cell_style),
            ("table_rules.key_cell_style", &self.table_rules.key_cell_style),
        ];
        for (name, style) in self.styles.entries().into_iter().chain(rule_styles) {
            if style.as_str().contains('"') {
                return Err(Md2WxError::InvalidConfig(format!(
                    "style '{name}' must not contain a double quote"
                )));
            }
        }
        Ok(())
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn styles(mut self, styles: StyleSheet) -> Self {
        self.config.styles = styles;
        self
    }

    pub fn table_rules(mut self, rules: TableCellRules) -> Self {
        self.config.table_rules = rules;
        self
    }

    pub fn references_title(mut self, title: impl Into<String>) -> Self {
        self.config.references_title = title.into();
        self
    }

    pub fn paragraph_style(mut self, style: Style) -> Self {
        self.config.styles.paragraph = style;
        self
    }

    pub fn link_style(mut self, style: Style) -> Self {
        self.config.styles.link = style;
        self
    }

    pub fn code_block_style(mut self, style: Style) -> Self {
        self.config.styles.code_block = style;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Md2WxError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
