//! Inline style table for every output element kind.
//!
//! The WeChat editor strips `<style>` blocks and class attributes, so every
//! element the pipeline emits carries its presentation in a `style="…"`
//! attribute. [`StyleSheet`] holds the CSS declarations (without the
//! `style="` wrapper) for each element kind; [`Style::attr`] renders the
//! attribute.
//!
//! The defaults reproduce the green (`#009874`) article theme.

use serde::{Deserialize, Serialize};
use std::fmt;

const FONT_STACK: &str = "-apple-system-font, BlinkMacSystemFont, 'Helvetica Neue', 'PingFang SC', 'Hiragino Sans GB', 'Microsoft YaHei UI', 'Microsoft YaHei', Arial, sans-serif";

/// A list of CSS declarations, e.g. `"color: #333; font-size: 14px;"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(String);

impl Style {
    pub fn new(declarations: impl Into<String>) -> Self {
        Self(declarations.into())
    }

    /// The raw declarations.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render as an HTML attribute: `style="…"`.
    pub fn attr(&self) -> String {
        format!("style=\"{}\"", self.0)
    }

    /// A new style with `extra` declarations appended after these.
    pub fn with(&self, extra: &Style) -> Style {
        let base = self.0.trim_end();
        if base.is_empty() {
            return extra.clone();
        }
        if base.ends_with(';') {
            Style(format!("{base} {}", extra.0))
        } else {
            Style(format!("{base}; {}", extra.0))
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Style {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Inline styles per output element kind.
///
/// Deserialises with `#[serde(default)]`, so a config file only needs to
/// list the kinds it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub h1: Style,
    pub h2: Style,
    pub h3: Style,
    pub paragraph: Style,
    pub quote: Style,
    pub code_block: Style,
    pub inline_code: Style,
    pub list: Style,
    pub list_item: Style,
    pub link: Style,
    pub image: Style,
    pub table: Style,
    pub table_header: Style,
    pub table_cell: Style,
    pub footnote_rule: Style,
    pub footnote_heading: Style,
    pub footnote_item: Style,
}

impl StyleSheet {
    /// Every style paired with its field name, for validation and logging.
    pub fn entries(&self) -> [(&'static str, &Style); 17] {
        [
            ("h1", &self.h1),
            ("h2", &self.h2),
            ("h3", &self.h3),
            ("paragraph", &self.paragraph),
            ("quote", &self.quote),
            ("code_block", &self.code_block),
            ("inline_code", &self.inline_code),
            ("list", &self.list),
            ("list_item", &self.list_item),
            ("link", &self.link),
            ("image", &self.image),
            ("table", &self.table),
            ("table_header", &self.table_header),
            ("table_cell", &self.table_cell),
            ("footnote_rule", &self.footnote_rule),
            ("footnote_heading", &self.footnote_heading),
            ("footnote_item", &self.footnote_item),
        ]
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            h1: Style(format!(
                "display: table; text-align: center; color: #3f3f3f; line-height: 1.75; \
                 font-family: {FONT_STACK}; font-size: 18px; font-weight: bold; \
                 margin: 2em auto 1em; padding: 0 1em; border-bottom: 3px solid #009874; margin-top: 0;"
            )),
            h2: Style(format!(
                "display: table; text-align: center; color: #fff; line-height: 1.75; \
                 font-family: {FONT_STACK}; font-size: 16px; font-weight: bold; \
                 margin: 4em auto 2em; padding: 0 0.3em; background: #009874;"
            )),
            h3: Style(format!(
                "text-align: left; color: #3f3f3f; line-height: 1.2; font-family: {FONT_STACK}; \
                 font-size: 14px; font-weight: bold; margin: 2em 8px 0.75em 0; \
                 padding-left: 8px; border-left: 5px solid #009874;"
            )),
            paragraph: "font-size: 16px; line-height: 1.5em; padding: 0.5em 0; margin: 0; color: initial;".into(),
            quote: Style(format!(
                "text-align: left; font-family: {FONT_STACK}; font-size: 14px; font-style: normal; \
                 border-left: none; padding: 0.5em 1em; background: rgba(27, 31, 35, 0.05); margin: 1em 0;"
            )),
            code_block: Style(format!(
                "display: block; padding: 1em; color: rgb(51, 51, 51); background: rgb(248, 248, 248); \
                 font-style: normal; font-weight: 400; letter-spacing: normal; text-indent: 0px; \
                 text-transform: none; word-spacing: 0px; text-align: left; line-height: 1.5; \
                 font-family: {FONT_STACK}; margin: 0.9rem 0; white-space: pre;"
            )),
            inline_code: "text-align: left; line-height: 1; white-space: initial; color: #333; \
                          background: rgba(27, 31, 35, 0.05); padding: 0.1em 0.3em; font-weight: bold; \
                          font-size: 1em; top: -0.1em; position: relative;"
                .into(),
            list: "padding-left: 1.2em;".into(),
            list_item: "margin: 0; line-height: 1.5em; font-size: 14px;".into(),
            link: "color: #009874; text-decoration: none; font-size: 14px;".into(),
            image: "display: initial; max-width: 100%;".into(),
            table: "width: 100%; border-collapse: collapse; line-height: 1.35; font-size: 14px;".into(),
            table_header: "background: rgb(0 0 0 / 5%); border: 1px solid #ddd; padding: 0.25em 0.5em;".into(),
            table_cell: "border: 1px solid #ddd; padding: 0.25em 0.5em;".into(),
            footnote_rule: "margin: 30px 0; border: none; border-top: 1px solid #eee;".into(),
            footnote_heading: Style(format!(
                "display: table; font-family: {FONT_STACK}; font-size: 14px; font-weight: bold; \
                 margin: 3em 0 0.6em 0; padding-left: 0.2em;"
            )),
            footnote_item: "font-size: 10px; font-style: italic; line-height: 1.2; margin: 0.4rem 0;".into(),
        }
    }
}

/// Styling hooks for table data cells.
///
/// Two rules, checked per data cell:
///
/// * **key cell**: first column only: the cell starts with `-` or contains
///   one of `key_keywords`. Gets `key_cell_style` (recolored and bold).
/// * **code cell**: any column: the cell starts with one of
///   `code_prefixes`. Gets `code_cell_style` (recolored, monospace).
///
/// The key rule wins when both apply. Header cells are never restyled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableCellRules {
    pub code_prefixes: Vec<String>,
    pub key_keywords: Vec<String>,
    pub code_cell_style: Style,
    pub key_cell_style: Style,
}

impl Default for TableCellRules {
    fn default() -> Self {
        Self {
            code_prefixes: vec!["-".into(), "`".into()],
            key_keywords: vec!["login".into(), "upload".into()],
            code_cell_style: "color: #d63384; font-family: 'SFMono-Regular', Consolas, monospace;".into(),
            key_cell_style: "color: #d63384; font-weight: bold; font-family: 'SFMono-Regular', Consolas, monospace;"
                .into(),
        }
    }
}

impl TableCellRules {
    /// Extra declarations for a data cell, if any rule matches.
    ///
    /// `cell` is the trimmed, unescaped cell text; `column` is zero-based.
    pub fn extra_style(&self, cell: &str, column: usize) -> Option<&Style> {
        let is_key = column == 0
            && (cell.starts_with('-')
                || self
                    .key_keywords
                    .iter()
                    .any(|k| !k.is_empty() && cell.contains(k.as_str())));
        if is_key {
            return Some(&self.key_cell_style);
        }
        self.code_prefixes
            .iter()
            .any(|p| !p.is_empty() && cell.starts_with(p.as_str()))
            .then_some(&self.code_cell_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_wraps_declarations() {
        assert_eq!(Style::new("color: red;").attr(), "style=\"color: red;\"");
    }

    #[test]
    fn with_appends_after_semicolon() {
        let s = Style::new("border: 0;").with(&Style::new("color: red;"));
        assert_eq!(s.as_str(), "border: 0; color: red;");
        let s = Style::new("border: 0").with(&Style::new("color: red;"));
        assert_eq!(s.as_str(), "border: 0; color: red;");
        let s = Style::new("").with(&Style::new("color: red;"));
        assert_eq!(s.as_str(), "color: red;");
    }

    #[test]
    fn default_styles_have_no_double_quotes() {
        let sheet = StyleSheet::default();
        for (name, style) in sheet.entries() {
            assert!(!style.as_str().contains('"'), "{name} contains a double quote");
            assert!(!style.as_str().is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let sheet: StyleSheet = serde_json::from_str(r#"{"link": "color: blue;"}"#).unwrap();
        assert_eq!(sheet.link.as_str(), "color: blue;");
        assert_eq!(sheet.h1, StyleSheet::default().h1);
    }

    #[test]
    fn key_cell_rule_first_column_only() {
        let rules = TableCellRules::default();
        assert_eq!(rules.extra_style("POST /login", 0), Some(&rules.key_cell_style));
        assert_eq!(rules.extra_style("POST /login", 1), None);
        assert_eq!(rules.extra_style("-v", 0), Some(&rules.key_cell_style));
    }

    #[test]
    fn code_cell_rule_any_column() {
        let rules = TableCellRules::default();
        assert_eq!(rules.extra_style("`cargo`", 2), Some(&rules.code_cell_style));
        assert_eq!(rules.extra_style("--help", 1), Some(&rules.code_cell_style));
        assert_eq!(rules.extra_style("plain", 1), None);
    }
}
