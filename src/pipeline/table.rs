//! GFM-style pipe tables.
//!
//! ## Detection
//!
//! A single forward scan over trimmed lines, driven by a two-state machine
//! with one line of lookahead:
//!
//! ```text
//!            line has `|` and next line is a separator
//!  Outside ─────────────────────────────────────────────▶ Inside
//!     ▲        (buffer header, skip separator)              │
//!     │                                                     │ line has `|`, not a separator:
//!     │     any other line: render + emit the table,        │ buffer as data row
//!     └──── then re-process that line in Outside ◀──────────┘
//! ```
//!
//! A table still open at end of document is flushed the same way.
//!
//! ## Rendering
//!
//! The first buffered row is the header (`<th>`), the rest are data rows
//! (`<td>`). Empty header cells are dropped; empty data cells are kept as
//! empty `<td>` so columns stay aligned. Cells arrive escaped and are
//! inserted as-is; the cell rules see them unescaped.

use crate::pipeline::escape::unescape_html;
use crate::style::{StyleSheet, TableCellRules};

enum ScanState {
    Outside,
    Inside(Vec<String>),
}

pub fn render_tables(text: &str, styles: &StyleSheet, rules: &TableCellRules) -> String {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut state = ScanState::Outside;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        state = match state {
            ScanState::Outside => {
                let next_is_separator = lines.get(i + 1).is_some_and(|next| is_separator(next));
                if line.contains('|') && next_is_separator {
                    i += 2;
                    ScanState::Inside(vec![line.to_string()])
                } else {
                    result.push(line.to_string());
                    i += 1;
                    ScanState::Outside
                }
            }
            ScanState::Inside(mut rows) => {
                if line.contains('|') && !is_separator(line) {
                    rows.push(line.to_string());
                    i += 1;
                    ScanState::Inside(rows)
                } else {
                    // `i` is not advanced: the line is re-processed outside.
                    result.push(render_table(&rows, styles, rules));
                    ScanState::Outside
                }
            }
        };
    }

    if let ScanState::Inside(rows) = state {
        result.push(render_table(&rows, styles, rules));
    }

    result.join("\n")
}

/// A separator row: only `|`, `-`, `:` and whitespace, with at least one
/// `-` and one `|`.
pub fn is_separator(line: &str) -> bool {
    line.chars()
        .all(|c| c == '|' || c == '-' || c == ':' || c.is_whitespace())
        && line.contains('-')
        && line.contains('|')
}

fn split_row(line: &str) -> Vec<&str> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect()
}

fn render_table(rows: &[String], styles: &StyleSheet, rules: &TableCellRules) -> String {
    let mut html = format!("<table {}>", styles.table.attr());

    if let Some((header, body)) = rows.split_first() {
        let th_attr = styles.table_header.attr();
        html.push_str("<tr>");
        for cell in split_row(header).into_iter().filter(|c| !c.is_empty()) {
            html.push_str(&format!("<th {th_attr}>{cell}</th>"));
        }
        html.push_str("</tr>");

        let td_attr = styles.table_cell.attr();
        for row in body {
            html.push_str("<tr>");
            for (column, cell) in split_row(row).into_iter().enumerate() {
                let attr = match rules.extra_style(&unescape_html(cell), column) {
                    Some(extra) => styles.table_cell.with(extra).attr(),
                    None => td_attr.clone(),
                };
                html.push_str(&format!("<td {attr}>{cell}</td>"));
            }
            html.push_str("</tr>");
        }
    }

    html.push_str("</table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn plain_styles() -> StyleSheet {
        StyleSheet {
            table: Style::new("t"),
            table_header: Style::new("h"),
            table_cell: Style::new("c"),
            ..StyleSheet::default()
        }
    }

    fn no_rules() -> TableCellRules {
        TableCellRules {
            code_prefixes: vec![],
            key_keywords: vec![],
            ..TableCellRules::default()
        }
    }

    fn render(text: &str) -> String {
        render_tables(text, &plain_styles(), &no_rules())
    }

    #[test]
    fn test_separator_detection() {
        assert!(is_separator("|---|---|"));
        assert!(is_separator("| :--- | ---: |"));
        assert!(is_separator("--- | ---"));
        assert!(!is_separator("| a | b |"));
        assert!(!is_separator("---"));
        assert!(!is_separator("|||"));
    }

    #[test]
    fn test_basic_table_shape() {
        let out = render("| A | B |\n|---|---|\n| 1 | 2 |\n|   | 4 |");
        assert_eq!(
            out,
            "<table style=\"t\">\
             <tr><th style=\"h\">A</th><th style=\"h\">B</th></tr>\
             <tr><td style=\"c\">1</td><td style=\"c\">2</td></tr>\
             <tr><td style=\"c\"></td><td style=\"c\">4</td></tr>\
             </table>"
        );
    }

    #[test]
    fn test_empty_header_cells_dropped() {
        let out = render("| | Name |\n|---|---|\n| x | y |");
        assert_eq!(out.matches("<th ").count(), 1);
        assert_eq!(out.matches("<td ").count(), 2);
    }

    #[test]
    fn test_table_ends_and_line_reprocessed() {
        let out = render("| A |\n|---|\n| 1 |\nafter\n| B |\n|---|\n| 2 |");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("<table") && lines[0].contains(">1</td>"));
        assert_eq!(lines[1], "after");
        assert!(lines[2].starts_with("<table") && lines[2].contains(">2</td>"));
    }

    #[test]
    fn test_table_at_end_of_document_flushed() {
        let out = render("intro\n| A | B |\n| --- | --- |");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "intro");
        assert!(lines[1].starts_with("<table") && lines[1].ends_with("</table>"));
        assert!(!lines[1].contains("<td"));
    }

    #[test]
    fn test_pipe_line_without_separator_is_not_a_table() {
        assert_eq!(render("a | b\nc | d"), "a | b\nc | d");
    }

    #[test]
    fn test_second_separator_ends_table() {
        let out = render("| A |\n|---|\n| 1 |\n|---|");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("<table"));
        assert_eq!(lines[1], "|---|");
    }

    #[test]
    fn test_cells_not_reescaped() {
        let out = render("| &lt;A&gt; |\n|---|\n| a &amp; b |");
        assert!(out.contains(">&lt;A&gt;</th>"));
        assert!(out.contains(">a &amp; b</td>"));
    }

    #[test]
    fn test_cell_rules_match_unescaped_text() {
        let rules = TableCellRules {
            code_prefixes: vec!["<".into()],
            key_keywords: vec![],
            ..TableCellRules::default()
        };
        let out = render_tables("| Tag |\n|---|\n| &lt;br&gt; |", &plain_styles(), &rules);
        assert!(out.contains("<td style=\"c; color: #d63384;"), "got: {out}");
        assert!(out.contains(">&lt;br&gt;</td>"));
    }

    #[test]
    fn test_default_cell_rules_applied() {
        let out = render_tables(
            "| Endpoint | Flag |\n|---|---|\n| POST /login | `-v` |",
            &plain_styles(),
            &TableCellRules::default(),
        );
        assert!(out.contains("font-weight: bold"), "key cell should be bold: {out}");
        assert!(out.contains("<td style=\"c; color: #d63384; font-family"));
        assert!(out.contains("<th style=\"h\">Endpoint</th>"));
    }
}
