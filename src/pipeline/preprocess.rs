//! Preprocessing: normalise raw input before any construct is recognised.
//!
//! Two rules, in order:
//! 1. Normalise line endings (CRLF / CR → LF) so every `(?m)` regex in the
//!    later stages sees clean line ends.
//! 2. Join orphaned ordered-list markers: some editors export `1.` alone on
//!    a line with the item text on the next non-empty line. The marker and
//!    that line are merged into `1. text` and the blank lines between them
//!    are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_ORPHAN_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.$").unwrap());

pub fn preprocess(input: &str) -> String {
    let s = normalise_line_endings(input);
    join_orphan_markers(&s)
}

// ── Rule 1: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Join orphaned list markers ───────────────────────────────────────

fn join_orphan_markers(input: &str) -> String {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let marker = lines[i].trim();
        if RE_ORPHAN_MARKER.is_match(marker) {
            let next = lines[i + 1..]
                .iter()
                .position(|l| !l.trim().is_empty())
                .map(|offset| i + 1 + offset);
            if let Some(j) = next {
                result.push(format!("{marker} {}", lines[j].trim()));
                i = j + 1;
                continue;
            }
        }
        result.push(lines[i].to_string());
        i += 1;
    }

    result.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_line_endings() {
        assert_eq!(normalise_line_endings("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_join_marker_with_next_line() {
        assert_eq!(join_orphan_markers("1.\nFirst step"), "1. First step");
    }

    #[test]
    fn test_join_skips_blank_lines() {
        let input = "intro\n2.\n\n   \n  Second step  \nafter";
        assert_eq!(join_orphan_markers(input), "intro\n2. Second step\nafter");
    }

    #[test]
    fn test_trailing_marker_left_alone() {
        assert_eq!(join_orphan_markers("text\n3.\n\n"), "text\n3.\n\n");
    }

    #[test]
    fn test_regular_lines_untouched() {
        let input = "1. already joined\n\nplain";
        assert_eq!(preprocess(input), input);
    }
}
