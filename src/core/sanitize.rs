// src/core/sanitize.rs

use regex::Regex;

/// Collapses the indentation runs that HTML source leaves inside table cells.
pub struct WhitespaceNormalizer {
    runs: Regex,
}

impl WhitespaceNormalizer {
    pub fn new() -> Self {
        let runs = Regex::new(r"\s{2,}").expect("whitespace pattern is valid");
        Self { runs }
    }

    /// Replace every run of two or more whitespace characters with one space, then trim.
    /// Single spaces or newlines between words are left alone.
    pub fn collapse(&self, s: &str) -> String {
        self.runs.replace_all(s, " ").trim().to_string()
    }
}

impl Default for WhitespaceNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse every whitespace sequence into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_runs_of_two_or_more() {
        let ws = WhitespaceNormalizer::new();
        assert_eq!(ws.collapse("Foo   \n   Bar"), "Foo Bar");
        assert_eq!(ws.collapse("\n      A view.\n    "), "A view.");
    }

    #[test]
    fn collapse_keeps_single_separators() {
        let ws = WhitespaceNormalizer::new();
        assert_eq!(ws.collapse("one two\nthree"), "one two\nthree");
    }

    #[test]
    fn normalize_ws_flattens_everything() {
        assert_eq!(normalize_ws("  List<\n  E>  "), "List< E>");
    }
}
