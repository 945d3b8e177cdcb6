// src/csv.rs
use std::mem::take;

/// Minimal CSV parser (quotes + CRLF tolerant). Blank lines are dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // doubled quote
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                push_row(&mut rows, take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline, even with unterminated quotes.
    row.push(field);
    push_row(&mut rows, row);
    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    let blank = row.iter().all(|c| c.trim().is_empty());
    if !blank {
        rows.push(row);
    }
}

/// Drop the first row when its first cell is one of `names` (a header line).
pub fn skip_header(mut rows: Vec<Vec<String>>, names: &[&str]) -> Vec<Vec<String>> {
    let is_header = rows
        .first()
        .and_then(|r| r.first())
        .is_some_and(|c| names.iter().any(|n| c.trim().eq_ignore_ascii_case(n)));
    if is_header {
        rows.remove(0);
    }
    rows
}
