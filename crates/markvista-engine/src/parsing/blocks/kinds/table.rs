use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline;
use crate::parsing::inline::types::InlineToken;

/// A table row line: starts and ends with a pipe once trimmed.
pub fn is_row(line: &str) -> bool {
    let t = line.trim();
    t.starts_with('|') && t.ends_with('|')
}

/// Header/body separator: pipes around dashes, colons, and whitespace only.
fn is_separator(line: &str) -> bool {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATOR
        .get_or_init(|| Regex::new(r"^\|[-:\s|]+\|$").expect("Invalid separator regex"));
    re.is_match(line.trim())
}

/// Cells of a row: outer pipes discarded, split on `|`, trimmed.
fn split_cells(line: &str) -> Vec<&str> {
    let t = line.trim();
    let t = t.strip_prefix('|').unwrap_or(t);
    let t = t.strip_suffix('|').unwrap_or(t);
    if t.is_empty() {
        return Vec::new();
    }
    t.split('|').map(str::trim).collect()
}

/// A consumed table plus the next scan position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub headers: Vec<Vec<InlineToken>>,
    pub rows: Vec<Vec<Vec<InlineToken>>>,
    pub next_line: usize,
}

/// Consumes the table starting at `lines[start]`.
///
/// The first line is the header, an immediately following separator line is
/// skipped, and every subsequent row line becomes a data row. Cells get the
/// same trim-and-resolve treatment everywhere. Row widths are never checked
/// against the header.
pub fn consume(lines: &[&str], start: usize) -> TableBlock {
    let headers = split_cells(lines[start])
        .into_iter()
        .map(inline::resolve)
        .collect();

    let mut i = start + 1;
    if i < lines.len() && is_row(lines[i]) && is_separator(lines[i]) {
        i += 1;
    }

    let mut rows = Vec::new();
    while i < lines.len() && is_row(lines[i]) {
        rows.push(
            split_cells(lines[i])
                .into_iter()
                .map(inline::resolve)
                .collect(),
        );
        i += 1;
    }

    TableBlock {
        headers,
        rows,
        next_line: i,
    }
}
