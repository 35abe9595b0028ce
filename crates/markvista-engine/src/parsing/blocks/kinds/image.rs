/// A plain image line (`![alt](url)`), borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLine<'a> {
    pub alt_text: &'a str,
    pub url: &'a str,
}

pub const OPEN: &str = "![";

/// Attempts to parse an image at the start of `line`.
///
/// The closing `]` must be followed immediately by `(`, with a `)` somewhere
/// after; otherwise the line is not an image and falls back to a paragraph.
pub fn parse(line: &str) -> Option<ImageLine<'_>> {
    let rest = line.strip_prefix(OPEN)?;
    let alt_end = OPEN.len() + rest.find(']')?;
    if !line[alt_end..].starts_with("](") {
        return None;
    }
    let url_start = alt_end + 2;
    let url_end = url_start + line[url_start..].find(')')?;

    Some(ImageLine {
        alt_text: &line[OPEN.len()..alt_end],
        url: &line[url_start..url_end],
    })
}
