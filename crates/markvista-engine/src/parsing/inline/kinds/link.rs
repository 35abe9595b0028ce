/// A plain `[text](url)` link, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpan<'a> {
    pub text: &'a str,
    pub url: &'a str,
    /// Bytes consumed from the start of the input, through the closing `)`.
    pub len: usize,
}

/// Attempts to parse a link at the start of `s`.
///
/// The closing `]` must be followed immediately by `(`, and the URL needs a
/// closing `)`. Anything short of that is not a link.
pub fn parse(s: &str) -> Option<LinkSpan<'_>> {
    let rest = s.strip_prefix('[')?;
    let text_end = 1 + rest.find(']')?;
    if !s[text_end..].starts_with("](") {
        return None;
    }
    let url_start = text_end + 2;
    let url_end = url_start + s[url_start..].find(')')?;

    Some(LinkSpan {
        text: &s[1..text_end],
        url: &s[url_start..url_end],
        len: url_end + 1,
    })
}
