use serde::Serialize;

/// Severity of a callout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BannerKind {
    Info,
    Warning,
    Error,
    Success,
    Note,
}

/// Severity prefixes, most specific first; a bare `!!! ` is an info banner.
const PREFIXES: [(&str, BannerKind); 5] = [
    ("!!! warning ", BannerKind::Warning),
    ("!!! error ", BannerKind::Error),
    ("!!! success ", BannerKind::Success),
    ("!!! note ", BannerKind::Note),
    ("!!! ", BannerKind::Info),
];

/// `> Note:` also reads as a note banner; only the `> ` prefix is stripped,
/// so the literal `Note:` stays in the banner text.
const QUOTE_NOTE: &str = "> Note:";

/// Matches a banner prefix at the start of the raw line, returning the kind
/// and the remaining text.
pub fn match_prefix(line: &str) -> Option<(BannerKind, &str)> {
    for (prefix, kind) in PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some((kind, rest));
        }
    }
    if line.starts_with(QUOTE_NOTE) {
        return Some((BannerKind::Note, &line[2..]));
    }
    None
}
