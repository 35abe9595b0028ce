use super::kinds::banner::{self, BannerKind};
use super::kinds::{bullet, code_fence, heading, image, table};
use crate::parsing::inline::kinds::badge;

/// The block rule a line matches, in fixed priority order.
///
/// Classification looks at one line in isolation. The single non-local
/// decision in the grammar (whether a fence marker actually opens a fence)
/// needs lookahead and stays with the scanner, as does the fallback of
/// half-formed image lines to paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: u8, rest: &'a str },
    Bullet { level: usize, rest: &'a str },
    FenceMarker,
    Banner { kind: BannerKind, rest: &'a str },
    BadgeImage,
    PlainImage,
    TableRow,
    HorizontalRule,
    Text,
}

/// Classifies a line against the block rules, most specific first.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some((level, rest)) = heading::match_prefix(line) {
        return LineKind::Heading { level, rest };
    }
    if let Some((level, rest)) = bullet::match_line(line) {
        return LineKind::Bullet { level, rest };
    }
    if code_fence::is_marker(line) {
        return LineKind::FenceMarker;
    }
    if let Some((kind, rest)) = banner::match_prefix(line) {
        return LineKind::Banner { kind, rest };
    }
    if line.starts_with(badge::OPEN) {
        return LineKind::BadgeImage;
    }
    if line.starts_with(image::OPEN) {
        return LineKind::PlainImage;
    }
    if table::is_row(line) {
        return LineKind::TableRow;
    }
    if matches!(line.trim(), "---" | "***" | "___") {
        return LineKind::HorizontalRule;
    }
    LineKind::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_most_specific_first() {
        assert!(matches!(
            classify("# | not a table |"),
            LineKind::Heading { level: 1, .. }
        ));
        assert!(matches!(classify("- ``` not a fence"), LineKind::Bullet { .. }));
    }

    #[test]
    fn horizontal_rule_forms() {
        assert!(matches!(classify("---"), LineKind::HorizontalRule));
        assert!(matches!(classify("***"), LineKind::HorizontalRule));
        assert!(matches!(classify("___"), LineKind::HorizontalRule));
        assert!(matches!(classify(" --- "), LineKind::HorizontalRule));
        assert!(matches!(classify("----"), LineKind::Text));
    }

    #[test]
    fn pipe_rule_is_a_table_row() {
        assert!(matches!(classify("|---|"), LineKind::TableRow));
    }

    #[test]
    fn badge_beats_plain_image() {
        assert!(matches!(classify("[![a](i)](l)"), LineKind::BadgeImage));
        assert!(matches!(classify("![a](u)"), LineKind::PlainImage));
    }

    #[test]
    fn blank_line_is_text() {
        assert!(matches!(classify(""), LineKind::Text));
    }
}
