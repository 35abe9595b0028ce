use serde::Serialize;

use super::kinds::banner::BannerKind;
use crate::parsing::inline::types::InlineToken;

/// One structural unit of the document.
///
/// The set is closed and renderers match exhaustively. Blocks appear in
/// document line order; every source line belongs to exactly one block, with
/// fences and tables folding several lines into one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockToken {
    /// `# ` through `#### `; deeper markers fall through to paragraphs.
    Heading { level: u8, text: Vec<InlineToken> },
    /// The default block. A blank line is an empty paragraph.
    Paragraph { inlines: Vec<InlineToken> },
    /// `- ` or `* ` list item; `level` is the indent depth (two spaces per
    /// level).
    Bullet {
        level: usize,
        inlines: Vec<InlineToken>,
    },
    /// A fenced code block, indentation-normalized to the opening fence.
    CodeBlock { language: String, text: String },
    /// `![alt](url)` on a line of its own.
    Image { alt_text: String, url: String },
    /// `[![alt](image)](link)` on a line of its own.
    ClickableImage {
        alt_text: String,
        image_url: String,
        link_url: String,
    },
    /// A callout with a severity kind.
    Banner {
        kind: BannerKind,
        inlines: Vec<InlineToken>,
    },
    /// Header cells plus data rows. Row widths are not reconciled against
    /// the header.
    Table {
        headers: Vec<Vec<InlineToken>>,
        rows: Vec<Vec<Vec<InlineToken>>>,
    },
    /// `---`, `***`, or `___` alone on a line.
    HorizontalRule,
}
