use serde::Serialize;

/// One styled or linked fragment of text within a block.
///
/// The set is closed; renderers match exhaustively. Emphasis does not nest
/// structurally: a bold span containing a link is flattened into a `Link`
/// with its `bold` flag set, so every token carries its full styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineToken {
    /// Plain text that isn't part of any special construct.
    Text { value: String },
    /// Bold text, possibly also italic (`***x***` via nesting).
    Bold { text: String, italic: bool },
    /// Italic text, possibly also bold.
    Italic { text: String, bold: bool },
    /// A code span. Raw zone: no markup is recognized inside.
    Code { text: String },
    /// `[text](url)`, with the emphasis flags of the surrounding context.
    Link {
        text: String,
        url: String,
        bold: bool,
        italic: bool,
    },
    /// A badge: `[![alt](image)](link)`.
    ClickableImage {
        alt_text: String,
        image_url: String,
        link_url: String,
    },
}

impl InlineToken {
    /// The visible text of this token, with markdown markers stripped.
    pub fn visible_text(&self) -> &str {
        match self {
            InlineToken::Text { value } => value,
            InlineToken::Bold { text, .. } => text,
            InlineToken::Italic { text, .. } => text,
            InlineToken::Code { text } => text,
            InlineToken::Link { text, .. } => text,
            InlineToken::ClickableImage { alt_text, .. } => alt_text,
        }
    }
}

/// Emphasis/code state carried through recursive inline resolution.
///
/// Passed down by value only, never stored globally, which keeps the
/// resolver reentrant. A bold span cannot open inside bold, italic cannot
/// open inside italic, and nothing opens inside a code span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineContext {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl InlineContext {
    pub fn with_bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn with_italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }
}
