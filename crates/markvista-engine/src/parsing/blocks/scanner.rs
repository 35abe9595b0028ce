use super::classify::{LineKind, classify};
use super::kinds::{code_fence, image, table};
use super::types::BlockToken;
use crate::parsing::inline::{self, kinds::badge};

/// The top-level driver: walks the document line by line and emits blocks.
///
/// One rule fires per line; fences and tables advance the cursor past every
/// line they consumed. Nothing here can fail: a line that almost matches a
/// rule degrades to a paragraph.
pub struct BlockScanner<'a> {
    lines: &'a [&'a str],
    pos: usize,
    out: Vec<BlockToken>,
}

impl<'a> BlockScanner<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            pos: 0,
            out: Vec::new(),
        }
    }

    pub fn run(mut self) -> Vec<BlockToken> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            match classify(line) {
                LineKind::Heading { level, rest } => self.emit(BlockToken::Heading {
                    level,
                    text: inline::resolve(rest),
                }),
                LineKind::Bullet { level, rest } => self.emit(BlockToken::Bullet {
                    level,
                    inlines: inline::resolve(rest),
                }),
                LineKind::FenceMarker => self.scan_fence(line),
                LineKind::Banner { kind, rest } => self.emit(BlockToken::Banner {
                    kind,
                    inlines: inline::resolve(rest),
                }),
                LineKind::BadgeImage => self.scan_badge(line),
                LineKind::PlainImage => self.scan_image(line),
                LineKind::TableRow => self.scan_table(),
                LineKind::HorizontalRule => self.emit(BlockToken::HorizontalRule),
                LineKind::Text => self.emit_paragraph(line),
            }
        }
        self.out
    }

    /// Emits a single-line block and advances.
    fn emit(&mut self, token: BlockToken) {
        self.out.push(token);
        self.pos += 1;
    }

    fn emit_paragraph(&mut self, line: &str) {
        self.emit(BlockToken::Paragraph {
            inlines: inline::resolve(line),
        });
    }

    /// A fence only opens when some later line closes it; an unterminated
    /// fence marker reads as paragraph text instead of swallowing the rest
    /// of the document.
    fn scan_fence(&mut self, line: &str) {
        let closes = self.lines[self.pos + 1..]
            .iter()
            .any(|l| code_fence::is_marker(l));
        if !closes {
            self.emit_paragraph(line);
            return;
        }
        let block = code_fence::consume(self.lines, self.pos);
        self.out.push(BlockToken::CodeBlock {
            language: block.language,
            text: block.text,
        });
        self.pos = block.next_line;
    }

    fn scan_badge(&mut self, line: &str) {
        match badge::parse(line) {
            Some(b) => self.emit(BlockToken::ClickableImage {
                alt_text: b.alt_text.to_string(),
                image_url: b.image_url.to_string(),
                link_url: b.link_url.to_string(),
            }),
            None => self.emit_paragraph(line),
        }
    }

    fn scan_image(&mut self, line: &str) {
        match image::parse(line) {
            Some(img) => self.emit(BlockToken::Image {
                alt_text: img.alt_text.to_string(),
                url: img.url.to_string(),
            }),
            None => self.emit_paragraph(line),
        }
    }

    fn scan_table(&mut self) {
        let block = table::consume(self.lines, self.pos);
        self.out.push(BlockToken::Table {
            headers: block.headers,
            rows: block.rows,
        });
        self.pos = block.next_line;
    }
}
