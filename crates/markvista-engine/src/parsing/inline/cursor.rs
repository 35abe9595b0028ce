/// A cursor over one line (or cell) of text for inline resolution.
///
/// Markdown markers are single-byte ASCII, so marker checks work on bytes;
/// plain-text consumption is char-aware so multi-byte text passes through
/// untouched.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of input.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// Advances by `n` bytes. Caller must keep the position on a char
    /// boundary; marker lengths always do.
    pub fn advance(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes and returns the current char.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }
}
