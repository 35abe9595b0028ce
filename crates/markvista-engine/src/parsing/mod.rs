//! # Markdown Parsing
//!
//! Whole-document parsing into an ordered sequence of [`BlockToken`]s.
//!
//! The parser is total: it never fails, for any input. Malformed constructs
//! (unterminated fences, half-written image syntax, unmatched emphasis
//! markers) degrade to the most conservative reading, almost always a
//! paragraph, rather than surfacing an error. Each call allocates a fresh
//! token list and retains nothing, so concurrent calls need no coordination.

pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

pub use blocks::types::BlockToken;
pub use inline::types::InlineToken;

use blocks::scanner::BlockScanner;

/// Parses a complete markdown document into block tokens.
///
/// The whole document is re-scanned on every call; there is no incremental
/// mode. Line order is preserved and every input line contributes to exactly
/// one block (fences and tables fold several lines into one token).
pub fn parse(document: &str) -> Vec<BlockToken> {
    let lines: Vec<&str> = document.lines().collect();
    BlockScanner::new(&lines).run()
}
