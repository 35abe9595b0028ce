//! # Inline Resolution
//!
//! Turns one line (or table cell) of text into an ordered sequence of
//! [`InlineToken`]s: emphasis, code spans, links, and badges.
//!
//! ## Context flags
//!
//! The resolver recurses into emphasis spans carrying an explicit
//! [`InlineContext`] (inside-bold / inside-italic / inside-code). The flags
//! travel by value through recursive calls only, so two bold spans cannot
//! nest while bold-inside-italic and italic-inside-bold still work, and the
//! resolver stays reentrant.
//!
//! ## Raw zones and fallback
//!
//! Code spans suppress all other parsing inside them. Unterminated
//! constructs never fail the line; their opening marker is absorbed into the
//! surrounding plain-text run.

pub mod cursor;
pub mod kinds;
pub mod resolver;
pub mod types;

pub use resolver::resolve;
pub use types::{InlineContext, InlineToken};

/// Concatenates the visible text of an inline sequence.
///
/// With all markers stripped this reconstructs the source line's visible
/// characters exactly.
pub fn plain_text(tokens: &[InlineToken]) -> String {
    tokens.iter().map(InlineToken::visible_text).collect()
}
