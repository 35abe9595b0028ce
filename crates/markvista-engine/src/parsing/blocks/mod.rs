//! # Block Parsing
//!
//! Line-oriented scanning of the document into [`BlockToken`]s.
//!
//! ## Phases
//!
//! 1. **Line classification** (`classify`): each line is matched against the
//!    block rules in a fixed priority order, most specific first, using only
//!    the line itself.
//!
//! 2. **Scanning** (`scanner`): a [`BlockScanner`] walks the classified
//!    lines with a single cursor, applies the fence-termination lookahead,
//!    and delegates multi-line constructs to the fence and table
//!    sub-parsers under `kinds`.
//!
//! ## Key invariants
//!
//! - Blocks come out in document line order.
//! - Every line maps to exactly one block; fences and tables fold their
//!   run of lines into a single token and move the cursor past it.
//! - Fenced code is a raw zone: no block or inline parsing inside.
//! - No rule errors; malformed fences and image lines become paragraphs.

pub mod classify;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use classify::{LineKind, classify};
pub use scanner::BlockScanner;
pub use types::BlockToken;
