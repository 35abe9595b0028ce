pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{BlockToken, InlineToken, parse};
pub use parsing::blocks::kinds::BannerKind;
pub use parsing::inline::plain_text;
