pub mod banner;
pub mod bullet;
pub mod code_fence;
pub mod heading;
pub mod image;
pub mod table;

pub use banner::BannerKind;
