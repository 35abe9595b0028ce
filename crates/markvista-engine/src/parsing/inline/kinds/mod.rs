pub mod badge;
pub mod link;
