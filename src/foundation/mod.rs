pub mod cache;
pub mod color;
pub mod error;
