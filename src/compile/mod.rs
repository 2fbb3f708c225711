pub mod effects;
pub mod overlay;
