pub mod model;
pub mod presets;
mod validate;
