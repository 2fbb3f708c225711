pub mod catalog;
pub mod classify;
pub mod rank;
pub mod resolve;
