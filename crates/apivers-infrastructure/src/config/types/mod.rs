//! Configuration types module

pub mod app;
pub mod descriptions;
pub mod logging;

// Re-export main types
pub use app::*;
