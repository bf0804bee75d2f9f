//! Application ports
//!
//! - [`registry`]: static service registration via linkme distributed slices

pub mod registry;

pub use registry::{BUNDLED_SERVICES, BundledService, BundledVersion, list_bundled_services};
