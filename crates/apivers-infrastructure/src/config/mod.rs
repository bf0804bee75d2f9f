//! Configuration management
//!
//! Layered configuration via figment: defaults, then a TOML file, then
//! `APIVERS_`-prefixed environment variables. [`ConfigHandle`] shares the
//! loaded configuration with the resolver and supports atomic reloads.

pub mod handle;
pub mod loader;
pub mod types;

pub use handle::ConfigHandle;
pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, DescriptionsConfig, LoggingConfig, ServiceConfig};
