//! # Infrastructure Layer
//!
//! Technical concerns around the resolver core.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment layered configuration with atomic reload |
//! | [`logging`] | Structured logging with tracing |
//! | [`discovery`] | Description file discovery |
//! | [`framework`] | Named client type registry |
//! | [`error_ext`] | Error context extensions |
//! | [`constants`] | Infrastructure constants |

pub mod config;
pub mod constants;
pub mod discovery;
pub mod error_ext;
pub mod framework;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigBuilder, ConfigHandle, ConfigLoader};
pub use discovery::{DiscoveredDescription, discover_descriptions, register_discovered};
pub use error_ext::ErrorContext;
pub use framework::NamedTypeRegistry;
pub use logging::{init_logging, parse_log_level};
