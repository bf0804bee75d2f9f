//! Domain Port Interfaces
//!
//! Contracts for the collaborators the resolver consumes but does not own:
//! the configuration store, the description loader, the client framework and
//! the cross-cutting modifications applied to client types.

/// Read-only configuration access
pub mod config;
/// Client framework hook
pub mod framework;
/// Description loading
pub mod loader;
/// Cross-cutting client type modifications
pub mod modification;

pub use config::ConfigurationProvider;
pub use framework::ClientFramework;
pub use loader::DescriptionLoader;
pub use modification::{ClientModification, SharedModification};
