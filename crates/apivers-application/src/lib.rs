//! Application Layer - apivers
//!
//! Version resolution, description loading and client type memoization.
//!
//! ## Architecture
//!
//! The application layer:
//! - Composes domain services into per-service definitions
//! - Talks to configuration, storage and the client framework only through
//!   the ports defined in `apivers-domain`
//! - Has no dependencies on infrastructure
//!
//! ## Modules
//!
//! - `domain_services::*`: store, resolver, loader, factory
//! - `use_cases::*`: `ServiceDefinition`, `ServiceRegistry`
//! - `ports::registry`: static service registration
//! - `null`: no-op collaborators

pub mod domain_services;
pub mod null;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use null::{NullClientFramework, NullConfiguration};
pub use ports::*;
pub use use_cases::*;
