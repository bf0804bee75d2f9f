//! Use cases
//!
//! Public entry points: the per-service [`ServiceDefinition`] and the
//! [`ServiceRegistry`] that owns them.

pub mod context;
pub mod service_definition;
pub mod service_registry;

pub use context::ServiceContext;
pub use service_definition::ServiceDefinition;
pub use service_registry::ServiceRegistry;
