//! # apivers
//!
//! Versioned API client resolver.
//!
//! A service keeps a registry of dated API descriptions. Constructing a
//! client resolves which version to use (explicit request, per-service pin,
//! global pin, latest), builds the client type for that version once and
//! reuses it for every later client.
//!
//! ## Example
//!
//! ```no_run
//! use apivers::{Apivers, ClientOptions};
//!
//! # fn main() -> apivers::Result<()> {
//! let apivers = Apivers::builder().with_logging(true).build()?;
//! let dynamodb = apivers.define("DynamoDB");
//! dynamodb.register_version("2011-12-05", std::path::Path::new("DynamoDB-2011-12-05.json"))?;
//! dynamodb.register_version("2012-08-10", std::path::Path::new("DynamoDB-2012-08-10.json"))?;
//!
//! let client = apivers.new_client("DynamoDB", ClientOptions::new())?;
//! println!("{}", client.api_version());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Version keys, descriptions, client types, ports, errors
//! - `application` - Version store, resolver, loader, factory, registry
//! - `infrastructure` - Configuration, logging, discovery, type registry

mod bootstrap;

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use apivers_domain::*;
}

/// Application layer - resolution and memoization
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use apivers_application::*;
}

/// Infrastructure layer - configuration, logging and discovery
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use apivers_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{ServiceContext, ServiceDefinition, ServiceRegistry, VersionSource};
pub use bootstrap::{Apivers, ApiversBuilder};
pub use infrastructure::{AppConfig, ConfigBuilder, ConfigHandle, ConfigLoader};
