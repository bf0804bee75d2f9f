//! Client Framework Port
//!
//! The external framework that turns a description into a usable client is
//! notified once per materialized client type. It may register the type
//! under its synthesized name or build per-operation dispatch tables.

use std::sync::Arc;

use crate::entities::ClientType;
use crate::error::Result;

/// Hook into the client-construction framework
pub trait ClientFramework: Send + Sync {
    /// Framework name for logging
    fn framework_name(&self) -> &str;

    /// Called exactly once for each client type before it is cached
    fn define_client_type(&self, client_type: &Arc<ClientType>) -> Result<()>;
}
