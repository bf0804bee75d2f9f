//! Cross-cutting Modification Port
//!
//! A modification (typically a plugin) is applied uniformly to every client
//! type of a service. Identity is the modification name.

use std::sync::Arc;

use crate::entities::ClientType;
use crate::error::Result;

/// Shared modification handle
pub type SharedModification = Arc<dyn ClientModification>;

/// Behavior-altering unit attached to client types
pub trait ClientModification: Send + Sync {
    /// Unique name; attaching a second modification with the same name is a no-op
    fn name(&self) -> &str;

    /// Apply to a client type
    fn on_attach(&self, _client_type: &ClientType) -> Result<()> {
        Ok(())
    }

    /// Reverse a previous [`ClientModification::on_attach`]
    fn on_detach(&self, _client_type: &ClientType) -> Result<()> {
        Ok(())
    }
}
