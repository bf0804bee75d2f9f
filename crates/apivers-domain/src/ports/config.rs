//! Configuration Port
//!
//! The resolver reads two scopes from configuration: the per-service section
//! (which may pin a version and carries client defaults) and the process-wide
//! `api_version`. The store is owned elsewhere and only ever read here.

use crate::value_objects::{ServiceId, ServiceSettings};

/// Read-only view of the layered configuration
///
/// # Example
///
/// ```ignore
/// let pinned = config.service_settings(&ServiceId::new("DynamoDB")).api_version;
/// let global = config.global_api_version();
/// ```
pub trait ConfigurationProvider: Send + Sync {
    /// Process-wide pinned version, if any
    fn global_api_version(&self) -> Option<String>;

    /// Settings for one service; empty when the service has no section
    fn service_settings(&self, service: &ServiceId) -> ServiceSettings;
}
