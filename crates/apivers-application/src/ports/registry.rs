//! Bundled Service Registry
//!
//! Static registration of services and the description files they ship
//! with, using linkme distributed slices. Crates that bundle descriptions
//! submit entries with `#[linkme::distributed_slice(BUNDLED_SERVICES)]` and
//! [`ServiceRegistry::with_bundled`](crate::use_cases::ServiceRegistry::with_bundled)
//! registers them at startup.

/// One registered version of a bundled service
#[derive(Debug, Clone, Copy)]
pub struct BundledVersion {
    /// Version key (`YYYY-MM-DD`)
    pub version: &'static str,
    /// Path of the description document, relative to the loader's base dir
    pub path: &'static str,
}

/// Registry entry for a bundled service
///
/// Several entries may name the same service; their versions are merged.
#[derive(Debug, Clone, Copy)]
pub struct BundledService {
    /// Service identifier (e.g. "DynamoDB")
    pub service: &'static str,
    /// Versions shipped for the service
    pub versions: &'static [BundledVersion],
}

// Auto-collection via linkme distributed slices - bundles submit entries at compile time
#[linkme::distributed_slice]
pub static BUNDLED_SERVICES: [BundledService] = [..];

/// List bundled services as (service, version count) pairs
pub fn list_bundled_services() -> Vec<(&'static str, usize)> {
    BUNDLED_SERVICES
        .iter()
        .map(|entry| (entry.service, entry.versions.len()))
        .collect()
}
