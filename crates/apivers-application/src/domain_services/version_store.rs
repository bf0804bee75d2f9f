//! Per-service version registry
//!
//! Maps version keys to description references. Entries are only ever
//! added; readers get a consistent snapshot without taking a lock.

use std::collections::BTreeMap;
use std::sync::Arc;

use apivers_domain::error::{Error, Result};
use apivers_domain::value_objects::{ApiDescriptionRef, ServiceId, VersionKey};
use arc_swap::ArcSwap;
use tracing::debug;

/// Version key → description reference for one service
pub struct VersionStore {
    service: ServiceId,
    entries: ArcSwap<BTreeMap<VersionKey, ApiDescriptionRef>>,
}

impl VersionStore {
    /// Create an empty store for `service`
    pub fn new(service: ServiceId) -> Self {
        Self {
            service,
            entries: ArcSwap::from_pointee(BTreeMap::new()),
        }
    }

    /// Register a version
    ///
    /// Fails with [`Error::DuplicateVersion`] if the key is already present;
    /// the existing entry is left untouched.
    pub fn insert(&self, version: VersionKey, reference: ApiDescriptionRef) -> Result<()> {
        let mut duplicate = false;
        self.entries.rcu(|current| {
            duplicate = current.contains_key(&version);
            if duplicate {
                return Arc::clone(current);
            }
            let mut next = BTreeMap::clone(current);
            next.insert(version.clone(), reference.clone());
            Arc::new(next)
        });
        if duplicate {
            return Err(Error::duplicate_version(
                self.service.as_str(),
                version.as_str(),
            ));
        }
        debug!(
            service = %self.service,
            version = %version,
            reference = %reference,
            "Registered API version"
        );
        Ok(())
    }

    /// Reference registered for `version`
    pub fn get(&self, version: &VersionKey) -> Option<ApiDescriptionRef> {
        self.entries.load().get(version).cloned()
    }

    /// Whether `version` is registered
    pub fn contains(&self, version: &VersionKey) -> bool {
        self.entries.load().contains_key(version)
    }

    /// All registered keys, ascending
    pub fn keys(&self) -> Vec<VersionKey> {
        self.entries.load().keys().cloned().collect()
    }

    /// Greatest registered key
    pub fn latest(&self) -> Option<VersionKey> {
        self.entries.load().keys().next_back().cloned()
    }

    /// Number of registered versions
    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }
}
