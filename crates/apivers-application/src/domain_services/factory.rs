//! Client type factory
//!
//! Memoizes one [`ClientType`] per registered version. Each version owns a
//! once-cell, so concurrent callers asking for the same version block on a
//! single build (and a single description load) while other versions
//! proceed independently. A failed build leaves the cell empty, so a later
//! call can retry.

use std::sync::Arc;

use apivers_domain::entities::ClientType;
use apivers_domain::error::{Error, Result};
use apivers_domain::ports::{ClientFramework, DescriptionLoader};
use apivers_domain::value_objects::{ServiceId, VersionKey};
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::domain_services::modifications::ModificationLog;
use crate::domain_services::version_store::VersionStore;

type ClientTypeCell = Arc<OnceCell<Arc<ClientType>>>;

/// Builds and caches client types for one service
pub struct ClientFactory {
    service: ServiceId,
    store: Arc<VersionStore>,
    modifications: Arc<ModificationLog>,
    loader: Arc<dyn DescriptionLoader>,
    framework: Arc<dyn ClientFramework>,
    cells: DashMap<VersionKey, ClientTypeCell>,
}

impl ClientFactory {
    /// Create a factory over `store`
    pub fn new(
        service: ServiceId,
        store: Arc<VersionStore>,
        modifications: Arc<ModificationLog>,
        loader: Arc<dyn DescriptionLoader>,
        framework: Arc<dyn ClientFramework>,
    ) -> Self {
        Self {
            service,
            store,
            modifications,
            loader,
            framework,
            cells: DashMap::new(),
        }
    }

    /// Client type for `version`, built on first use
    ///
    /// Repeated calls return the identical `Arc`.
    pub fn client_type(&self, version: &VersionKey) -> Result<Arc<ClientType>> {
        if !self.store.contains(version) {
            return Err(Error::unknown_version(
                self.service.as_str(),
                version.as_str(),
            ));
        }

        // Clone the cell out so the map shard is not locked while building.
        let cell = self.cells.entry(version.clone()).or_default().clone();
        let mut built = false;
        let client_type = cell
            .get_or_try_init(|| {
                built = true;
                self.build(version)
            })?
            .clone();
        if built {
            self.detach_forgotten(&client_type);
        }
        Ok(client_type)
    }

    /// Client type for `version` if it has already been built
    pub fn cached(&self, version: &VersionKey) -> Option<Arc<ClientType>> {
        self.cells
            .get(version)
            .and_then(|cell| cell.value().get().cloned())
    }

    /// All built client types, ordered by version
    pub fn materialized(&self) -> Vec<Arc<ClientType>> {
        let mut types: Vec<Arc<ClientType>> = self
            .cells
            .iter()
            .filter_map(|entry| entry.value().get().cloned())
            .collect();
        types.sort_by(|a, b| a.version().cmp(b.version()));
        types
    }

    fn build(&self, version: &VersionKey) -> Result<Arc<ClientType>> {
        let reference = self.store.get(version).ok_or_else(|| {
            Error::unknown_version(self.service.as_str(), version.as_str())
        })?;

        let description = self.loader.load(&reference)?;
        if description.version() != version {
            warn!(
                service = %self.service,
                registered = %version,
                declared = %description.version(),
                "API description declares a different version than it is registered under"
            );
        }

        let client_type = Arc::new(ClientType::new(
            self.service.clone(),
            version.clone(),
            description,
        ));
        self.framework.define_client_type(&client_type)?;

        for modification in self.modifications.snapshot().iter() {
            client_type.attach_modification(Arc::clone(modification))?;
        }

        info!(
            service = %self.service,
            version = %version,
            type_name = client_type.type_name(),
            framework = self.framework.framework_name(),
            "Materialized client type"
        );
        Ok(client_type)
    }

    /// Detach modifications forgotten while `client_type` was being built
    ///
    /// A removal that ran before the cell was published could not see this
    /// type, so the log is checked again once it is visible.
    fn detach_forgotten(&self, client_type: &ClientType) {
        let recorded = self.modifications.names();
        for name in client_type.modification_names() {
            if recorded.contains(&name) {
                continue;
            }
            if let Err(e) = client_type.detach_modification(&name) {
                warn!(
                    service = %self.service,
                    version = %client_type.version(),
                    name = %name,
                    error = %e,
                    "Failed to detach removed modification"
                );
            }
        }
    }
}
