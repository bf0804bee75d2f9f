//! Service Definition
//!
//! The registry entry callers work with. A definition composes a version
//! store, a resolver, a client factory and a modification log, all scoped
//! to one service:
//!
//! ```text
//! register_version ──► VersionStore
//!                           │ keys
//! new_client(options) ──► VersionResolver ──► ClientFactory ──► ApiLoader
//!                                                  │
//!                                    ClientType ◄──┘ (memoized)
//!                                        │
//!                   merged config ──► ClientInstance
//! ```

use std::sync::Arc;

use apivers_domain::entities::{ClientInstance, ClientType};
use apivers_domain::error::{Error, Result};
use apivers_domain::ports::SharedModification;
use apivers_domain::value_objects::{
    ApiDescription, ApiDescriptionRef, ClientConfig, ClientOptions, ServiceId, VersionKey,
};
use tracing::{debug, info, warn};

use crate::domain_services::{
    ClientFactory, ModificationLog, ResolvedVersion, VersionResolver, VersionStore,
};
use crate::use_cases::ServiceContext;

/// Versioned client resolver for one service
pub struct ServiceDefinition {
    id: ServiceId,
    store: Arc<VersionStore>,
    modifications: Arc<ModificationLog>,
    resolver: VersionResolver,
    factory: ClientFactory,
    context: ServiceContext,
}

impl ServiceDefinition {
    /// Create an empty definition for `id`
    pub fn new(id: impl Into<ServiceId>, context: ServiceContext) -> Self {
        let id = id.into();
        let store = Arc::new(VersionStore::new(id.clone()));
        let modifications = Arc::new(ModificationLog::new());
        let factory = ClientFactory::new(
            id.clone(),
            Arc::clone(&store),
            Arc::clone(&modifications),
            Arc::clone(&context.loader),
            Arc::clone(&context.framework),
        );
        Self {
            resolver: VersionResolver::new(Arc::clone(&context.config)),
            id,
            store,
            modifications,
            factory,
            context,
        }
    }

    /// Service identifier
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Register a description under `version`
    ///
    /// Registering the same version twice fails with
    /// [`Error::DuplicateVersion`].
    pub fn register_version(
        &self,
        version: impl AsRef<str>,
        reference: impl Into<ApiDescriptionRef>,
    ) -> Result<()> {
        let version = VersionKey::parse(version)?;
        self.store.insert(version, reference.into())
    }

    /// Registered versions, ascending
    pub fn versions(&self) -> Vec<VersionKey> {
        self.store.keys()
    }

    /// Newest registered version
    pub fn latest_version(&self) -> Result<VersionKey> {
        self.store
            .latest()
            .ok_or_else(|| Error::no_versions_registered(self.id.as_str()))
    }

    /// Version a client built without an explicit request would use
    pub fn default_version(&self) -> Result<VersionKey> {
        self.resolve_version(None).map(|resolved| resolved.version)
    }

    /// Resolve the effective version, reporting which layer chose it
    pub fn resolve_version(&self, requested: Option<&str>) -> Result<ResolvedVersion> {
        self.resolver.resolve(&self.id, &self.store.keys(), requested)
    }

    /// Memoized client type for `version`
    pub fn client_type(&self, version: &VersionKey) -> Result<Arc<ClientType>> {
        self.factory.client_type(version)
    }

    /// Normalized description registered under `version`
    pub fn api_description(&self, version: &VersionKey) -> Result<Arc<ApiDescription>> {
        self.client_type(version)
            .map(|client_type| Arc::clone(client_type.description()))
    }

    /// Client types built so far, ordered by version
    pub fn materialized_types(&self) -> Vec<Arc<ClientType>> {
        self.factory.materialized()
    }

    /// Construct a client
    ///
    /// The version comes from `options.api_version` if set, otherwise from
    /// configuration. Service defaults from configuration are merged under
    /// `options.settings`.
    pub fn new_client(&self, options: ClientOptions) -> Result<ClientInstance> {
        let resolved = self.resolve_version(options.api_version.as_deref())?;
        let client_type = self.client_type(&resolved.version)?;
        let defaults = self.context.config.service_settings(&self.id);
        let config = ClientConfig::merge(resolved.version, &defaults, &options);
        debug!(
            service = %self.id,
            version = %config.api_version,
            source = %resolved.source,
            "Constructed client"
        );
        Ok(client_type.instantiate(config))
    }

    /// Record a modification and apply it to every version's client type
    ///
    /// All registered versions are materialized so that every client type
    /// carries the modification once this returns. Versions that fail to
    /// build are skipped with a warning and the first failure is returned;
    /// the modification stays recorded and is applied when they are built.
    pub fn add_modification(&self, modification: SharedModification) -> Result<()> {
        if !self.modifications.record(Arc::clone(&modification)) {
            debug!(
                service = %self.id,
                name = modification.name(),
                "Modification already recorded"
            );
            return Ok(());
        }
        info!(service = %self.id, name = modification.name(), "Recorded modification");

        let mut first_error = None;
        for version in self.store.keys() {
            let applied = self.factory.client_type(&version).and_then(|client_type| {
                client_type.attach_modification(Arc::clone(&modification))
            });
            if let Err(e) = applied {
                warn!(
                    service = %self.id,
                    version = %version,
                    name = modification.name(),
                    error = %e,
                    "Failed to apply modification"
                );
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Forget a modification and detach it from every built client type
    ///
    /// Returns `false` if no modification with that name was recorded.
    pub fn remove_modification(&self, name: &str) -> Result<bool> {
        if self.modifications.forget(name).is_none() {
            return Ok(false);
        }
        for client_type in self.factory.materialized() {
            client_type.detach_modification(name)?;
        }
        info!(service = %self.id, name, "Removed modification");
        Ok(true)
    }

    /// Recorded modification names, in order
    pub fn modification_names(&self) -> Vec<String> {
        self.modifications.names()
    }
}

impl std::fmt::Debug for ServiceDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceDefinition")
            .field("id", &self.id)
            .field("versions", &self.store.keys())
            .field("modifications", &self.modifications.names())
            .finish()
    }
}
