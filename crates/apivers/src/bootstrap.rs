//! Process wiring
//!
//! Loads configuration, optionally installs logging, and builds a
//! [`ServiceRegistry`] whose definitions share one loader, one reloadable
//! configuration and one [`NamedTypeRegistry`].

use std::sync::Arc;

use apivers_application::{ApiLoader, ServiceContext, ServiceDefinition, ServiceRegistry};
use apivers_domain::entities::ClientInstance;
use apivers_domain::error::Result;
use apivers_domain::value_objects::{ClientOptions, ServiceId};
use apivers_infrastructure::config::{AppConfig, ConfigHandle, ConfigLoader};
use apivers_infrastructure::{NamedTypeRegistry, init_logging, register_discovered};
use tracing::info;

/// Configured resolver for a process
pub struct Apivers {
    config: Arc<ConfigHandle>,
    framework: Arc<NamedTypeRegistry>,
    registry: ServiceRegistry,
}

impl Apivers {
    /// Start building with configuration from the default sources
    pub fn builder() -> ApiversBuilder {
        ApiversBuilder::default()
    }

    /// Build from an already loaded configuration
    pub fn from_config(config: AppConfig) -> Result<Self> {
        Self::builder().with_config(config).build()
    }

    /// Shared configuration handle
    pub fn config(&self) -> &Arc<ConfigHandle> {
        &self.config
    }

    /// Service registry
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Client types built so far, by synthesized name
    pub fn client_types(&self) -> &Arc<NamedTypeRegistry> {
        &self.framework
    }

    /// Definition for `service`, created empty if absent
    pub fn define(&self, service: impl Into<ServiceId>) -> Arc<ServiceDefinition> {
        self.registry.define(service)
    }

    /// Definition for `service`; fails with `UnknownService` if undefined
    pub fn service(&self, service: impl Into<ServiceId>) -> Result<Arc<ServiceDefinition>> {
        self.registry.require(&service.into())
    }

    /// Construct a client of `service`
    pub fn new_client(
        &self,
        service: impl Into<ServiceId>,
        options: ClientOptions,
    ) -> Result<ClientInstance> {
        self.service(service)?.new_client(options)
    }

    /// Re-read configuration; later resolutions use the new pins
    pub fn reload_config(&self) -> Result<()> {
        self.config.reload().map(|_| ())
    }
}

impl std::fmt::Debug for Apivers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Apivers")
            .field("services", &self.registry.services())
            .field("client_types", &self.framework.names())
            .finish()
    }
}

/// Builder for [`Apivers`]
#[derive(Debug, Clone, Default)]
pub struct ApiversBuilder {
    loader: ConfigLoader,
    config: Option<AppConfig>,
    logging: bool,
    discover: bool,
}

impl ApiversBuilder {
    /// Load configuration through `loader`
    pub fn with_loader(mut self, loader: ConfigLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Use `config` instead of loading one
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Install the global tracing subscriber from the logging section
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Register every description found in `descriptions.dir`
    pub fn with_discovery(mut self, enabled: bool) -> Self {
        self.discover = enabled;
        self
    }

    /// Wire everything together
    pub fn build(self) -> Result<Apivers> {
        let config = match self.config {
            Some(config) => ConfigHandle::new(config),
            None => ConfigHandle::load(self.loader)?,
        };
        let snapshot = config.current();
        if self.logging {
            init_logging(&snapshot.logging)?;
        }

        let mut loader = ApiLoader::new().with_translation(snapshot.descriptions.translation());
        if let Some(dir) = &snapshot.descriptions.dir {
            loader = loader.with_base_dir(dir);
        }

        let config = Arc::new(config);
        let framework = Arc::new(NamedTypeRegistry::new());
        let context = ServiceContext::new(config.clone())
            .with_loader(Arc::new(loader))
            .with_framework(framework.clone());
        let registry = ServiceRegistry::with_bundled(context)?;

        if self.discover
            && let Some(dir) = &snapshot.descriptions.dir
        {
            register_discovered(&registry, dir)?;
        }

        info!(
            services = registry.services().len(),
            pinned = snapshot.api_version.as_deref().unwrap_or("none"),
            "apivers ready"
        );
        Ok(Apivers {
            config,
            framework,
            registry,
        })
    }
}
