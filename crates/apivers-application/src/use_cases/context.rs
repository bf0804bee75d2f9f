//! Shared collaborators of service definitions

use std::sync::Arc;

use apivers_domain::ports::{ClientFramework, ConfigurationProvider, DescriptionLoader};

use crate::domain_services::ApiLoader;
use crate::null::{NullClientFramework, NullConfiguration};

/// Collaborators every service definition of a registry shares
///
/// Only the collaborators are shared; each definition owns its own store,
/// cache and modification log.
#[derive(Clone)]
pub struct ServiceContext {
    /// Configuration store
    pub config: Arc<dyn ConfigurationProvider>,
    /// Description loader
    pub loader: Arc<dyn DescriptionLoader>,
    /// Client framework notified of new client types
    pub framework: Arc<dyn ClientFramework>,
}

impl ServiceContext {
    /// Context with the given configuration and default loader/framework
    pub fn new(config: Arc<dyn ConfigurationProvider>) -> Self {
        Self {
            config,
            loader: Arc::new(ApiLoader::new()),
            framework: Arc::new(NullClientFramework),
        }
    }

    /// Replace the description loader
    pub fn with_loader(mut self, loader: Arc<dyn DescriptionLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Replace the client framework
    pub fn with_framework(mut self, framework: Arc<dyn ClientFramework>) -> Self {
        self.framework = framework;
        self
    }
}

impl Default for ServiceContext {
    fn default() -> Self {
        Self::new(Arc::new(NullConfiguration))
    }
}
