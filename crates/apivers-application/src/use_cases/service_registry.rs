//! Service Registry
//!
//! Explicit service identifier → [`ServiceDefinition`] map. Definitions never
//! share state with each other; only the collaborators in the
//! [`ServiceContext`] are common.

use std::sync::Arc;

use apivers_domain::error::{Error, Result};
use apivers_domain::value_objects::{ApiDescriptionRef, ServiceId};
use dashmap::DashMap;
use tracing::info;

use crate::ports::registry::BUNDLED_SERVICES;
use crate::use_cases::{ServiceContext, ServiceDefinition};

/// Registry of service definitions
pub struct ServiceRegistry {
    context: ServiceContext,
    services: DashMap<ServiceId, Arc<ServiceDefinition>>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new(context: ServiceContext) -> Self {
        Self {
            context,
            services: DashMap::new(),
        }
    }

    /// Create a registry seeded from [`BUNDLED_SERVICES`]
    pub fn with_bundled(context: ServiceContext) -> Result<Self> {
        let registry = Self::new(context);
        for entry in BUNDLED_SERVICES {
            let definition = registry.define(entry.service);
            for bundled in entry.versions {
                definition
                    .register_version(bundled.version, ApiDescriptionRef::path(bundled.path))?;
            }
        }
        info!(
            services = registry.services.len(),
            "Registered bundled services"
        );
        Ok(registry)
    }

    /// Definition for `id`, created empty if absent
    pub fn define(&self, id: impl Into<ServiceId>) -> Arc<ServiceDefinition> {
        let id = id.into();
        let entry = self.services.entry(id.clone()).or_insert_with(|| {
            Arc::new(ServiceDefinition::new(id, self.context.clone()))
        });
        Arc::clone(entry.value())
    }

    /// Definition for `id`, if defined
    pub fn get(&self, id: &ServiceId) -> Option<Arc<ServiceDefinition>> {
        self.services.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Definition for `id`, or [`Error::UnknownService`]
    pub fn require(&self, id: &ServiceId) -> Result<Arc<ServiceDefinition>> {
        self.get(id)
            .ok_or_else(|| Error::unknown_service(id.as_str()))
    }

    /// Defined service identifiers, sorted
    pub fn services(&self) -> Vec<ServiceId> {
        let mut ids: Vec<ServiceId> = self.services.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Shared collaborators
    pub fn context(&self) -> &ServiceContext {
        &self.context
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new(ServiceContext::default())
    }
}
