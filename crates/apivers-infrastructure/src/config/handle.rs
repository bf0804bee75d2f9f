//! Shared, reloadable configuration
//!
//! Resolution reads configuration on every call, so swapping the snapshot
//! here is enough for later resolutions to observe new pins. Client types
//! already built keep the description they were built with.

use std::sync::Arc;

use apivers_domain::error::Result;
use apivers_domain::ports::ConfigurationProvider;
use apivers_domain::value_objects::{ServiceId, ServiceSettings};
use arc_swap::ArcSwap;
use tracing::{error, info};

use crate::config::{AppConfig, ConfigLoader};

/// Atomically swappable configuration snapshot
pub struct ConfigHandle {
    current: ArcSwap<AppConfig>,
    loader: ConfigLoader,
}

impl ConfigHandle {
    /// Wrap an already loaded configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
            loader: ConfigLoader::new(),
        }
    }

    /// Load through `loader` and keep it for [`reload`](Self::reload)
    pub fn load(loader: ConfigLoader) -> Result<Self> {
        let config = loader.load()?;
        Ok(Self {
            current: ArcSwap::from_pointee(config),
            loader,
        })
    }

    /// Current snapshot
    pub fn current(&self) -> Arc<AppConfig> {
        self.current.load_full()
    }

    /// Replace the snapshot
    pub fn replace(&self, config: AppConfig) {
        self.current.store(Arc::new(config));
    }

    /// Apply `f` to the current snapshot and store the result
    pub fn update<F>(&self, f: F)
    where
        F: Fn(&AppConfig) -> AppConfig,
    {
        self.current.rcu(|current| Arc::new(f(current)));
    }

    /// Re-read all sources; the previous snapshot stays in place on failure
    pub fn reload(&self) -> Result<Arc<AppConfig>> {
        match self.loader.reload() {
            Ok(config) => {
                let config = Arc::new(config);
                self.current.store(Arc::clone(&config));
                info!("Configuration reloaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!(error = %e, "Failed to reload configuration");
                Err(e)
            }
        }
    }
}

impl ConfigurationProvider for ConfigHandle {
    fn global_api_version(&self) -> Option<String> {
        self.current.load().api_version.clone()
    }

    fn service_settings(&self, service: &ServiceId) -> ServiceSettings {
        self.current.load().service_settings(service)
    }
}

impl std::fmt::Debug for ConfigHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigHandle")
            .field("current", &self.current.load_full())
            .field("loader", &self.loader)
            .finish()
    }
}
