//! Main application configuration

use std::collections::BTreeMap;

use apivers_domain::ports::ConfigurationProvider;
use apivers_domain::value_objects::{ServiceId, ServiceSettings};
use serde::{Deserialize, Serialize};

pub use super::descriptions::DescriptionsConfig;
pub use super::logging::LoggingConfig;

/// Per-service section: an optional version pin plus client defaults
///
/// ```toml
/// [services.dynamodb]
/// api_version = "2011-12-05"
/// region = "us-east-1"
/// ```
pub type ServiceConfig = ServiceSettings;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Process-wide version pin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Per-service sections, keyed by lowercase service identifier
    pub services: BTreeMap<String, ServiceConfig>,

    /// Description storage
    pub descriptions: DescriptionsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Section for `service`, matched case-insensitively
    pub fn service(&self, service: &ServiceId) -> Option<&ServiceConfig> {
        let key = service.config_key();
        self.services.get(&key).or_else(|| {
            self.services
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(&key))
                .map(|(_, section)| section)
        })
    }
}

impl ConfigurationProvider for AppConfig {
    fn global_api_version(&self) -> Option<String> {
        self.api_version.clone()
    }

    fn service_settings(&self, service: &ServiceId) -> ServiceSettings {
        self.service(service).cloned().unwrap_or_default()
    }
}
