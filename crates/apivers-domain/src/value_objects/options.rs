//! Client construction options
//!
//! [`ServiceSettings`] is what configuration holds for one service,
//! [`ClientOptions`] is what a caller passes when constructing a client, and
//! [`ClientConfig`] is the merge of the two that an instance is built with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::VersionKey;

/// Per-service configuration read from the configuration store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Version this service is pinned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Client defaults (region, endpoint, ...)
    #[serde(default, flatten)]
    pub defaults: Map<String, Value>,
}

impl ServiceSettings {
    /// Pin the service to a version
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Add a client default
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }
}

/// Options supplied when constructing a client
///
/// # Example
///
/// ```
/// use apivers_domain::ClientOptions;
///
/// let options = ClientOptions::new()
///     .with_api_version("2011-12-05")
///     .with_setting("region", "eu-west-1");
/// assert_eq!(options.api_version.as_deref(), Some("2011-12-05"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Explicitly requested API version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Remaining client settings
    #[serde(default, flatten)]
    pub settings: Map<String, Value>,
}

impl ClientOptions {
    /// Empty options: default version, no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific API version
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set a client setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

/// Effective configuration of one client instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientConfig {
    /// The resolved API version
    pub api_version: VersionKey,
    /// Service defaults overlaid with caller settings
    pub settings: Map<String, Value>,
}

impl ClientConfig {
    /// Merge service defaults with caller options; caller values win
    pub fn merge(
        api_version: VersionKey,
        defaults: &ServiceSettings,
        options: &ClientOptions,
    ) -> Self {
        let mut settings = defaults.defaults.clone();
        for (key, value) in &options.settings {
            settings.insert(key.clone(), value.clone());
        }
        Self {
            api_version,
            settings,
        }
    }

    /// Look up a merged setting
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}
