//! Client instances

use std::sync::Arc;

use serde_json::Value;

use crate::entities::ClientType;
use crate::value_objects::{ApiDescription, ClientConfig, VersionKey};

/// A client constructed from a [`ClientType`] with merged configuration
#[derive(Debug, Clone)]
pub struct ClientInstance {
    client_type: Arc<ClientType>,
    config: ClientConfig,
}

impl ClientInstance {
    pub(crate) fn new(client_type: Arc<ClientType>, config: ClientConfig) -> Self {
        Self {
            client_type,
            config,
        }
    }

    /// The type this instance was built from
    pub fn client_type(&self) -> &Arc<ClientType> {
        &self.client_type
    }

    /// The API version this client speaks
    pub fn api_version(&self) -> &VersionKey {
        &self.config.api_version
    }

    /// Effective configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look up an effective setting
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.config.setting(key)
    }

    /// The bound API description
    pub fn description(&self) -> &ApiDescription {
        self.client_type.description()
    }

    /// Operations this client can invoke
    pub fn operation_names(&self) -> Vec<&str> {
        self.client_type.description().operation_names()
    }

    /// Modifications currently attached to the client type
    pub fn modification_names(&self) -> Vec<String> {
        self.client_type.modification_names()
    }
}
