//! Service identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one service definition (e.g. `"DynamoDB"`)
///
/// Configuration lookups use [`ServiceId::config_key`], the lowercase form,
/// so `DynamoDB` reads its settings from `[services.dynamodb]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// Create a service identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as given
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key of this service's section in configuration
    pub fn config_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ServiceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
