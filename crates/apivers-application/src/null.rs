//! Null collaborators
//!
//! Used when no configuration store or client framework is wired in, and
//! as test doubles.

use std::sync::Arc;

use apivers_domain::entities::ClientType;
use apivers_domain::error::Result;
use apivers_domain::ports::{ClientFramework, ConfigurationProvider};
use apivers_domain::value_objects::{ServiceId, ServiceSettings};

/// Configuration with no pins and no service sections
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConfiguration;

impl ConfigurationProvider for NullConfiguration {
    fn global_api_version(&self) -> Option<String> {
        None
    }

    fn service_settings(&self, _service: &ServiceId) -> ServiceSettings {
        ServiceSettings::default()
    }
}

/// Framework that accepts every client type without side effects
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClientFramework;

impl ClientFramework for NullClientFramework {
    fn framework_name(&self) -> &str {
        "null"
    }

    fn define_client_type(&self, _client_type: &Arc<ClientType>) -> Result<()> {
        Ok(())
    }
}
