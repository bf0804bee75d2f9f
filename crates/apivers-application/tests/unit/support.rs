//! Shared test doubles and fixtures

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use apivers_application::ApiLoader;
use apivers_domain::ports::{ClientModification, ConfigurationProvider, DescriptionLoader};
use apivers_domain::{
    ApiDescription, ApiDescriptionRef, ClientType, Operation, Result, ServiceId, ServiceSettings,
    VersionKey,
};
use serde_json::{Value, json};

/// In-memory configuration with mutable pins
#[derive(Default)]
pub struct TestConfig {
    global: Mutex<Option<String>>,
    services: Mutex<HashMap<String, ServiceSettings>>,
}

impl TestConfig {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_global(&self, version: Option<&str>) {
        *self.global.lock().unwrap() = version.map(str::to_string);
    }

    pub fn set_service(&self, service: &str, settings: ServiceSettings) {
        self.services
            .lock()
            .unwrap()
            .insert(service.to_lowercase(), settings);
    }
}

impl ConfigurationProvider for TestConfig {
    fn global_api_version(&self) -> Option<String> {
        self.global.lock().unwrap().clone()
    }

    fn service_settings(&self, service: &ServiceId) -> ServiceSettings {
        self.services
            .lock()
            .unwrap()
            .get(&service.config_key())
            .cloned()
            .unwrap_or_default()
    }
}

/// Loader wrapper counting how often each reference is realized
pub struct CountingLoader {
    inner: ApiLoader,
    loads: AtomicUsize,
}

impl CountingLoader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: ApiLoader::new(),
            loads: AtomicUsize::new(0),
        })
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl DescriptionLoader for CountingLoader {
    fn load(&self, reference: &ApiDescriptionRef) -> Result<Arc<ApiDescription>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        // Widen the window for concurrent callers.
        std::thread::sleep(std::time::Duration::from_millis(20));
        self.inner.load(reference)
    }
}

/// Modification that appends `name` to a shared journal on attach/detach
pub struct Recording {
    name: String,
    journal: Arc<Mutex<Vec<String>>>,
}

impl Recording {
    pub fn new(name: &str, journal: &Arc<Mutex<Vec<String>>>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            journal: Arc::clone(journal),
        })
    }
}

impl ClientModification for Recording {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_attach(&self, client_type: &ClientType) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("+{}@{}", self.name, client_type.version()));
        Ok(())
    }

    fn on_detach(&self, client_type: &ClientType) -> Result<()> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("-{}@{}", self.name, client_type.version()));
        Ok(())
    }
}

pub fn key(value: &str) -> VersionKey {
    VersionKey::parse(value).unwrap()
}

pub fn description(version: &str, operations: &[&str]) -> ApiDescription {
    operations
        .iter()
        .fold(ApiDescription::new(key(version)), |d, op| {
            d.with_operation(Operation::new(*op))
        })
}

pub fn normalized_document(version: &str) -> Value {
    json!({
        "metadata": {
            "apiVersion": version,
            "endpointPrefix": "dynamodb",
            "serviceFullName": "Amazon DynamoDB",
            "protocol": "json",
            "signatureVersion": "v4"
        },
        "documentation": "Amazon DynamoDB is a fast NoSQL database.",
        "operations": {
            "ListTables": {
                "name": "ListTables",
                "http": { "method": "POST", "requestUri": "/" },
                "input": { "shape": "ListTablesRequest" },
                "output": { "shape": "ListTablesResponse" },
                "errors": [{ "shape": "InternalServerError" }],
                "documentation": "Returns table names."
            },
            "GetItem": {
                "name": "GetItem",
                "http": { "method": "POST", "requestUri": "/" },
                "input": { "shape": "GetItemRequest" }
            }
        },
        "shapes": {
            "ListTablesRequest": {
                "type": "structure",
                "members": { "Limit": { "type": "integer" } }
            },
            "ListTablesResponse": {
                "type": "structure",
                "members": { "TableNames": { "type": "list" } }
            },
            "GetItemRequest": {
                "type": "structure",
                "members": { "TableName": { "type": "string" } }
            }
        }
    })
}

pub fn legacy_document(version: &str) -> Value {
    json!({
        "api_version": version,
        "type": "json",
        "endpoint_prefix": "dynamodb",
        "service_full_name": "Amazon DynamoDB",
        "signature_version": "v4",
        "documentation": "Amazon DynamoDB is a fast NoSQL database.",
        "operations": [
            {
                "name": "ListTables",
                "http": { "method": "post", "uri": "/" },
                "documentation": "Returns table names.",
                "input": {
                    "type": "structure",
                    "members": {
                        "Limit": { "type": "integer", "documentation": "Page size." }
                    }
                },
                "output": {
                    "type": "structure",
                    "members": { "TableNames": { "type": "list" } }
                },
                "errors": ["InternalServerError"]
            },
            {
                "name": "GetItem",
                "input": {
                    "type": "structure",
                    "members": { "TableName": { "type": "string" } }
                }
            }
        ]
    })
}

pub fn write_document(dir: &Path, name: &str, document: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(document).unwrap()).unwrap();
    path
}
