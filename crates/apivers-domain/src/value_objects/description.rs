//! Normalized API descriptions
//!
//! The normalized form is what the client framework consumes: service
//! metadata, named operations with their HTTP binding, and a flat table of
//! named shapes. Raw legacy documents are translated into this form by the
//! application-layer loader.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::VersionKey;

/// Normalized API description for one service version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescription {
    /// Service-level metadata, including the API version
    pub metadata: ApiMetadata,
    /// Operations keyed by name
    #[serde(default)]
    pub operations: BTreeMap<String, Operation>,
    /// Named shapes referenced by operations
    #[serde(default)]
    pub shapes: BTreeMap<String, Value>,
    /// Service documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl ApiDescription {
    /// Create an empty description for the given version
    pub fn new(api_version: VersionKey) -> Self {
        Self {
            metadata: ApiMetadata::new(api_version),
            operations: BTreeMap::new(),
            shapes: BTreeMap::new(),
            documentation: None,
        }
    }

    /// Add an operation
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.insert(operation.name.clone(), operation);
        self
    }

    /// Add a named shape
    pub fn with_shape(mut self, name: impl Into<String>, shape: Value) -> Self {
        self.shapes.insert(name.into(), shape);
        self
    }

    /// The API version this description defines
    pub fn version(&self) -> &VersionKey {
        &self.metadata.api_version
    }

    /// Operation names in sorted order
    pub fn operation_names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    /// Look up an operation by name
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }
}

/// Service-level metadata of a description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMetadata {
    /// API version (`YYYY-MM-DD`)
    pub api_version: VersionKey,
    /// Endpoint prefix (e.g. `dynamodb`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_prefix: Option<String>,
    /// Full human-readable service name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_full_name: Option<String>,
    /// Short service name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_abbreviation: Option<String>,
    /// Request signature version (e.g. `v4`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_version: Option<String>,
    /// Wire protocol (e.g. `json`, `query`, `rest-xml`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Target header prefix for JSON protocols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_prefix: Option<String>,
    /// JSON protocol version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_version: Option<String>,
}

impl ApiMetadata {
    /// Metadata carrying only the version
    pub fn new(api_version: VersionKey) -> Self {
        Self {
            api_version,
            endpoint_prefix: None,
            service_full_name: None,
            service_abbreviation: None,
            signature_version: None,
            protocol: None,
            target_prefix: None,
            json_version: None,
        }
    }
}

/// One operation of an API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation name (e.g. `ListTables`)
    pub name: String,
    /// HTTP binding
    #[serde(default)]
    pub http: HttpBinding,
    /// Input shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<ShapeRef>,
    /// Output shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<ShapeRef>,
    /// Error shapes the operation may return
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ShapeRef>,
    /// Operation documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Operation {
    /// Create an operation with the default HTTP binding
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            http: HttpBinding::default(),
            input: None,
            output: None,
            errors: Vec::new(),
            documentation: None,
        }
    }

    /// Set the input shape
    pub fn with_input(mut self, shape: impl Into<String>) -> Self {
        self.input = Some(ShapeRef::new(shape));
        self
    }

    /// Set the output shape
    pub fn with_output(mut self, shape: impl Into<String>) -> Self {
        self.output = Some(ShapeRef::new(shape));
        self
    }

    /// Set the HTTP binding
    pub fn with_http(mut self, method: impl Into<String>, request_uri: impl Into<String>) -> Self {
        self.http = HttpBinding {
            method: method.into(),
            request_uri: request_uri.into(),
        };
        self
    }
}

/// HTTP method and request URI template of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpBinding {
    /// HTTP method
    pub method: String,
    /// Request URI template
    pub request_uri: String,
}

impl Default for HttpBinding {
    fn default() -> Self {
        Self {
            method: "POST".to_string(),
            request_uri: "/".to_string(),
        }
    }
}

/// Reference to a named shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRef {
    /// Shape name
    pub shape: String,
}

impl ShapeRef {
    /// Reference the named shape
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
        }
    }
}

/// Where a registered version's description comes from
///
/// Either an already built description, or a path to a raw JSON document
/// that is loaded on first use.
#[derive(Debug, Clone)]
pub enum ApiDescriptionRef {
    /// Already normalized, in memory
    Loaded(Arc<ApiDescription>),
    /// Raw document on local storage
    Path(PathBuf),
}

impl ApiDescriptionRef {
    /// Reference a raw document by path
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Whether the description still needs loading
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Path(_))
    }
}

impl fmt::Display for ApiDescriptionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(description) => write!(f, "<in-memory {}>", description.version()),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<ApiDescription> for ApiDescriptionRef {
    fn from(description: ApiDescription) -> Self {
        Self::Loaded(Arc::new(description))
    }
}

impl From<Arc<ApiDescription>> for ApiDescriptionRef {
    fn from(description: Arc<ApiDescription>) -> Self {
        Self::Loaded(description)
    }
}

impl From<PathBuf> for ApiDescriptionRef {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ApiDescriptionRef {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}
