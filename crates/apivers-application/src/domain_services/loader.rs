//! API description loader
//!
//! Realizes a registered [`ApiDescriptionRef`]:
//!
//! - an in-memory description is returned as is;
//! - a path is read fully, parsed as JSON, and then either deserialized
//!   directly (normalized documents carry a top-level `metadata` object) or
//!   handed to the legacy translator (documents with `api_version` and
//!   `operations`). Anything else is an unsupported shape.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use apivers_domain::constants::{LEGACY_VERSION_FIELD, NORMALIZED_MARKER_FIELD, OPERATIONS_FIELD};
use apivers_domain::error::{Error, Result};
use apivers_domain::ports::DescriptionLoader;
use apivers_domain::value_objects::{ApiDescription, ApiDescriptionRef};
use serde_json::Value;
use tracing::{debug, info};

use crate::domain_services::translation::{TranslationOptions, translate_legacy};

/// Shape of a parsed description document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Already normalized
    Normalized,
    /// Legacy, needs translation
    Legacy,
}

/// Default [`DescriptionLoader`] reading JSON documents from local storage
#[derive(Debug, Clone, Default)]
pub struct ApiLoader {
    base_dir: Option<PathBuf>,
    translation: TranslationOptions,
}

impl ApiLoader {
    /// Create a loader resolving paths as given
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `dir`
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Control what legacy translation keeps
    pub fn with_translation(mut self, translation: TranslationOptions) -> Self {
        self.translation = translation;
        self
    }

    /// Path a reference is read from
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Classify a parsed document
    pub fn detect_format(document: &Value) -> Option<DocumentFormat> {
        let map = document.as_object()?;
        if map.get(NORMALIZED_MARKER_FIELD).is_some_and(Value::is_object) {
            Some(DocumentFormat::Normalized)
        } else if map.contains_key(LEGACY_VERSION_FIELD) && map.contains_key(OPERATIONS_FIELD) {
            Some(DocumentFormat::Legacy)
        } else {
            None
        }
    }

    /// Build a normalized description from a parsed document
    pub fn from_document(&self, reference: &str, document: Value) -> Result<ApiDescription> {
        match Self::detect_format(&document) {
            Some(DocumentFormat::Normalized) => {
                serde_json::from_value(document).map_err(|e| {
                    Error::description_load_with_source(
                        reference,
                        "malformed normalized description",
                        e,
                    )
                })
            }
            Some(DocumentFormat::Legacy) => {
                let Value::Object(map) = document else {
                    return Err(Error::internal("legacy document is not an object"));
                };
                debug!(reference, "Translating legacy API description");
                translate_legacy(reference, &map, self.translation)
            }
            None => Err(Error::unsupported_shape(
                reference,
                "document is neither a normalized nor a legacy API description",
            )),
        }
    }

    fn load_path(&self, path: &Path) -> Result<ApiDescription> {
        let path = self.resolve_path(path);
        let reference = path.display().to_string();

        let raw = std::fs::read_to_string(&path).map_err(|e| {
            Error::description_load_with_source(&reference, "failed to read description", e)
        })?;
        let document: Value = serde_json::from_str(&raw).map_err(|e| {
            Error::description_load_with_source(&reference, "invalid JSON", e)
        })?;

        let description = self.from_document(&reference, document)?;
        info!(
            reference = %reference,
            version = %description.version(),
            operations = description.operations.len(),
            "Loaded API description"
        );
        Ok(description)
    }
}

impl DescriptionLoader for ApiLoader {
    fn load(&self, reference: &ApiDescriptionRef) -> Result<Arc<ApiDescription>> {
        match reference {
            ApiDescriptionRef::Loaded(description) => Ok(Arc::clone(description)),
            ApiDescriptionRef::Path(path) => self.load_path(path).map(Arc::new),
        }
    }
}
