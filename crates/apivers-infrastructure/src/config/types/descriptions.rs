//! Description storage configuration types

use apivers_application::TranslationOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where description documents live and how legacy ones are translated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionsConfig {
    /// Base directory for relative references and discovery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Keep documentation strings when translating legacy documents
    pub keep_documentation: bool,

    /// Keep operation error catalogs when translating legacy documents
    pub keep_errors: bool,
}

impl DescriptionsConfig {
    /// Translation options derived from this section
    pub fn translation(&self) -> TranslationOptions {
        TranslationOptions::default()
            .with_documentation(self.keep_documentation)
            .with_errors(self.keep_errors)
    }
}
