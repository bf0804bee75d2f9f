//! Description Loader Port

use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{ApiDescription, ApiDescriptionRef};

/// Realizes a normalized description from a registered reference
///
/// Implementations must be pure with respect to the reference: loading the
/// same reference twice yields equal descriptions. Callers memoize results.
pub trait DescriptionLoader: Send + Sync {
    /// Load (and if needed translate) the referenced description
    fn load(&self, reference: &ApiDescriptionRef) -> Result<Arc<ApiDescription>>;
}
