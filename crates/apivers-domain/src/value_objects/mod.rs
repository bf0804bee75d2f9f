//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`VersionKey`] | Calendar-date API version identifier |
//! | [`ServiceId`] | Service definition identifier |
//! | [`ApiDescription`] | Normalized API description |
//! | [`ApiDescriptionRef`] | Loaded description or path to a raw one |
//! | [`ClientOptions`] | Caller-supplied construction options |
//! | [`ServiceSettings`] | Per-service configuration |

/// Normalized API description value objects
pub mod description;
/// Client construction option value objects
pub mod options;
/// Service identifier
pub mod service;
/// Version key
pub mod version;

pub use description::{
    ApiDescription, ApiDescriptionRef, ApiMetadata, HttpBinding, Operation, ShapeRef,
};
pub use options::{ClientConfig, ClientOptions, ServiceSettings};
pub use service::ServiceId;
pub use version::VersionKey;
