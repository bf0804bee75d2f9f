//! # Domain Layer
//!
//! Core types of the versioned client resolver: version keys, normalized API
//! descriptions, client types and the ports through which the application
//! layer talks to configuration, description storage and the client
//! framework.
//!
//! This crate has no knowledge of files, environment variables or logging;
//! those live in `apivers-infrastructure`.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{ClientInstance, ClientType};
pub use error::{Error, Result};
pub use value_objects::{
    ApiDescription, ApiDescriptionRef, ApiMetadata, ClientConfig, ClientOptions, HttpBinding,
    Operation, ServiceId, ServiceSettings, ShapeRef, VersionKey,
};
