//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for apivers
#[derive(Error, Debug)]
pub enum Error {
    /// No version could be chosen because the service has nothing registered
    #[error("No applicable API version for service '{service}': no versions registered")]
    NoApplicableVersion {
        /// Service identifier
        service: String,
    },

    /// The resolved version has no registered description reference
    #[error("Unknown API version '{version}' for service '{service}'")]
    UnknownVersion {
        /// Service identifier
        service: String,
        /// The version that was requested or resolved
        version: String,
    },

    /// Reading or parsing a raw API description failed
    #[error("Failed to load API description from {reference}: {message}")]
    DescriptionLoad {
        /// The offending reference (usually a path)
        reference: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The parsed document is neither a normalized nor a legacy description
    #[error("Unsupported API description shape in {reference}: {message}")]
    UnsupportedDescriptionShape {
        /// The offending reference
        reference: String,
        /// What was wrong with the document
        message: String,
    },

    /// A version key was registered twice for the same service
    #[error("API version '{version}' is already registered for service '{service}'")]
    DuplicateVersion {
        /// Service identifier
        service: String,
        /// The conflicting version
        version: String,
    },

    /// `latest_version` was asked of an empty service
    #[error("No API versions registered for service '{service}'")]
    NoVersionsRegistered {
        /// Service identifier
        service: String,
    },

    /// No service definition exists under this identifier
    #[error("Unknown service '{service}'")]
    UnknownService {
        /// Service identifier
        service: String,
    },

    /// A value is not a `YYYY-MM-DD` calendar date
    #[error("Invalid API version key '{value}': expected YYYY-MM-DD")]
    InvalidVersionKey {
        /// The rejected value
        value: String,
    },

    /// A cross-cutting modification failed to attach or detach
    #[error("Modification '{name}' failed: {message}")]
    Modification {
        /// Modification name
        name: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Version resolution error creation methods
impl Error {
    /// Create a no-applicable-version error
    pub fn no_applicable_version<S: Into<String>>(service: S) -> Self {
        Self::NoApplicableVersion {
            service: service.into(),
        }
    }

    /// Create an unknown-version error
    pub fn unknown_version<S: Into<String>, V: Into<String>>(service: S, version: V) -> Self {
        Self::UnknownVersion {
            service: service.into(),
            version: version.into(),
        }
    }

    /// Create a duplicate-version error
    pub fn duplicate_version<S: Into<String>, V: Into<String>>(service: S, version: V) -> Self {
        Self::DuplicateVersion {
            service: service.into(),
            version: version.into(),
        }
    }

    /// Create a no-versions-registered error
    pub fn no_versions_registered<S: Into<String>>(service: S) -> Self {
        Self::NoVersionsRegistered {
            service: service.into(),
        }
    }

    /// Create an unknown-service error
    pub fn unknown_service<S: Into<String>>(service: S) -> Self {
        Self::UnknownService {
            service: service.into(),
        }
    }

    /// Create an invalid-version-key error
    pub fn invalid_version_key<S: Into<String>>(value: S) -> Self {
        Self::InvalidVersionKey {
            value: value.into(),
        }
    }
}

// Description loading error creation methods
impl Error {
    /// Create a description load error
    pub fn description_load<R: Into<String>, S: Into<String>>(reference: R, message: S) -> Self {
        Self::DescriptionLoad {
            reference: reference.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a description load error with source
    pub fn description_load_with_source<
        R: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        reference: R,
        message: S,
        source: E,
    ) -> Self {
        Self::DescriptionLoad {
            reference: reference.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unsupported-shape error
    pub fn unsupported_shape<R: Into<String>, S: Into<String>>(reference: R, message: S) -> Self {
        Self::UnsupportedDescriptionShape {
            reference: reference.into(),
            message: message.into(),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal and modification error creation methods
impl Error {
    /// Create a modification error
    pub fn modification<N: Into<String>, S: Into<String>>(name: N, message: S) -> Self {
        Self::Modification {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
