//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `apivers_infrastructure::constants`.

// ============================================================================
// VERSION KEY CONSTANTS
// ============================================================================

/// `chrono` format of a version key (`YYYY-MM-DD`)
pub const VERSION_KEY_FORMAT: &str = "%Y-%m-%d";

/// Length of a zero-padded version key
pub const VERSION_KEY_LEN: usize = 10;

// ============================================================================
// CONFIGURATION KEY CONSTANTS
// ============================================================================

/// Configuration key holding a pinned API version (global and per-service)
pub const API_VERSION_KEY: &str = "api_version";

// ============================================================================
// DESCRIPTION FORMAT CONSTANTS
// ============================================================================

/// Top-level field present only in normalized descriptions
pub const NORMALIZED_MARKER_FIELD: &str = "metadata";

/// Top-level version field of a legacy description
pub const LEGACY_VERSION_FIELD: &str = "api_version";

/// Top-level operations field shared by both formats
pub const OPERATIONS_FIELD: &str = "operations";

/// Suffix appended to an operation name for its synthesized input shape
pub const INPUT_SHAPE_SUFFIX: &str = "Request";

/// Suffix appended to an operation name for its synthesized output shape
pub const OUTPUT_SHAPE_SUFFIX: &str = "Response";

// ============================================================================
// CLIENT TYPE CONSTANTS
// ============================================================================

/// Separator between service and version in a synthesized client type name
pub const CLIENT_TYPE_NAME_SEPARATOR: &str = "::V";
