//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `apivers_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "apivers.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "apivers";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "APIVERS";

/// Separator for nested keys in environment variables
///
/// Single underscores appear inside key names (`api_version`), so nesting
/// uses a double underscore: `APIVERS_SERVICES__DYNAMODB__API_VERSION`.
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "APIVERS_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// Fallback log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "apivers";

// ============================================================================
// DESCRIPTION DISCOVERY CONSTANTS
// ============================================================================

/// Extension of description documents
pub const DESCRIPTION_EXTENSION: &str = "json";

/// File name pattern of discoverable description documents
pub const DESCRIPTION_FILE_PATTERN: &str =
    r"^(?P<service>[A-Za-z][A-Za-z0-9]*)-(?P<version>\d{4}-\d{2}-\d{2})(?P<normalized>\.api)?\.json$";
