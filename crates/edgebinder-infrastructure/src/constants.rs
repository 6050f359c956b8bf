//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `edgebinder_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "edgebinder.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "edgebinder";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "EDGEBINDER";

/// Separator for nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "EDGEBINDER_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "edgebinder";
