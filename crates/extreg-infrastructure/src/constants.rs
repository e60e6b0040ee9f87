//! Infrastructure layer constants
//!
//! Naming conventions for discovery resources live in
//! `extreg_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "extreg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "extreg";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "EXTREG";

/// Separator between nested keys in configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "EXTREG_LOG";

/// Default log file name stem for file output
pub const DEFAULT_LOG_FILE_STEM: &str = "extreg";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;
