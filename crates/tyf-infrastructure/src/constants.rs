//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tyf.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tyf";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "TYF";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "TYF_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default file name stem for rolling log files
pub const DEFAULT_LOG_FILE_STEM: &str = "tyf";

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Whether duplicate registrations replace earlier ones by default
pub const DEFAULT_ALLOW_OVERRIDE: bool = false;

/// Whether circular resolution is detected by default
pub const DEFAULT_DETECT_CYCLES: bool = true;
