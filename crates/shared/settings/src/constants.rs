//! Settings constants
//!
//! Environment variable names, compiled-in defaults and the table of
//! recognized fields.

// =============================================================================
// Environment Variables
// =============================================================================

/// Biolink model version override
pub const ENV_BIOLINK_VERSION: &str = "BIOLINK_VERSION";

/// TRAPI schema version override
pub const ENV_TRAPI_VERSION: &str = "TRAPI_VERSION";

/// Request timeout override, in seconds
pub const ENV_TIMEOUT: &str = "TIMEOUT";

/// Log level override
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Public virtual host the API is served under
pub const ENV_VIRTUAL_HOST: &str = "VIRTUAL_HOST";

/// Development mode flag
pub const ENV_DEV_MODE: &str = "DEV_MODE";

/// Data directory override
pub const ENV_DATA_DIR: &str = "OPENPREDICT_DATA_DIR";

// =============================================================================
// Defaults
// =============================================================================

/// Default Biolink model version
pub const DEFAULT_BIOLINK_VERSION: &str = "3.1.0";

/// Default TRAPI schema version
pub const DEFAULT_TRAPI_VERSION: &str = "1.5.0";

/// TRAPI schema version used by hosts still pinned to the older API
pub const LEGACY_TRAPI_VERSION: &str = "1.4.0";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "ERROR";

/// Default development mode flag
pub const DEFAULT_DEV_MODE: bool = false;

/// Data directory name, resolved against the working directory
pub const DEFAULT_DATA_DIR_NAME: &str = "data";

// =============================================================================
// Coercion Vocabulary
// =============================================================================

/// Tokens accepted as `true` (compared case-insensitively)
pub const TRUTHY_VALUES: &[&str] = &["1", "true", "t", "yes", "y", "on"];

/// Tokens accepted as `false` (compared case-insensitively)
pub const FALSY_VALUES: &[&str] = &["0", "false", "f", "no", "n", "off"];

// =============================================================================
// Field Table
// =============================================================================

/// Declared type of a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    OptionalString,
    Path,
}

impl FieldKind {
    /// Human-readable name used in error messages and listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::OptionalString => "optional string",
            FieldKind::Path => "path",
        }
    }
}

/// Description of one recognized settings field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub env_var: &'static str,
    pub field: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

/// Every field the loader reads, in declaration order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        env_var: ENV_BIOLINK_VERSION,
        field: "biolink_version",
        kind: FieldKind::String,
        description: "Biolink model version",
    },
    FieldSpec {
        env_var: ENV_TRAPI_VERSION,
        field: "trapi_version",
        kind: FieldKind::String,
        description: "TRAPI schema version",
    },
    FieldSpec {
        env_var: ENV_TIMEOUT,
        field: "timeout",
        kind: FieldKind::Integer,
        description: "Request timeout in seconds",
    },
    FieldSpec {
        env_var: ENV_LOG_LEVEL,
        field: "log_level",
        kind: FieldKind::String,
        description: "Log level",
    },
    FieldSpec {
        env_var: ENV_VIRTUAL_HOST,
        field: "virtual_host",
        kind: FieldKind::OptionalString,
        description: "Public virtual host",
    },
    FieldSpec {
        env_var: ENV_DEV_MODE,
        field: "dev_mode",
        kind: FieldKind::Boolean,
        description: "Development mode",
    },
    FieldSpec {
        env_var: ENV_DATA_DIR,
        field: "data_dir",
        kind: FieldKind::Path,
        description: "Data directory",
    },
];

/// Look up a field by its environment variable name.
///
/// Lets hosts describe a [`ConfigError`](crate::ConfigError) by the field
/// it refers to.
pub fn field_for_env(env_var: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.env_var == env_var)
}
