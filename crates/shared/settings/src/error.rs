//! Settings errors.
//!
//! Raised while building the settings record. Once a record exists, reading
//! it cannot fail.

use thiserror::Error;

/// Errors produced while loading settings from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A value could not be coerced to the field's declared type
    #[error("Invalid value for {var}: expected {expected}, got '{value}'")]
    InvalidValue {
        var: String,
        expected: String,
        value: String,
    },

    /// A value is not valid Unicode
    #[error("Value of {var} is not valid unicode")]
    NotUnicode { var: String },
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(
        var: impl Into<String>,
        expected: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            var: var.into(),
            expected: expected.into(),
            value: value.into(),
        }
    }

    /// Create a not-unicode error
    pub fn not_unicode(var: impl Into<String>) -> Self {
        ConfigError::NotUnicode { var: var.into() }
    }

    /// Name of the environment variable that caused the error.
    pub fn var(&self) -> &str {
        match self {
            ConfigError::InvalidValue { var, .. } | ConfigError::NotUnicode { var } => var,
        }
    }
}

/// Result type alias for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;
