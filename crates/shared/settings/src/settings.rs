//! Settings record loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::coerce::{parse_bool, parse_integer, parse_optional, parse_path};
use crate::constants::{
    DEFAULT_BIOLINK_VERSION, DEFAULT_DATA_DIR_NAME, DEFAULT_DEV_MODE, DEFAULT_LOG_LEVEL,
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_TRAPI_VERSION, ENV_BIOLINK_VERSION, ENV_DATA_DIR,
    ENV_DEV_MODE, ENV_LOG_LEVEL, ENV_TIMEOUT, ENV_TRAPI_VERSION, ENV_VIRTUAL_HOST,
    LEGACY_TRAPI_VERSION,
};
use crate::error::{ConfigError, ConfigResult};
use crate::source::{EnvSource, ProcessEnv};

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Biolink model version
    pub biolink_version: String,
    /// TRAPI schema version
    pub trapi_version: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Log level, e.g. `ERROR` or `DEBUG`
    pub log_level: String,
    /// Public virtual host, if the API sits behind one
    pub virtual_host: Option<String>,
    /// Development mode
    pub dev_mode: bool,
    /// Data directory
    pub data_dir: PathBuf,
}

impl Settings {
    /// Load settings from the process environment with the default table.
    ///
    /// # Errors
    /// Returns an error if any variable cannot be coerced to its field type.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Load settings from an arbitrary source with the default table.
    ///
    /// # Errors
    /// Returns an error if any variable cannot be coerced to its field type.
    pub fn from_source<S: EnvSource + ?Sized>(source: &S) -> ConfigResult<Self> {
        load_config(source, &Defaults::default(), CoercionPolicy::Strict)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Map the log level onto a `tracing` level.
    ///
    /// Returns `None` for values outside the usual severity vocabulary.
    pub fn tracing_level(&self) -> Option<tracing::Level> {
        match self.log_level.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Some(tracing::Level::TRACE),
            "DEBUG" => Some(tracing::Level::DEBUG),
            "INFO" => Some(tracing::Level::INFO),
            "WARN" | "WARNING" => Some(tracing::Level::WARN),
            "ERROR" | "CRITICAL" | "FATAL" => Some(tracing::Level::ERROR),
            _ => None,
        }
    }
}

/// What to do with a value that cannot be coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercionPolicy {
    /// Fail the whole load on the first invalid value
    #[default]
    Strict,
    /// Log a warning and use the field default
    Lenient,
}

/// Compiled-in default table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub biolink_version: String,
    pub trapi_version: String,
    pub timeout: u64,
    pub log_level: String,
    pub virtual_host: Option<String>,
    pub dev_mode: bool,
    /// `None` means `<cwd>/data`, resolved at load time
    pub data_dir: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            biolink_version: DEFAULT_BIOLINK_VERSION.to_string(),
            trapi_version: DEFAULT_TRAPI_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT_SECONDS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            virtual_host: None,
            dev_mode: DEFAULT_DEV_MODE,
            data_dir: None,
        }
    }
}

impl Defaults {
    /// Defaults for hosts still serving the older TRAPI release.
    pub fn legacy() -> Self {
        Self::default().with_trapi_version(LEGACY_TRAPI_VERSION)
    }

    /// Replace the default TRAPI version.
    pub fn with_trapi_version(mut self, version: impl Into<String>) -> Self {
        self.trapi_version = version.into();
        self
    }

    /// Replace the default data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Default data directory, resolving `<cwd>/data` when not pinned.
    ///
    /// Falls back to the relative path `data` if the working directory
    /// cannot be read.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        env::current_dir()
            .map(|cwd| cwd.join(DEFAULT_DATA_DIR_NAME))
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR_NAME))
    }

    /// The record produced when no variable is set.
    pub fn to_settings(&self) -> Settings {
        Settings {
            biolink_version: self.biolink_version.clone(),
            trapi_version: self.trapi_version.clone(),
            timeout: self.timeout,
            log_level: self.log_level.clone(),
            virtual_host: self.virtual_host.clone(),
            dev_mode: self.dev_mode,
            data_dir: self.resolve_data_dir(),
        }
    }
}

/// Build a settings record from `source`, falling back to `defaults`.
///
/// Fields are read in declaration order. Under [`CoercionPolicy::Strict`]
/// the first invalid value aborts the load.
///
/// # Errors
/// Returns an error only under [`CoercionPolicy::Strict`].
pub fn load_config<S: EnvSource + ?Sized>(
    source: &S,
    defaults: &Defaults,
    policy: CoercionPolicy,
) -> ConfigResult<Settings> {
    let loader = Loader { source, policy };

    Ok(Settings {
        biolink_version: loader.field(ENV_BIOLINK_VERSION, &defaults.biolink_version, |_, raw| {
            Ok(Some(raw))
        })?,
        trapi_version: loader.field(ENV_TRAPI_VERSION, &defaults.trapi_version, |_, raw| {
            Ok(Some(raw))
        })?,
        timeout: loader.field(ENV_TIMEOUT, &defaults.timeout, |var, raw| {
            parse_integer(var, &raw).map(Some)
        })?,
        log_level: loader.field(ENV_LOG_LEVEL, &defaults.log_level, |_, raw| Ok(Some(raw)))?,
        virtual_host: loader.field(ENV_VIRTUAL_HOST, &defaults.virtual_host, |_, raw| {
            Ok(parse_optional(raw).map(Some))
        })?,
        dev_mode: loader.field(ENV_DEV_MODE, &defaults.dev_mode, |var, raw| {
            parse_bool(var, &raw).map(Some)
        })?,
        data_dir: match loader.field(ENV_DATA_DIR, &None, |_, raw| Ok(parse_path(raw).map(Some)))? {
            Some(dir) => dir,
            None => defaults.resolve_data_dir(),
        },
    })
}

struct Loader<'a, S: ?Sized> {
    source: &'a S,
    policy: CoercionPolicy,
}

impl<S: EnvSource + ?Sized> Loader<'_, S> {
    /// Resolve one field. `coerce` returns `Ok(None)` when the raw value
    /// counts as unset.
    fn field<T: Clone>(
        &self,
        var: &str,
        default: &T,
        coerce: impl FnOnce(&str, String) -> ConfigResult<Option<T>>,
    ) -> ConfigResult<T> {
        let raw = match self.source.var(var) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(default.clone()),
            Err(e) => return self.fallback(e, default),
        };

        match coerce(var, raw) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Ok(default.clone()),
            Err(e) => self.fallback(e, default),
        }
    }

    fn fallback<T: Clone>(&self, err: ConfigError, default: &T) -> ConfigResult<T> {
        match self.policy {
            CoercionPolicy::Strict => Err(err),
            CoercionPolicy::Lenient => {
                tracing::warn!(var = err.var(), error = %err, "Ignoring invalid value, using default");
                Ok(default.clone())
            }
        }
    }
}
