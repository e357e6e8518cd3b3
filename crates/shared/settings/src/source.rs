//! Environment sources.
//!
//! The loader never touches `std::env` directly; it asks an [`EnvSource`].
//! Hosts use [`ProcessEnv`], tests inject a map.

use std::collections::{BTreeMap, HashMap};
use std::env;

use crate::error::{ConfigError, ConfigResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Something that can answer "what is the raw value of this variable".
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource: Send + Sync {
    /// Raw value of `key`, or `None` when unset.
    ///
    /// # Errors
    /// Returns an error if the value exists but cannot be read as a string.
    fn var(&self, key: &str) -> ConfigResult<Option<String>>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Capture the current environment into a map.
    ///
    /// For embedding hosts that want a frozen copy to hand to a
    /// [`ConfigStore`](crate::ConfigStore) instead of live process reads.
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn snapshot() -> HashMap<String, String> {
        env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::not_unicode(key)),
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).var(key)
    }
}
