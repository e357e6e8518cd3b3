//! Execute-once settings store.
//!
//! A [`ConfigStore`] builds its [`Settings`] the first time they are asked
//! for and hands out the same record for the rest of its lifetime. Concurrent
//! first accesses block until the single construction finishes.
//!
//! Hosts normally build one store at startup and pass `&Settings` down.
//! [`global`] and [`settings`] exist for code that needs ambient access.

use once_cell::sync::{Lazy, OnceCell};

use crate::error::ConfigResult;
use crate::settings::{load_config, CoercionPolicy, Defaults, Settings};
use crate::source::{EnvSource, ProcessEnv};

/// Holds one lazily built, immutable settings record.
pub struct ConfigStore<S: EnvSource> {
    source: S,
    defaults: Defaults,
    policy: CoercionPolicy,
    cell: OnceCell<Settings>,
}

impl<S: EnvSource> ConfigStore<S> {
    /// Create a store over `source` with the default table and strict coercion.
    pub fn new(source: S) -> Self {
        Self {
            source,
            defaults: Defaults::default(),
            policy: CoercionPolicy::Strict,
            cell: OnceCell::new(),
        }
    }

    /// Use a different default table.
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Use a different coercion policy.
    pub fn with_policy(mut self, policy: CoercionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the settings record, or return it if already built.
    ///
    /// Call this once at startup so configuration errors surface before any
    /// consumer runs. A failed attempt leaves the store uninitialized.
    ///
    /// # Errors
    /// Returns an error if the source holds a value that cannot be coerced
    /// under the store's policy.
    pub fn initialize(&self) -> ConfigResult<&Settings> {
        self.cell.get_or_try_init(|| {
            let settings = load_config(&self.source, &self.defaults, self.policy)?;
            tracing::debug!(
                trapi_version = %settings.trapi_version,
                biolink_version = %settings.biolink_version,
                dev_mode = settings.dev_mode,
                "Settings loaded"
            );
            Ok(settings)
        })
    }

    /// Read the settings record, building it on first use.
    ///
    /// # Errors
    /// Only fails while the record has not been built successfully.
    pub fn get(&self) -> ConfigResult<&Settings> {
        match self.cell.get() {
            Some(settings) => Ok(settings),
            None => self.initialize(),
        }
    }

    /// Whether the record has been built.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The coercion policy this store applies.
    pub fn policy(&self) -> CoercionPolicy {
        self.policy
    }

    /// The default table this store falls back to.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// The environment source this store reads.
    pub fn source(&self) -> &S {
        &self.source
    }
}

static GLOBAL: Lazy<ConfigStore<ProcessEnv>> = Lazy::new(|| ConfigStore::new(ProcessEnv));

/// The process-wide store, reading the real environment.
pub fn global() -> &'static ConfigStore<ProcessEnv> {
    &GLOBAL
}

/// The process-wide settings record.
///
/// # Errors
/// Returns an error if the environment holds an invalid value.
pub fn settings() -> ConfigResult<&'static Settings> {
    GLOBAL.get()
}
