//! Application settings for the prediction kit.
//!
//! This crate provides:
//! - A typed settings record with compiled-in defaults
//! - Environment overrides with explicit coercion rules
//! - An execute-once store, plus a lazy process-wide accessor
//!
//! # Usage
//!
//! ```no_run
//! let settings = predict_settings::settings().expect("invalid configuration");
//! println!("TRAPI {}", settings.trapi_version);
//! ```

pub mod coerce;
pub mod constants;
pub mod error;
pub mod settings;
pub mod source;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use constants::*;
pub use error::{ConfigError, ConfigResult};
pub use settings::{load_config, CoercionPolicy, Defaults, Settings};
pub use source::{EnvSource, ProcessEnv};
pub use store::{global, settings, ConfigStore};

#[cfg(any(test, feature = "test-utils"))]
pub use source::MockEnvSource;
