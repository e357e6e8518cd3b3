//! predict-kit - settings diagnostics for the prediction kit.
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the resolved settings
//! predict-kit show
//! predict-kit show --json
//!
//! # Fail if any variable holds an invalid value
//! predict-kit check
//!
//! # List recognized variables
//! predict-kit vars
//! ```

pub mod app;
pub mod cli;
pub mod commands;

pub use commands::{CommandError, CommandResult};
