//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module and writes to the given
//! output so it can be exercised without a terminal.

pub mod check;
pub mod show;
pub mod vars;

use predict_settings::ConfigError;
use thiserror::Error;

/// Errors a command can fail with.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to encode settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for commands
pub type CommandResult<T> = Result<T, CommandError>;
