//! CLI module - Command-line interface for the settings tool.
//!
//! Provides commands for:
//! - `show` - Print resolved settings
//! - `check` - Validate the environment
//! - `vars` - List recognized variables

pub mod args;

pub use args::{Cli, Commands, ShowArgs};
