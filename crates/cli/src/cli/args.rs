//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};
use predict_settings::{CoercionPolicy, Defaults};

/// predict-kit - Inspect prediction kit settings
#[derive(Parser, Debug)]
#[command(name = "predict-kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fall back to defaults instead of failing on invalid values
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Use the TRAPI 1.4 default table
    #[arg(long, global = true)]
    pub legacy_trapi: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Coercion policy selected by the flags.
    pub fn policy(&self) -> CoercionPolicy {
        if self.lenient {
            CoercionPolicy::Lenient
        } else {
            CoercionPolicy::Strict
        }
    }

    /// Default table selected by the flags.
    pub fn defaults(&self) -> Defaults {
        if self.legacy_trapi {
            Defaults::legacy()
        } else {
            Defaults::default()
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved settings
    Show(ShowArgs),

    /// Validate the environment and exit non-zero on invalid values
    Check,

    /// List recognized environment variables
    Vars,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}
