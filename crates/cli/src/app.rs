//! Startup sequence shared by the binary and its tests.
//!
//! Logging must be installed before the store is first read, otherwise the
//! events emitted while loading (lenient fallbacks, "Settings loaded") go
//! nowhere.

use std::io::Write;

use predict_settings::{load_config, CoercionPolicy, ConfigStore, Defaults, EnvSource};
use tracing::subscriber::NoSubscriber;

use crate::cli::{Cli, Commands};
use crate::commands::{self, CommandResult};

/// Pick the log filter without touching the store.
///
/// Precedence: `verbose`, then `rust_log`, then the configured log level,
/// then `info`. The log level is resolved leniently so an invalid unrelated
/// value cannot prevent logging from starting.
pub fn log_filter<S: EnvSource + ?Sized>(
    verbose: bool,
    rust_log: Option<String>,
    source: &S,
    defaults: &Defaults,
) -> String {
    if verbose {
        return "debug".to_string();
    }
    if let Some(filter) = rust_log {
        return filter;
    }

    // Silent: the store's own load reports invalid values once logging is up
    let configured = tracing::subscriber::with_default(NoSubscriber::default(), || {
        load_config(source, defaults, CoercionPolicy::Lenient)
    });

    configured
        .ok()
        .and_then(|settings| settings.tracing_level())
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|| "info".to_string())
}

/// Install logging through `init_logging`, then run the selected command.
pub fn start<S: EnvSource>(
    cli: &Cli,
    store: &ConfigStore<S>,
    rust_log: Option<String>,
    init_logging: impl FnOnce(&str),
    out: &mut impl Write,
) -> CommandResult<()> {
    let filter = log_filter(cli.verbose, rust_log, store.source(), store.defaults());
    init_logging(&filter);

    run(cli, store, out)
}

/// Dispatch the selected command.
pub fn run<S: EnvSource>(
    cli: &Cli,
    store: &ConfigStore<S>,
    out: &mut impl Write,
) -> CommandResult<()> {
    match &cli.command {
        Commands::Show(args) => commands::show::execute(args, store, out),
        Commands::Check => commands::check::execute(store, out),
        Commands::Vars => commands::vars::execute(store, out),
    }
}
