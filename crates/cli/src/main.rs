//! predict-kit - Application entry point
//!
//! CLI-based entry point that dispatches to the settings commands.

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use predict_kit::{app, cli::Cli};
use predict_settings::{ConfigStore, ProcessEnv};

fn main() {
    // Load environment variables before the store first reads them
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let store = ConfigStore::new(ProcessEnv)
        .with_defaults(cli.defaults())
        .with_policy(cli.policy());

    // Tracing is installed before the settings are loaded
    let mut stdout = io::stdout().lock();
    let result = app::start(
        &cli,
        &store,
        std::env::var("RUST_LOG").ok(),
        init_tracing,
        &mut stdout,
    );

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
