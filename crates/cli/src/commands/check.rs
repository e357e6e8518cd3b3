//! Check command - Validate the environment.

use std::io::Write;

use predict_settings::{ConfigStore, EnvSource};

use crate::commands::CommandResult;

/// Execute the check command
pub fn execute<S: EnvSource>(store: &ConfigStore<S>, out: &mut impl Write) -> CommandResult<()> {
    tracing::info!(policy = ?store.policy(), "Checking settings...");

    let settings = store.initialize()?;
    if settings.tracing_level().is_none() {
        tracing::warn!(log_level = %settings.log_level, "Unrecognized log level");
    }

    writeln!(
        out,
        "Settings OK (TRAPI {}, Biolink {})",
        settings.trapi_version, settings.biolink_version
    )?;
    Ok(())
}
