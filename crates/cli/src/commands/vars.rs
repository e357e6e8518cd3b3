//! Vars command - List recognized environment variables.

use std::io::Write;

use predict_settings::{
    ConfigStore, Defaults, EnvSource, FieldSpec, ENV_BIOLINK_VERSION, ENV_DATA_DIR, ENV_DEV_MODE,
    ENV_LOG_LEVEL, ENV_TIMEOUT, ENV_TRAPI_VERSION, ENV_VIRTUAL_HOST, FIELDS,
};

use crate::commands::CommandResult;

/// Execute the vars command
///
/// Works even when the environment holds invalid values: nothing is coerced.
pub fn execute<S: EnvSource>(store: &ConfigStore<S>, out: &mut impl Write) -> CommandResult<()> {
    for field in FIELDS {
        let current = match store.source().var(field.env_var) {
            Ok(Some(raw)) => format!("'{}'", raw),
            Ok(None) => "(unset)".to_string(),
            Err(e) => format!("(unreadable: {})", e),
        };

        writeln!(
            out,
            "{:<22} {:<16} default={:<12} current={}  # {}",
            field.env_var,
            field.kind.as_str(),
            default_for(store.defaults(), field),
            current,
            field.description,
        )?;
    }
    Ok(())
}

fn default_for(defaults: &Defaults, field: &FieldSpec) -> String {
    match field.env_var {
        ENV_BIOLINK_VERSION => defaults.biolink_version.clone(),
        ENV_TRAPI_VERSION => defaults.trapi_version.clone(),
        ENV_TIMEOUT => defaults.timeout.to_string(),
        ENV_LOG_LEVEL => defaults.log_level.clone(),
        ENV_VIRTUAL_HOST => defaults
            .virtual_host
            .clone()
            .unwrap_or_else(|| "(none)".to_string()),
        ENV_DEV_MODE => defaults.dev_mode.to_string(),
        ENV_DATA_DIR => match &defaults.data_dir {
            Some(dir) => dir.display().to_string(),
            None => "<cwd>/data".to_string(),
        },
        other => unreachable!("no default rendering for {}", other),
    }
}
