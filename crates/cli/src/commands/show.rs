//! Show command - Print the resolved settings.

use std::io::Write;

use predict_settings::{ConfigStore, EnvSource, Settings};

use crate::cli::ShowArgs;
use crate::commands::CommandResult;

/// Execute the show command
pub fn execute<S: EnvSource>(
    args: &ShowArgs,
    store: &ConfigStore<S>,
    out: &mut impl Write,
) -> CommandResult<()> {
    let settings = store.get()?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, settings)?;
        writeln!(out)?;
    } else {
        write_plain(settings, out)?;
    }

    Ok(())
}

fn write_plain(settings: &Settings, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "biolink_version = {}", settings.biolink_version)?;
    writeln!(out, "trapi_version   = {}", settings.trapi_version)?;
    writeln!(out, "timeout         = {}", settings.timeout)?;
    writeln!(out, "log_level       = {}", settings.log_level)?;
    writeln!(
        out,
        "virtual_host    = {}",
        settings.virtual_host.as_deref().unwrap_or("(none)")
    )?;
    writeln!(out, "dev_mode        = {}", settings.dev_mode)?;
    writeln!(out, "data_dir        = {}", settings.data_dir.display())
}
