//! Implementation of the `preparer show` command.

use super::{current_dir, io_error, resolve_config};
use crate::cli::{ShowArgs, ShowFormat};
use crate::env::{EnvLookup, ProcessEnv};
use crate::error::{PreparerError, Result};
use crate::report::write_warnings;
use std::io::{self, Write};
use std::path::Path;

/// Execute the `preparer show` command against the process environment.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let cwd = current_dir()?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_show(&args, &ProcessEnv, &cwd, &mut stdout.lock(), &mut stderr.lock())
}

pub(crate) fn run_show<O: Write, E: Write>(
    args: &ShowArgs,
    env: &impl EnvLookup,
    cwd: &Path,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    let (config, warnings) = resolve_config(&args.settings, env, cwd)?;
    write_warnings(&warnings, err).map_err(io_error)?;

    let rendered = match args.format {
        ShowFormat::Json => serde_json::to_string_pretty(&config).map_err(|e| e.to_string()),
        ShowFormat::Yaml => serde_yaml::to_string(&config).map_err(|e| e.to_string()),
    }
    .map_err(|e| PreparerError::Io(format!("failed to serialize config: {}", e)))?;

    writeln!(out, "{}", rendered.trim_end()).map_err(io_error)?;
    Ok(())
}
