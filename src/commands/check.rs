//! Implementation of the `preparer check` command.

use super::{current_dir, io_error, resolve_config};
use crate::cli::CheckArgs;
use crate::env::{EnvLookup, ProcessEnv};
use crate::error::{PreparerError, Result};
use crate::report::{report_json, write_report, write_tls_warning, write_warnings};
use std::io::{self, Write};
use std::path::Path;

/// Execute the `preparer check` command against the process environment.
///
/// # Exit Codes
///
/// - 0: Checked (content may or may not be submitted)
/// - 1: Malformed settings file
/// - 2: Not ready and `--require-submit` was given
/// - 3: Settings file could not be read
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let cwd = current_dir()?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_check(&args, &ProcessEnv, &cwd, &mut stdout.lock(), &mut stderr.lock())
}

pub(crate) fn run_check<O: Write, E: Write>(
    args: &CheckArgs,
    env: &impl EnvLookup,
    cwd: &Path,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    let (mut config, warnings) = resolve_config(&args.settings, env, cwd)?;
    let report = config.validate(env);

    write_warnings(&warnings, err).map_err(io_error)?;

    if args.json {
        write_tls_warning(&report, err).map_err(io_error)?;
        writeln!(out, "{:#}", report_json(&report, &warnings)).map_err(io_error)?;
    } else {
        write_report(&report, out, err).map_err(io_error)?;
    }

    if args.require_submit && !config.should_submit()? {
        return Err(PreparerError::NotReady(report.reasons.len()));
    }

    Ok(())
}
