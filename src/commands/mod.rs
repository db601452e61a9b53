//! Command implementations for preparer.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the settings resolution both commands share.

mod check;
mod show;


use crate::cli::{Command, SettingsArgs};
use crate::config::{Config, ConfigWarning, settings};
use crate::env::EnvLookup;
use crate::error::{PreparerError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use check::cmd_check;
pub use show::cmd_show;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Show(args) => cmd_show(args),
    }
}

/// Build the config from `env` and merge the settings file, if any.
///
/// The settings file is the explicit `--settings` path when given (it must
/// exist), otherwise `_deconst.json` in `CONTENT_ROOT`, otherwise
/// `_deconst.json` in `cwd`. No settings file is not an error.
pub(crate) fn resolve_config(
    args: &SettingsArgs,
    env: &impl EnvLookup,
    cwd: &Path,
) -> Result<(Config, Vec<ConfigWarning>)> {
    let mut config = Config::from_env(env).with_pull_request_var(&args.pull_request_var);

    let Some(path) = settings_path(args, &config, cwd) else {
        debug!("no settings file found; using environment only");
        return Ok((config, Vec::new()));
    };

    debug!(path = %path.display(), "loading settings file");
    let content = settings::read(&path)?;
    let warnings = config
        .load_from_json(&content)
        .map_err(|e| settings::with_path(e, &path))?;

    Ok((config, warnings))
}

fn settings_path(args: &SettingsArgs, config: &Config, cwd: &Path) -> Option<PathBuf> {
    if let Some(explicit) = &args.settings {
        return Some(explicit.clone());
    }

    if config.has_content_root() {
        let root = cwd.join(&config.content_root);
        if !root.is_dir() {
            warn!(
                "CONTENT_ROOT '{}' is not a directory; looking for settings in the current directory",
                config.content_root
            );
        } else if let Some(found) = settings::discover(&root) {
            return Some(found);
        }
    }

    settings::discover(cwd)
}

pub(crate) fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        PreparerError::Io(format!("failed to get current working directory: {}", e))
    })
}

pub(crate) fn io_error(e: std::io::Error) -> PreparerError {
    PreparerError::Io(format!("failed to write output: {}", e))
}
