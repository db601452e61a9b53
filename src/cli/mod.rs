//! CLI argument parsing for preparer.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Preparer: decides whether rendered content can be submitted to the content store.
///
/// Configuration comes from CONTENT_* environment variables and an optional
/// `_deconst.json` at the content root. Environment values win on conflict.
#[derive(Parser, Debug)]
#[command(name = "preparer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (sets log level to DEBUG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands for preparer.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether content would be submitted.
    ///
    /// Resolves configuration, reports missing values and PR builds,
    /// and warns when TLS verification is disabled.
    Check(CheckArgs),

    /// Print the resolved configuration.
    ///
    /// The content store API key is redacted.
    Show(ShowArgs),
}

/// Settings file selection shared by every command.
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Path to the settings file. Defaults to `_deconst.json` in CONTENT_ROOT,
    /// then in the current directory.
    #[arg(short, long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Environment variable that marks a pull-request build.
    #[arg(long, value_name = "NAME", default_value = "TRAVIS_PULL_REQUEST")]
    pub pull_request_var: String,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print the report as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when content would not be submitted.
    #[arg(long)]
    pub require_submit: bool,
}

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShowFormat {
    #[default]
    Json,
    Yaml,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ShowFormat::Json)]
    pub format: ShowFormat,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
