//! Tracing subscriber setup.
//!
//! Logs go to stderr. `RUST_LOG` always takes precedence; otherwise WARN,
//! or DEBUG with `--verbose`.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter)
        .try_init();
}
