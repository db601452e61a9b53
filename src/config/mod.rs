//! Configuration for preparer.
//!
//! A [`Config`] is built from environment variables, optionally merged with
//! the `_deconst.json` settings file, and validated once to decide whether
//! content can be submitted to the content store.

mod model;
mod operations;
pub mod settings;
pub mod types;


// Re-export public API
pub use model::Config;
pub use settings::{SETTINGS_FILE_NAME, SettingsFile};
pub use types::{ConfigWarning, Reason, SubmitDecision, ValidationReport};
