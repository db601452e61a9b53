//! Config struct definition and default implementation.

use super::types::*;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Resolved configuration for a preparer run.
///
/// Built from the environment by `Config::from_env`, optionally merged with
/// `_deconst.json` by `Config::load_from`, then checked by `Config::validate`.
/// Serializes for `preparer show`; the API key is redacted.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    // =========================================================================
    // Content discovery
    // =========================================================================
    /// Root directory holding the content and `_deconst.json`. Empty if unset.
    pub content_root: String,

    /// Jekyll document passed through to the renderer.
    pub jekyll_document: String,

    // =========================================================================
    // Content store
    // =========================================================================
    /// Base URL of the content store, without a trailing slash.
    pub content_store_url: String,

    /// API key issued by the content store. Empty if unset.
    #[serde(serialize_with = "redact")]
    pub content_store_apikey: String,

    /// Whether TLS certificates are verified when talking to the content store.
    pub content_store_tls_verify: bool,

    /// Common prefix of content IDs for this repository, without a trailing slash.
    pub content_id_base: String,

    // =========================================================================
    // Repository metadata (from _deconst.json)
    // =========================================================================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    pub github_branch: String,

    pub meta: BTreeMap<String, String>,

    // =========================================================================
    // Validation
    // =========================================================================
    /// Environment variable that marks a pull-request build.
    pub pull_request_var: String,

    #[serde(skip)]
    pub(crate) submission: SubmitDecision,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_root: String::new(),
            jekyll_document: String::new(),
            content_store_url: String::new(),
            content_store_apikey: String::new(),
            content_store_tls_verify: true,
            content_id_base: String::new(),
            github_url: None,
            github_branch: default_github_branch(),
            meta: BTreeMap::new(),
            pull_request_var: DEFAULT_PULL_REQUEST_VAR.to_string(),
            submission: SubmitDecision::NotValidated,
        }
    }
}

#[allow(clippy::ptr_arg)]
fn redact<S: Serializer>(value: &String, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str("********")
    }
}
