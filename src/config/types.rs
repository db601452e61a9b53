//! Supporting types for config resolution: validation outcomes, merge
//! warnings, and the string normalization helpers.

use serde::Serialize;
use std::fmt;

/// Environment variable names read during construction and validation.
pub const CONTENT_ROOT_VAR: &str = "CONTENT_ROOT";
pub const CONTENT_STORE_URL_VAR: &str = "CONTENT_STORE_URL";
pub const CONTENT_STORE_APIKEY_VAR: &str = "CONTENT_STORE_APIKEY";
pub const CONTENT_STORE_TLS_VERIFY_VAR: &str = "CONTENT_STORE_TLS_VERIFY";
pub const CONTENT_ID_BASE_VAR: &str = "CONTENT_ID_BASE";
pub const JEKYLL_DOCUMENT_VAR: &str = "JEKYLL_DOCUMENT";

/// Default pull-request indicator. Anything other than the exact string
/// `"false"` (including unset) counts as a PR build.
pub const DEFAULT_PULL_REQUEST_VAR: &str = "TRAVIS_PULL_REQUEST";

/// Read when the configured indicator is unset.
pub const FALLBACK_PULL_REQUEST_VAR: &str = "IS_PULL_REQUEST_BUILD";

/// Key added to `meta` when the settings file names a GitHub repository.
pub const GITHUB_ISSUES_URL_KEY: &str = "github_issues_url";

pub(crate) fn default_github_branch() -> String {
    "master".to_string()
}

/// Remove a single trailing `/`.
pub fn strip_trailing_slash(value: &str) -> &str {
    value.strip_suffix('/').unwrap_or(value)
}

/// Join segments with `/` after removing one trailing and one leading `/`
/// from each. This is plain string surgery, not URL resolution.
pub fn join_segments(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| {
            let s = strip_trailing_slash(s);
            s.strip_prefix('/').unwrap_or(s)
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Why content will not be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    MissingContentStoreUrl,
    MissingContentStoreApiKey,
    MissingContentIdBase,
    PullRequestBuild,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::MissingContentStoreUrl => write!(
                f,
                "{} is missing. It should be the base URL of the content storage service.",
                CONTENT_STORE_URL_VAR
            ),
            Reason::MissingContentStoreApiKey => write!(
                f,
                "{} is missing. It should be a valid API key issued by the content service.",
                CONTENT_STORE_APIKEY_VAR
            ),
            Reason::MissingContentIdBase => write!(
                f,
                "{} is missing. It should be the common prefix used to generate IDs for \
                 content within this repository.",
                CONTENT_ID_BASE_VAR
            ),
            Reason::PullRequestBuild => write!(f, "This looks like a pull request build."),
        }
    }
}

/// Outcome of a validation pass. Rendering lives in `crate::report`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Reasons submission is blocked, in check order.
    pub reasons: Vec<Reason>,
    /// TLS certificate verification is turned off. Never blocks submission.
    pub tls_verify_disabled: bool,
}

impl ValidationReport {
    pub fn is_ready(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Readiness state. Set exactly once by `Config::validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitDecision {
    #[default]
    NotValidated,
    Submit(ValidationReport),
    DoNotSubmit(ValidationReport),
}

impl SubmitDecision {
    pub(crate) fn decide(report: ValidationReport) -> Self {
        if report.is_ready() {
            SubmitDecision::Submit(report)
        } else {
            SubmitDecision::DoNotSubmit(report)
        }
    }

    /// The report the decision was made from, if validation has run.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            SubmitDecision::NotValidated => None,
            SubmitDecision::Submit(report) | SubmitDecision::DoNotSubmit(report) => Some(report),
        }
    }
}

/// Non-fatal conflict found while merging the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `CONTENT_ID_BASE` and the file's `contentIDBase` disagree; the
    /// environment value is kept.
    ContentIdBaseConflict { environment: String, file: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::ContentIdBaseConflict { environment, file } => write!(
                f,
                "Using environment variable {}=[{}] instead of {} setting [{}].",
                CONTENT_ID_BASE_VAR,
                environment,
                super::SETTINGS_FILE_NAME,
                file
            ),
        }
    }
}
