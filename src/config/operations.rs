//! Config construction, settings merge, and validation.

use super::model::Config;
use super::settings::SettingsFile;
use super::types::*;
use crate::env::EnvLookup;
use crate::error::{PreparerError, Result};
use tracing::debug;

impl Config {
    /// Build a config from environment values.
    ///
    /// Missing variables read as `""`. One trailing slash is removed from
    /// `CONTENT_STORE_URL` and `CONTENT_ID_BASE`. TLS verification stays on
    /// unless `CONTENT_STORE_TLS_VERIFY` is exactly `"false"`. Nothing is
    /// validated here.
    pub fn from_env(env: &impl EnvLookup) -> Self {
        Self {
            content_root: env.fetch(CONTENT_ROOT_VAR, ""),
            jekyll_document: env.fetch(JEKYLL_DOCUMENT_VAR, ""),
            content_store_url: strip_trailing_slash(&env.fetch(CONTENT_STORE_URL_VAR, ""))
                .to_string(),
            content_store_apikey: env.fetch(CONTENT_STORE_APIKEY_VAR, ""),
            content_store_tls_verify: env.fetch(CONTENT_STORE_TLS_VERIFY_VAR, "") != "false",
            content_id_base: strip_trailing_slash(&env.fetch(CONTENT_ID_BASE_VAR, "")).to_string(),
            ..Self::default()
        }
    }

    /// Use a different environment variable as the pull-request indicator.
    pub fn with_pull_request_var(mut self, var: &str) -> Self {
        self.pull_request_var = var.to_string();
        self
    }

    pub fn has_content_root(&self) -> bool {
        !self.content_root.is_empty()
    }

    /// Merge values from a decoded settings file.
    ///
    /// The environment wins when both set `contentIDBase` to different
    /// values; the conflict comes back as a warning. `meta` is replaced
    /// wholesale (empty when the file has none) and `githubBranch` falls
    /// back to `"master"`. Environment-derived fields the file does not
    /// mention are left alone.
    pub fn load_from(&mut self, settings: &SettingsFile) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if let Some(file_base) = &settings.content_id_base {
            let stripped = strip_trailing_slash(file_base);
            if self.content_id_base.is_empty() {
                self.content_id_base = stripped.to_string();
            } else if self.content_id_base != stripped {
                let warning = ConfigWarning::ContentIdBaseConflict {
                    environment: self.content_id_base.clone(),
                    file: file_base.clone(),
                };
                debug!(%warning, "settings conflict");
                warnings.push(warning);
            }
        }

        self.meta = settings.meta.clone().unwrap_or_default();

        if let Some(github_url) = &settings.github_url {
            self.github_url = Some(github_url.clone());
            self.meta.insert(
                GITHUB_ISSUES_URL_KEY.to_string(),
                join_segments(&[github_url.as_str(), "/issues"]),
            );
        }

        self.github_branch = settings
            .github_branch
            .clone()
            .unwrap_or_else(default_github_branch);

        debug!(
            content_id_base = %self.content_id_base,
            github_branch = %self.github_branch,
            meta_keys = self.meta.len(),
            "merged settings file"
        );

        warnings
    }

    /// Decode a JSON settings document and merge it.
    pub fn load_from_json(&mut self, json: &str) -> Result<Vec<ConfigWarning>> {
        let settings = SettingsFile::from_json(json)?;
        Ok(self.load_from(&settings))
    }

    /// Decide whether there is enough information to submit content.
    ///
    /// Checks, in order: content store URL, API key, content ID base, and
    /// the pull-request indicator (a PR build unless it is exactly
    /// `"false"`). The indicator is `pull_request_var`, or
    /// `IS_PULL_REQUEST_BUILD` when that is unset; both unset counts as a
    /// PR build. Disabled TLS verification is
    /// flagged on the report but never blocks submission.
    ///
    /// The decision is made once. Later calls return the stored report
    /// without re-reading the environment.
    pub fn validate(&mut self, env: &impl EnvLookup) -> ValidationReport {
        if let Some(report) = self.submission.report() {
            debug!("config already validated; reusing decision");
            return report.clone();
        }

        let mut reasons = Vec::new();

        if self.content_store_url.is_empty() {
            reasons.push(Reason::MissingContentStoreUrl);
        }

        if self.content_store_apikey.is_empty() {
            reasons.push(Reason::MissingContentStoreApiKey);
        }

        if self.content_id_base.is_empty() {
            reasons.push(Reason::MissingContentIdBase);
        }

        let pull_request = env
            .get(&self.pull_request_var)
            .or_else(|| env.get(FALLBACK_PULL_REQUEST_VAR))
            .unwrap_or_default();
        if pull_request != "false" {
            reasons.push(Reason::PullRequestBuild);
        }

        let report = ValidationReport {
            reasons,
            tls_verify_disabled: !self.content_store_tls_verify,
        };

        debug!(
            ready = report.is_ready(),
            reasons = report.reasons.len(),
            "validated config"
        );

        self.submission = SubmitDecision::decide(report.clone());
        report
    }

    /// Whether content should be submitted.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - The decision made by `validate`
    /// * `Err(PreparerError::Usage)` - `validate` has not been called
    pub fn should_submit(&self) -> Result<bool> {
        match self.submission {
            SubmitDecision::Submit(_) => Ok(true),
            SubmitDecision::DoNotSubmit(_) => Ok(false),
            SubmitDecision::NotValidated => Err(PreparerError::Usage(
                "validate must be called first".to_string(),
            )),
        }
    }

    #[cfg(test)]
    pub fn submission(&self) -> &SubmitDecision {
        &self.submission
    }
}
