//! The `_deconst.json` settings file.
//!
//! Decoded once into [`SettingsFile`]; a missing key is `None`. Unknown keys
//! are ignored so newer settings files still load.

use crate::error::{PreparerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name looked up at the content root.
pub const SETTINGS_FILE_NAME: &str = "_deconst.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    #[serde(rename = "contentIDBase", skip_serializing_if = "Option::is_none")]
    pub content_id_base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<BTreeMap<String, String>>,

    #[serde(rename = "githubUrl", skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(rename = "githubBranch", skip_serializing_if = "Option::is_none")]
    pub github_branch: Option<String>,
}

impl SettingsFile {
    /// Decode settings from a JSON document. The top level must be an object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| PreparerError::MalformedInput(format!("invalid JSON: {}", e)))?;

        if !value.is_object() {
            return Err(PreparerError::MalformedInput(
                "settings must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| PreparerError::MalformedInput(e.to_string()))
    }
}

/// Read a settings file's raw text.
pub fn read<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        PreparerError::Io(format!(
            "failed to read settings file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Prefix a decode error with the file it came from.
pub fn with_path(err: PreparerError, path: &Path) -> PreparerError {
    match err {
        PreparerError::MalformedInput(msg) => {
            PreparerError::MalformedInput(format!("{}: {}", path.display(), msg))
        }
        other => other,
    }
}

/// Find `_deconst.json` directly inside `dir`.
pub fn discover<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    let candidate = dir.as_ref().join(SETTINGS_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_settings;
    use tempfile::TempDir;

    #[test]
    fn empty_object_has_no_fields() {
        let settings = SettingsFile::from_json("{}").unwrap();
        assert_eq!(settings, SettingsFile::default());
    }

    #[test]
    fn decodes_camel_case_keys() {
        let settings = SettingsFile::from_json(
            r#"{
                "contentIDBase": "https://github.com/org/repo/",
                "githubUrl": "https://github.com/org/repo",
                "githubBranch": "main",
                "meta": {"someKey": "someValue"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            settings.content_id_base.as_deref(),
            Some("https://github.com/org/repo/")
        );
        assert_eq!(
            settings.github_url.as_deref(),
            Some("https://github.com/org/repo")
        );
        assert_eq!(settings.github_branch.as_deref(), Some("main"));
        assert_eq!(
            settings.meta.unwrap().get("someKey").map(String::as_str),
            Some("someValue")
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let settings = SettingsFile::from_json(r#"{"template": "default", "githubBranch": "gh"}"#)
            .unwrap();
        assert_eq!(settings.github_branch.as_deref(), Some("gh"));
    }

    #[test]
    fn null_is_treated_as_absent() {
        let settings = SettingsFile::from_json(r#"{"contentIDBase": null, "meta": null}"#).unwrap();
        assert!(settings.content_id_base.is_none());
        assert!(settings.meta.is_none());
    }

    #[test]
    fn invalid_json_is_malformed_input() {
        let err = SettingsFile::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PreparerError::MalformedInput(_)));
    }

    #[test]
    fn non_object_top_level_is_malformed_input() {
        let err = SettingsFile::from_json(r#"["contentIDBase"]"#).unwrap_err();
        assert!(matches!(err, PreparerError::MalformedInput(_)));
    }

    #[test]
    fn wrong_value_type_is_malformed_input() {
        let err = SettingsFile::from_json(r#"{"meta": {"count": 3}}"#).unwrap_err();
        assert!(matches!(err, PreparerError::MalformedInput(_)));
    }

    #[test]
    fn read_returns_file_contents() {
        let (_dir, path) = write_settings(r#"{"githubBranch": "release"}"#);
        let settings = SettingsFile::from_json(&read(&path).unwrap()).unwrap();
        assert_eq!(settings.github_branch.as_deref(), Some("release"));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read(temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PreparerError::Io(_)));
    }

    #[test]
    fn with_path_names_the_file() {
        let (_dir, path) = write_settings("{,}");
        let err = SettingsFile::from_json(&read(&path).unwrap()).unwrap_err();
        let err = with_path(err, &path);
        assert!(matches!(err, PreparerError::MalformedInput(_)));
        assert!(err.to_string().contains(SETTINGS_FILE_NAME));
    }

    #[test]
    fn with_path_leaves_io_errors_alone() {
        let err = with_path(PreparerError::Io("gone".to_string()), Path::new("x.json"));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn discover_finds_settings_in_directory() {
        let (dir, path) = write_settings("{}");
        assert_eq!(discover(dir.path()), Some(path));
    }

    #[test]
    fn discover_returns_none_when_absent() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(discover(temp_dir.path()), None);
    }
}
