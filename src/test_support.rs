use crate::env::MapEnv;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Sets or removes one process environment variable and restores it on drop.
pub(crate) struct EnvGuard {
    key: String,
    original: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub(crate) fn set(key: &str, value: &str) -> Self {
        let guard = Self::capture(key);
        // Process environment is global and not thread-safe.
        // The lock keeps tests from racing even if a #[serial] annotation is missed.
        unsafe { std::env::set_var(key, value) };
        guard
    }

    pub(crate) fn unset(key: &str) -> Self {
        let guard = Self::capture(key);
        unsafe { std::env::remove_var(key) };
        guard
    }

    fn capture(key: &str) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        Self {
            key: key.to_string(),
            original: std::env::var(key).ok(),
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(value) => unsafe { std::env::set_var(&self.key, value) },
            None => unsafe { std::env::remove_var(&self.key) },
        }
    }
}

/// Environment with every required content-store variable set and a
/// non-PR build.
pub(crate) fn complete_env() -> MapEnv {
    MapEnv::new()
        .with("CONTENT_STORE_URL", "https://content.example.com/")
        .with("CONTENT_STORE_APIKEY", "12345")
        .with("CONTENT_ID_BASE", "https://github.com/org/repo/")
        .with("TRAVIS_PULL_REQUEST", "false")
}

/// Write `json` as `_deconst.json` inside a fresh temp directory.
pub(crate) fn write_settings(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = settings_path(temp_dir.path());
    std::fs::write(&path, json).unwrap();
    (temp_dir, path)
}

fn settings_path(dir: &Path) -> PathBuf {
    dir.join(crate::config::SETTINGS_FILE_NAME)
}
