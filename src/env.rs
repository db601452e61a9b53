//! Environment lookup capability.
//!
//! Configuration never reads `std::env` directly. Callers pass an
//! [`EnvLookup`], which is [`ProcessEnv`] in the binary and `MapEnv` in
//! tests, so resolution is deterministic without touching process state.

#[cfg(test)]
use std::collections::BTreeMap;

/// Key/value lookup with default-on-missing semantics.
pub trait EnvLookup {
    /// Raw value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Value for `key`, or `default` when unset.
    fn fetch(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory environment.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

#[cfg(test)]
impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl EnvLookup for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvGuard;
    use serial_test::serial;

    #[test]
    fn map_env_fetch_falls_back_to_default() {
        let env = MapEnv::new().with("PRESENT", "value");
        assert_eq!(env.fetch("PRESENT", "x"), "value");
        assert_eq!(env.fetch("ABSENT", "x"), "x");
        assert_eq!(env.get("ABSENT"), None);
    }

    #[test]
    fn map_env_keeps_empty_values() {
        let env = MapEnv::new().with("EMPTY", "");
        assert_eq!(env.get("EMPTY"), Some(String::new()));
        assert_eq!(env.fetch("EMPTY", "default"), "");
    }

    #[test]
    fn map_env_collects_from_pairs() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.fetch("A", ""), "1");
        assert_eq!(env.fetch("B", ""), "2");
    }

    #[test]
    #[serial]
    fn process_env_reads_real_environment() {
        let _guard = EnvGuard::set("PREPARER_TEST_PROCESS_ENV", "on");
        assert_eq!(
            ProcessEnv.get("PREPARER_TEST_PROCESS_ENV"),
            Some("on".to_string())
        );
    }

    #[test]
    #[serial]
    fn process_env_missing_uses_default() {
        let _guard = EnvGuard::unset("PREPARER_TEST_PROCESS_ENV");
        assert_eq!(ProcessEnv.fetch("PREPARER_TEST_PROCESS_ENV", "dflt"), "dflt");
    }
}
