//! Configuration schema for kitmatch
//!
//! Configuration is stored at `~/.config/kitmatch/config.toml`

use crate::matcher::DEFAULT_VERSION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Matching behavior
    pub matching: MatchingConfig,

    /// Artifact lookup settings
    pub lookup: LookupConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Matching settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Version assumed for artifacts that have not recorded one
    pub default_version: String,

    /// Built-in features excluded from the catalog
    pub disabled_features: Vec<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_version: DEFAULT_VERSION.to_string(),
            disabled_features: vec![],
        }
    }
}

/// Lookup settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Abort lookups after N seconds (0 = no timeout)
    pub timeout_secs: u64,

    /// Request namespace to artifact namespace
    pub namespaces: BTreeMap<String, String>,
}

impl LookupConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[matching]"));
    }

    #[test]
    fn config_deserializes_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.matching.default_version, DEFAULT_VERSION);
        assert_eq!(config.lookup.timeout(), None);
    }

    #[test]
    fn config_deserializes_partial() {
        let toml = r#"
            [lookup]
            timeout_secs = 5

            [lookup.namespaces]
            team-a = "builds"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.lookup.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.lookup.namespaces["team-a"], "builds");
        assert_eq!(config.general.log_format, "text"); // default preserved
    }
}
