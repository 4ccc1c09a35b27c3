//! Feature configuration shape
//!
//! Feature options are opaque to the matching core: a string-keyed mapping
//! of feature id to an option object. Optional features may instead live
//! under the reserved `addons` key, which holds a mapping of the same shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Reserved top-level key holding addon feature configuration
pub const ADDONS_KEY: &str = "addons";

/// Raw options of a single feature
pub type OptionMap = serde_json::Map<String, Value>;

/// Feature configuration of a build request or artifact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureConfig {
    features: BTreeMap<String, OptionMap>,
}

impl FeatureConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the options of a top-level feature
    pub fn with(mut self, id: impl Into<String>, options: OptionMap) -> Self {
        self.features.insert(id.into(), options);
        self
    }

    /// Add or replace the options of an addon feature
    pub fn with_addon(mut self, id: impl Into<String>, options: OptionMap) -> Self {
        self.features
            .entry(ADDONS_KEY.to_string())
            .or_default()
            .insert(id.into(), Value::Object(options));
        self
    }

    /// Find a feature's options, checking the top level first and then addons.
    ///
    /// An addon entry that is not an object is treated as absent.
    pub fn find(&self, id: &str) -> Option<&OptionMap> {
        if let Some(options) = self.features.get(id) {
            return Some(options);
        }

        self.features
            .get(ADDONS_KEY)
            .and_then(|addons| addons.get(id))
            .and_then(Value::as_object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> OptionMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn find_top_level() {
        let config = FeatureConfig::new().with("builder", options(json!({"verbose": true})));
        assert_eq!(config.find("builder").unwrap()["verbose"], json!(true));
        assert!(config.find("registry").is_none());
    }

    #[test]
    fn find_falls_back_to_addons() {
        let config = FeatureConfig::new().with_addon("telemetry", options(json!({"enabled": true})));
        assert_eq!(config.find("telemetry").unwrap()["enabled"], json!(true));
    }

    #[test]
    fn top_level_shadows_addon() {
        let config = FeatureConfig::new()
            .with("telemetry", options(json!({"from": "top"})))
            .with_addon("telemetry", options(json!({"from": "addon"})));
        assert_eq!(config.find("telemetry").unwrap()["from"], json!("top"));
    }

    #[test]
    fn non_object_addon_is_absent() {
        let config: FeatureConfig =
            serde_json::from_value(json!({"addons": {"telemetry": "enabled"}})).unwrap();
        assert!(config.find("telemetry").is_none());
    }

    #[test]
    fn deserializes_nested_shape() {
        let config: FeatureConfig = serde_json::from_value(json!({
            "builder": {"properties": ["a=b"]},
            "addons": {"master": {"enabled": true}}
        }))
        .unwrap();
        assert!(config.find("builder").is_some());
        assert!(config.find("master").is_some());
    }
}
