//! Build requests

use crate::features::FeatureConfig;
use serde::{Deserialize, Serialize};

/// Desired deployable unit that needs an artifact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildRequest {
    pub name: String,

    pub namespace: String,

    /// Resolved platform version the artifact must be built with
    pub version: Option<String>,

    pub runtime_version: String,

    pub runtime_provider: String,

    /// Dependencies the artifact must contain; order is irrelevant
    pub dependencies: Vec<String>,

    pub features: FeatureConfig,
}

impl BuildRequest {
    /// Create an empty request in the given namespace
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }
}
