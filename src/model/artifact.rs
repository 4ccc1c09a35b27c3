//! Built artifacts that may be reused

use crate::features::FeatureConfig;
use crate::model::labels;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Who produced an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Built and managed by the platform
    #[default]
    Platform,
    /// Supplied from outside the platform
    External,
    /// Placeholder for an image that was not built from a request
    Synthetic,
}

impl ArtifactKind {
    /// Kinds eligible for reuse lookups
    pub fn reusable() -> &'static [Self] {
        &[Self::Platform, Self::External]
    }

    /// Label value for this kind
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::External => "external",
            Self::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_label())
    }
}

/// Lifecycle phase of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactPhase {
    #[default]
    None,
    Initialization,
    WaitingForPlatform,
    WaitingForCatalog,
    BuildSubmitted,
    BuildRunning,
    Ready,
    CannotBuild,
    /// Terminal failure; never reused
    Error,
}

impl fmt::Display for ArtifactPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Initialization => "initialization",
            Self::WaitingForPlatform => "waiting-for-platform",
            Self::WaitingForCatalog => "waiting-for-catalog",
            Self::BuildSubmitted => "build-submitted",
            Self::BuildRunning => "build-running",
            Self::Ready => "ready",
            Self::CannotBuild => "cannot-build",
            Self::Error => "error",
        };
        f.pad(name)
    }
}

/// Snapshot of a previously produced build artifact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Artifact {
    pub name: String,

    pub namespace: String,

    /// Store labels used by selectors
    pub labels: BTreeMap<String, String>,

    pub kind: ArtifactKind,

    pub phase: ArtifactPhase,

    /// Platform version that produced the artifact, if recorded
    pub version: Option<String>,

    pub runtime_version: String,

    pub runtime_provider: String,

    /// Dependencies baked into the artifact
    pub dependencies: Vec<String>,

    pub features: FeatureConfig,
}

impl Artifact {
    /// Create an empty artifact in the given namespace
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Fill kind and runtime labels from the artifact's own fields
    pub fn with_standard_labels(mut self) -> Self {
        self.labels
            .insert(labels::KIND.to_string(), self.kind.as_label().to_string());
        self.labels.insert(
            labels::RUNTIME_VERSION.to_string(),
            self.runtime_version.clone(),
        );
        self.labels.insert(
            labels::RUNTIME_PROVIDER.to_string(),
            self.runtime_provider.clone(),
        );
        self
    }

    pub fn is_error(&self) -> bool {
        self.phase == ArtifactPhase::Error
    }
}
