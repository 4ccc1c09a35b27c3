//! Artifact store abstraction
//!
//! The store owns artifact persistence and label indexing. kitmatch only
//! issues list calls scoped by a [`Selector`].

use crate::error::{KitmatchError, KitmatchResult};
use crate::model::Artifact;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Condition on a single label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Label present with exactly this value
    Equals { key: String, value: String },
    /// Label present with one of these values
    In { key: String, values: Vec<String> },
    /// Label absent or not one of these values
    NotIn { key: String, values: Vec<String> },
    /// Label present with any value
    Exists { key: String },
}

impl Requirement {
    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equals {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn one_of<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::In {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn none_of<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NotIn {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn exists(key: impl Into<String>) -> Self {
        Self::Exists { key: key.into() }
    }

    /// Parse `key=value`, `key!=value` or a bare `key` (existence)
    pub fn parse(s: &str) -> Result<Self, String> {
        if let Some((key, value)) = s.split_once("!=") {
            if key.is_empty() {
                return Err(format!("invalid selector '{s}': empty label key"));
            }
            return Ok(Self::none_of(key, [value]));
        }

        match s.split_once('=') {
            Some((key, _)) if key.is_empty() => {
                Err(format!("invalid selector '{s}': empty label key"))
            }
            Some((key, value)) => Ok(Self::equals(key, value)),
            None if s.is_empty() => Err("invalid selector: empty".to_string()),
            None => Ok(Self::exists(s)),
        }
    }

    /// Evaluate against a label set
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        match self {
            Self::Equals { key, value } => labels.get(key) == Some(value),
            Self::In { key, values } => labels.get(key).is_some_and(|v| values.contains(v)),
            Self::NotIn { key, values } => labels.get(key).map_or(true, |v| !values.contains(v)),
            Self::Exists { key } => labels.contains_key(key),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals { key, value } => write!(f, "{}={}", key, value),
            Self::In { key, values } => write!(f, "{} in ({})", key, values.join(",")),
            Self::NotIn { key, values } => write!(f, "{} notin ({})", key, values.join(",")),
            Self::Exists { key } => write!(f, "{}", key),
        }
    }
}

/// Scope of a list call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub namespace: String,
    pub requirements: Vec<Requirement>,
}

impl Selector {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            requirements: Vec::new(),
        }
    }

    pub fn with(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Whether an artifact falls inside this scope
    pub fn matches(&self, artifact: &Artifact) -> bool {
        artifact.namespace == self.namespace
            && self
                .requirements
                .iter()
                .all(|r| r.matches(&artifact.labels))
    }
}

/// Read access to stored artifacts
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// List artifacts within the selector's scope, in store order
    async fn list(&self, selector: &Selector) -> KitmatchResult<Vec<Artifact>>;
}

/// Artifact store held in memory, listing in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    artifacts: Vec<Artifact>,
}

impl MemoryStore {
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        Self { artifacts }
    }

    /// Load a JSON array of artifacts.
    ///
    /// Standard labels absent from the snapshot are derived from each
    /// artifact's fields; labels present in the file are kept as written.
    pub async fn from_file(path: &Path) -> KitmatchResult<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            KitmatchError::io(format!("reading artifacts from {}", path.display()), e)
        })?;

        let artifacts: Vec<Artifact> = serde_json::from_str(&content)?;
        debug!("Loaded {} artifacts from {}", artifacts.len(), path.display());
        Ok(Self::new(
            artifacts.into_iter().map(with_missing_labels).collect(),
        ))
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

fn with_missing_labels(mut artifact: Artifact) -> Artifact {
    let derived = artifact.clone().with_standard_labels().labels;
    for (key, value) in derived {
        artifact.labels.entry(key).or_insert(value);
    }
    artifact
}

#[async_trait]
impl ArtifactStore for MemoryStore {
    async fn list(&self, selector: &Selector) -> KitmatchResult<Vec<Artifact>> {
        Ok(self
            .artifacts
            .iter()
            .filter(|a| selector.matches(a))
            .cloned()
            .collect())
    }
}
