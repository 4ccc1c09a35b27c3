//! Lookup cache keys
//!
//! kitmatch never caches lookups itself. Callers that do can key their cache
//! on everything a lookup result depends on from the request side.

use crate::error::KitmatchResult;
use crate::model::BuildRequest;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fmt;

/// Stable identity of a lookup's request-side inputs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    pub namespace: String,
    pub runtime_version: String,
    pub runtime_provider: String,
    /// SHA256 of the canonical feature configuration (first 12 hex chars)
    pub features_hash: String,
    /// SHA256 of the sorted, de-duplicated dependencies (first 12 hex chars)
    pub dependencies_hash: String,
}

impl LookupKey {
    /// Compute the key for `request` looked up in `namespace`
    pub fn new(namespace: impl Into<String>, request: &BuildRequest) -> KitmatchResult<Self> {
        // BTreeMap-backed maps serialize with sorted keys
        let features = serde_json::to_vec(&request.features)?;

        let dependencies: BTreeSet<&str> =
            request.dependencies.iter().map(String::as_str).collect();
        let mut hasher = Sha256::new();
        for dep in dependencies {
            hasher.update(dep.as_bytes());
            hasher.update([0u8]);
        }

        Ok(Self {
            namespace: namespace.into(),
            runtime_version: request.runtime_version.clone(),
            runtime_provider: request.runtime_provider.clone(),
            features_hash: short_hash(Sha256::digest(&features).as_slice()),
            dependencies_hash: short_hash(hasher.finalize().as_slice()),
        })
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}-{}/{}-{}",
            self.namespace,
            self.runtime_provider,
            self.runtime_version,
            self.features_hash,
            self.dependencies_hash
        )
    }
}

/// First 12 hex chars (6 bytes) of a digest
fn short_hash(digest: &[u8]) -> String {
    hex::encode(&digest[..6])
}
