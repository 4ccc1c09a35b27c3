//! Reuse matching between build requests and artifacts
//!
//! A request can reuse an artifact when, in order:
//! 1. the artifact's status is compatible (not failed, same versions and runtime),
//! 2. every build-influencing feature is configured equivalently,
//! 3. the artifact contains every dependency the request needs.
//!
//! Evaluation stops at the first failing step. Matching reads its inputs only
//! and keeps no state between calls.

mod deps;

pub use deps::contains_all;

use crate::error::KitmatchResult;
use crate::features::{features_match, FeatureCatalog};
use crate::model::{Artifact, BuildRequest};
use std::sync::Arc;
use tracing::debug;

/// Version substituted for artifacts that have not recorded one
pub const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decides whether artifacts satisfy requests or duplicate each other
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Arc<FeatureCatalog>,
    default_version: String,
}

impl Matcher {
    /// Create a matcher over the given feature catalog
    pub fn new(catalog: Arc<FeatureCatalog>) -> Self {
        Self {
            catalog,
            default_version: DEFAULT_VERSION.to_string(),
        }
    }

    /// Override the version assumed for artifacts without one
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn default_version(&self) -> &str {
        &self.default_version
    }

    /// Whether `artifact` can be reused to satisfy `request`
    pub fn request_matches(
        &self,
        request: &BuildRequest,
        artifact: &Artifact,
    ) -> KitmatchResult<bool> {
        debug!(
            "Matching request {} against artifact {} in namespace {}",
            request.name, artifact.name, request.namespace
        );

        if !self.status_matches(request, artifact) {
            return Ok(false);
        }

        if !features_match(&self.catalog, &request.features, &artifact.features)? {
            debug!(
                "Request {} and artifact {} features do not match",
                request.name, artifact.name
            );
            return Ok(false);
        }

        if !contains_all(&artifact.dependencies, &request.dependencies) {
            debug!(
                "Request {} and artifact {} dependencies do not match",
                request.name, artifact.name
            );
            return Ok(false);
        }

        debug!("Matched request {} with artifact {}", request.name, artifact.name);
        Ok(true)
    }

    /// Status gate: phase, platform version and runtime must line up.
    ///
    /// A differing dependency count is only reported; containment is decided
    /// later.
    pub fn status_matches(&self, request: &BuildRequest, artifact: &Artifact) -> bool {
        if artifact.is_error() {
            debug!("Artifact {} has a phase of Error", artifact.name);
            return false;
        }
        if artifact.version != request.version {
            debug!(
                "Request {} and artifact {} versions do not match",
                request.name, artifact.name
            );
            return false;
        }
        if artifact.runtime_provider != request.runtime_provider {
            debug!(
                "Request {} and artifact {} runtime providers do not match",
                request.name, artifact.name
            );
            return false;
        }
        if artifact.runtime_version != request.runtime_version {
            debug!(
                "Request {} and artifact {} runtime versions do not match",
                request.name, artifact.name
            );
            return false;
        }
        if artifact.dependencies.len() != request.dependencies.len() {
            debug!(
                "Request {} and artifact {} have different number of dependencies",
                request.name, artifact.name
            );
        }

        true
    }

    /// Whether two artifacts are interchangeable, for deduplication.
    ///
    /// `a`'s missing version is taken as the default version. Dependency
    /// lists must have equal length and `a` must contain all of `b`'s.
    pub fn artifacts_equivalent(&self, a: &Artifact, b: &Artifact) -> KitmatchResult<bool> {
        let version = a.version.as_deref().unwrap_or(&self.default_version);
        if Some(version) != b.version.as_deref() {
            return Ok(false);
        }
        if a.dependencies.len() != b.dependencies.len() {
            return Ok(false);
        }
        if !features_match(&self.catalog, &a.features, &b.features)? {
            return Ok(false);
        }
        if !contains_all(&a.dependencies, &b.dependencies) {
            return Ok(false);
        }

        Ok(true)
    }
}
