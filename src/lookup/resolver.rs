//! Namespace resolution
//!
//! Artifacts for a request may live in a namespace other than the request's
//! own, as decided by the platform that manages the request.

use crate::error::{KitmatchError, KitmatchResult};
use crate::model::BuildRequest;
use async_trait::async_trait;
use std::collections::HashMap;

/// Resolves where a request's artifacts are kept
#[async_trait]
pub trait NamespaceResolver: Send + Sync {
    /// Artifact namespace for the request.
    ///
    /// Returns [`KitmatchError::PlatformNotFound`] when no platform manages
    /// the request; callers then use the request's own namespace.
    async fn resolve_namespace(&self, request: &BuildRequest) -> KitmatchResult<String>;
}

/// Resolver backed by a fixed request-namespace to artifact-namespace map
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    namespaces: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new(namespaces: HashMap<String, String>) -> Self {
        Self { namespaces }
    }
}

#[async_trait]
impl NamespaceResolver for StaticResolver {
    async fn resolve_namespace(&self, request: &BuildRequest) -> KitmatchResult<String> {
        self.namespaces
            .get(&request.namespace)
            .cloned()
            .ok_or_else(|| KitmatchError::PlatformNotFound(request.namespace.clone()))
    }
}
