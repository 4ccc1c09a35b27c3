//! Artifact lookup for build requests
//!
//! Lists candidate artifacts from the store, scoped to the request's
//! artifact namespace, reusable kinds and runtime, and keeps the ones the
//! matcher accepts. Every call reads the store once; nothing is cached.

pub mod context;
pub mod fingerprint;
pub mod resolver;
pub mod store;

pub use context::LookupContext;
pub use fingerprint::LookupKey;
pub use resolver::{NamespaceResolver, StaticResolver};
pub use store::{ArtifactStore, MemoryStore, Requirement, Selector};

use crate::error::KitmatchResult;
use crate::matcher::Matcher;
use crate::model::{labels, Artifact, ArtifactKind, BuildRequest};
use tracing::debug;

/// Finds reusable artifacts for build requests
pub struct ArtifactLookup {
    store: Box<dyn ArtifactStore>,
    resolver: Box<dyn NamespaceResolver>,
    matcher: Matcher,
}

impl ArtifactLookup {
    pub fn new(
        store: Box<dyn ArtifactStore>,
        resolver: Box<dyn NamespaceResolver>,
        matcher: Matcher,
    ) -> Self {
        Self {
            store,
            resolver,
            matcher,
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Namespace holding the request's artifacts.
    ///
    /// Falls back to the request's namespace when no platform manages it.
    pub async fn resolve_namespace(
        &self,
        ctx: &LookupContext,
        request: &BuildRequest,
    ) -> KitmatchResult<String> {
        match ctx.run(self.resolver.resolve_namespace(request)).await {
            Ok(namespace) => Ok(namespace),
            Err(e) if e.is_not_found() => {
                debug!(
                    "No platform for request {}, using namespace {}",
                    request.name, request.namespace
                );
                Ok(request.namespace.clone())
            }
            Err(e) => Err(e),
        }
    }

    /// Selector scoping candidates for `request` within `namespace`
    pub fn selector(
        namespace: impl Into<String>,
        request: &BuildRequest,
        extra: &[Requirement],
    ) -> Selector {
        let mut selector = Selector::new(namespace)
            .with(Requirement::one_of(
                labels::KIND,
                ArtifactKind::reusable().iter().map(ArtifactKind::as_label),
            ))
            .with(Requirement::equals(
                labels::RUNTIME_VERSION,
                request.runtime_version.as_str(),
            ))
            .with(Requirement::equals(
                labels::RUNTIME_PROVIDER,
                request.runtime_provider.as_str(),
            ));
        selector.requirements.extend_from_slice(extra);
        selector
    }

    /// Artifacts that can be reused for `request`, in store order
    pub async fn find(
        &self,
        ctx: &LookupContext,
        request: &BuildRequest,
        extra: &[Requirement],
    ) -> KitmatchResult<Vec<Artifact>> {
        let namespace = self.resolve_namespace(ctx, request).await?;
        self.find_in(ctx, &namespace, request, extra).await
    }

    /// Like [`find`](Self::find), for a namespace the caller already resolved
    pub async fn find_in(
        &self,
        ctx: &LookupContext,
        namespace: &str,
        request: &BuildRequest,
        extra: &[Requirement],
    ) -> KitmatchResult<Vec<Artifact>> {
        let selector = Self::selector(namespace, request, extra);

        let candidates = ctx.run(self.store.list(&selector)).await?;
        debug!(
            "Found {} candidate artifacts for request {} in namespace {}",
            candidates.len(),
            request.name,
            selector.namespace
        );

        let mut matched = Vec::new();
        for artifact in candidates {
            if self.matcher.request_matches(request, &artifact)? {
                matched.push(artifact);
            }
        }

        debug!(
            "{} artifacts reusable for request {}",
            matched.len(),
            request.name
        );
        Ok(matched)
    }
}
