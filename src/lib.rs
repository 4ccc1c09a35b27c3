//! kitmatch - Build artifact reuse matching
//!
//! Decides whether an already-built artifact can satisfy a build request,
//! and whether two artifacts duplicate each other, so that a reconciliation
//! loop can skip redundant builds.

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod lookup;
pub mod matcher;
pub mod model;
pub mod ui;

pub use error::{KitmatchError, KitmatchResult};
pub use features::{FeatureCatalog, FeatureConfig, FeatureDescriptor};
pub use lookup::{ArtifactLookup, ArtifactStore, LookupContext, NamespaceResolver};
pub use matcher::Matcher;
pub use model::{Artifact, ArtifactKind, ArtifactPhase, BuildRequest};
