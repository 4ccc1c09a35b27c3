//! Build requests and artifacts, as supplied by the store

pub mod artifact;
pub mod request;

pub use artifact::{Artifact, ArtifactKind, ArtifactPhase};
pub use request::BuildRequest;

/// Label keys the store indexes artifacts by
pub mod labels {
    /// Artifact kind (platform, external, synthetic)
    pub const KIND: &str = "kitmatch.io/kind";
    /// Runtime version the artifact targets
    pub const RUNTIME_VERSION: &str = "kitmatch.io/runtime.version";
    /// Runtime provider the artifact targets
    pub const RUNTIME_PROVIDER: &str = "kitmatch.io/runtime.provider";
}
