//! Error types for kitmatch
//!
//! All modules use `KitmatchResult<T>` as their return type. A negative match
//! is never an error: matchers answer with a plain `false`.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for kitmatch operations
pub type KitmatchResult<T> = Result<T, KitmatchError>;

/// All errors that can occur in kitmatch
#[derive(Error, Debug)]
pub enum KitmatchError {
    // Lookup errors
    #[error("No platform found for namespace {0}")]
    PlatformNotFound(String),

    #[error("Artifact store error: {0}")]
    Store(String),

    #[error("Artifact lookup cancelled")]
    Cancelled,

    #[error("Artifact lookup timed out after {0:?}")]
    LookupTimeout(Duration),

    // Feature errors
    #[error("Failed to decode configuration of feature '{feature}': {reason}")]
    FeatureDecode { feature: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl KitmatchError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a store failure
    pub fn store(reason: impl Into<String>) -> Self {
        Self::Store(reason.into())
    }

    /// Create a feature decode failure
    pub fn feature_decode(feature: impl Into<String>, reason: impl ToString) -> Self {
        Self::FeatureDecode {
            feature: feature.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this is a tolerable "no platform" outcome of namespace resolution
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PlatformNotFound(_))
    }

    /// Check if error is retryable by the caller
    ///
    /// kitmatch never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Store(_) | Self::LookupTimeout(_) | Self::Cancelled
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::FeatureDecode { .. } => {
                Some("Check the feature options against: kitmatch catalog")
            }
            Self::ConfigInvalid { .. } => Some("Run: kitmatch config init --force"),
            Self::LookupTimeout(_) => Some("Raise lookup.timeout_secs or pass --timeout"),
            _ => None,
        }
    }
}
