//! CLI command implementations

pub mod catalog;
pub mod compare;
pub mod config;
pub mod lookup;

pub use catalog::execute as catalog;
pub use compare::execute as compare;
pub use config::execute as config;
pub use lookup::execute as lookup;

use crate::error::{KitmatchError, KitmatchResult};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON document supplied on the command line
pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> KitmatchResult<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| KitmatchError::io(format!("reading {} from {}", what, path.display()), e))?;

    serde_json::from_str(&content).map_err(|e| {
        KitmatchError::User(format!("Invalid {} in {}: {}", what, path.display(), e))
    })
}
