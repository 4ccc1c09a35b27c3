//! Custom equivalence for features whose options need more than exact equality
//!
//! A feature opts in by implementing [`ComparableFeature`] on a serde-decodable
//! type and registering a [`TypedComparator`] for it in the catalog. Raw
//! options are decoded on demand, only when both sides declare the feature.

use crate::error::{KitmatchError, KitmatchResult};
use crate::features::config::OptionMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Typed feature options with a custom equivalence relation
pub trait ComparableFeature: DeserializeOwned {
    /// Whether `self`, the artifact's options, satisfies `requested`.
    ///
    /// The relation may be asymmetric: an artifact can cover a request
    /// without the reverse holding.
    fn equivalent_to(&self, requested: &Self) -> bool;
}

/// Object-safe decode-and-compare capability stored in a feature descriptor
pub trait FeatureComparator: Send + Sync {
    /// Decode both option maps and compare them, artifact side as receiver
    fn equivalent(&self, id: &str, artifact: &OptionMap, request: &OptionMap)
        -> KitmatchResult<bool>;
}

/// Adapter from a [`ComparableFeature`] type to a [`FeatureComparator`]
pub struct TypedComparator<T> {
    _feature: PhantomData<fn() -> T>,
}

impl<T> TypedComparator<T> {
    pub fn new() -> Self {
        Self {
            _feature: PhantomData,
        }
    }
}

impl<T> Default for TypedComparator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TypedComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedComparator<{}>", std::any::type_name::<T>())
    }
}

impl<T: ComparableFeature> FeatureComparator for TypedComparator<T> {
    fn equivalent(
        &self,
        id: &str,
        artifact: &OptionMap,
        request: &OptionMap,
    ) -> KitmatchResult<bool> {
        let requested: T = decode(id, request)?;
        let available: T = decode(id, artifact)?;
        Ok(available.equivalent_to(&requested))
    }
}

/// Decode raw feature options into their typed form
pub fn decode<T: DeserializeOwned>(id: &str, raw: &OptionMap) -> KitmatchResult<T> {
    serde_json::from_value(Value::Object(raw.clone()))
        .map_err(|e| KitmatchError::feature_decode(id, e))
}

/// Packaging mode of a built artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageMode {
    /// Packaged for a JVM
    Jvm,
    /// Compiled to a native executable
    Native,
}

/// Options of the built-in `package` feature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageFeature {
    /// Requested (or available) packaging modes; empty means JVM only
    pub modes: Vec<PackageMode>,
}

impl PackageFeature {
    fn provides(&self, mode: PackageMode) -> bool {
        if self.modes.is_empty() {
            return mode == PackageMode::Jvm;
        }
        self.modes.contains(&mode)
    }
}

impl ComparableFeature for PackageFeature {
    fn equivalent_to(&self, requested: &Self) -> bool {
        if requested.modes.is_empty() {
            return self.provides(PackageMode::Jvm);
        }
        requested.modes.iter().all(|mode| self.provides(*mode))
    }
}
