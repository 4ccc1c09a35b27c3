//! Feature catalog
//!
//! Enumerates every known feature, whether its configuration influences the
//! built artifact, and how two configurations of it are compared.

use crate::features::comparable::{ComparableFeature, FeatureComparator, TypedComparator};
use crate::features::PackageFeature;
use std::fmt;
use std::sync::Arc;

/// How two configurations of the same feature are compared
#[derive(Clone)]
pub enum Comparison {
    /// Deep structural equality of the raw options
    Exact,
    /// Feature-specific relation over decoded options
    Custom(Arc<dyn FeatureComparator>),
}

impl Comparison {
    /// Comparison through a [`ComparableFeature`] type
    pub fn custom<T: ComparableFeature + 'static>() -> Self {
        Self::Custom(Arc::new(TypedComparator::<T>::new()))
    }

    /// Short name for display
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A known feature and its matching behavior
#[derive(Debug, Clone)]
pub struct FeatureDescriptor {
    id: String,
    influences_build: bool,
    comparison: Comparison,
}

impl FeatureDescriptor {
    /// Feature compared by exact equality
    pub fn new(id: impl Into<String>, influences_build: bool) -> Self {
        Self {
            id: id.into(),
            influences_build,
            comparison: Comparison::Exact,
        }
    }

    /// Build-influencing feature compared through `T::equivalent_to`
    pub fn comparable<T: ComparableFeature + 'static>(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            influences_build: true,
            comparison: Comparison::custom::<T>(),
        }
    }

    /// Replace the comparison
    pub fn with_comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn influences_build(&self) -> bool {
        self.influences_build
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }
}

/// Ordered set of feature descriptors
///
/// Descriptors are kept sorted by id so that matching visits features in a
/// reproducible order. A later descriptor with an already-known id replaces
/// the earlier one.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    descriptors: Vec<FeatureDescriptor>,
}

impl FeatureCatalog {
    /// Build a catalog from arbitrary descriptors
    pub fn new(descriptors: impl IntoIterator<Item = FeatureDescriptor>) -> Self {
        let mut catalog = Self::default();
        for descriptor in descriptors {
            catalog.insert(descriptor);
        }
        catalog
    }

    /// The features shipped with kitmatch
    pub fn builtin() -> Self {
        Self::new([
            FeatureDescriptor::new("builder", true),
            FeatureDescriptor::new("camel", true),
            FeatureDescriptor::new("container", false),
            FeatureDescriptor::new("cron", false),
            FeatureDescriptor::new("jvm", false),
            FeatureDescriptor::new("logging", false),
            FeatureDescriptor::comparable::<PackageFeature>("package"),
            FeatureDescriptor::new("registry", true),
        ])
    }

    /// Add a descriptor, replacing any with the same id
    pub fn insert(&mut self, descriptor: FeatureDescriptor) {
        match self
            .descriptors
            .binary_search_by(|d| d.id.as_str().cmp(descriptor.id()))
        {
            Ok(pos) => self.descriptors[pos] = descriptor,
            Err(pos) => self.descriptors.insert(pos, descriptor),
        }
    }

    /// Drop the given feature ids
    pub fn without<S: AsRef<str>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        let ids: Vec<S> = ids.into_iter().collect();
        self.descriptors
            .retain(|d| !ids.iter().any(|id| id.as_ref() == d.id));
        self
    }

    /// All descriptors, sorted by id
    pub fn descriptors(&self) -> &[FeatureDescriptor] {
        &self.descriptors
    }

    /// Descriptors whose configuration must match for reuse, sorted by id
    pub fn build_influencing(&self) -> impl Iterator<Item = &FeatureDescriptor> {
        self.descriptors.iter().filter(|d| d.influences_build)
    }

    /// Look up a descriptor by id
    pub fn get(&self, id: &str) -> Option<&FeatureDescriptor> {
        self.descriptors
            .binary_search_by(|d| d.id.as_str().cmp(id))
            .ok()
            .map(|pos| &self.descriptors[pos])
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
