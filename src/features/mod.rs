//! Build-influencing features and their equivalence
//!
//! Feature configuration stays opaque JSON until a feature's comparator
//! asks for a typed view of it.

pub mod catalog;
pub mod comparable;
pub mod config;
pub mod equivalence;

pub use catalog::{Comparison, FeatureCatalog, FeatureDescriptor};
pub use comparable::{
    ComparableFeature, FeatureComparator, PackageFeature, PackageMode, TypedComparator,
};
pub use config::{FeatureConfig, OptionMap, ADDONS_KEY};
pub use equivalence::features_match;
