//! Feature equivalence between a request and an artifact
//!
//! An artifact is reusable only when every build-influencing feature is
//! either absent on both sides or configured equivalently on both sides.

use crate::error::KitmatchResult;
use crate::features::catalog::{Comparison, FeatureCatalog};
use crate::features::config::FeatureConfig;
use tracing::debug;

/// Check whether the artifact's feature configuration satisfies the request's.
///
/// Visits build-influencing features in catalog order and stops at the first
/// mismatch. A decode failure aborts the whole evaluation.
pub fn features_match(
    catalog: &FeatureCatalog,
    request: &FeatureConfig,
    artifact: &FeatureConfig,
) -> KitmatchResult<bool> {
    for descriptor in catalog.build_influencing() {
        let id = descriptor.id();

        let (requested, available) = match (request.find(id), artifact.find(id)) {
            (None, None) => continue,
            (Some(requested), Some(available)) => (requested, available),
            (requested, _) => {
                debug!(
                    "Feature {} declared only by the {}",
                    id,
                    if requested.is_some() { "request" } else { "artifact" }
                );
                return Ok(false);
            }
        };

        let equivalent = match descriptor.comparison() {
            Comparison::Exact => requested == available,
            Comparison::Custom(comparator) => comparator.equivalent(id, available, requested)?,
        };

        if !equivalent {
            debug!("Feature {} configured differently", id);
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KitmatchError;
    use crate::features::{ComparableFeature, FeatureDescriptor, OptionMap};
    use serde::Deserialize;
    use serde_json::{json, Value};

    /// Artifact side is a range, request side is a point
    #[derive(Debug, Deserialize)]
    struct Span {
        min: i64,
        max: i64,
    }

    impl ComparableFeature for Span {
        fn equivalent_to(&self, requested: &Self) -> bool {
            self.min <= requested.min && requested.max <= self.max
        }
    }

    fn options(value: Value) -> OptionMap {
        value.as_object().cloned().unwrap()
    }

    fn features(value: Value) -> FeatureConfig {
        serde_json::from_value(value).unwrap()
    }

    fn catalog() -> FeatureCatalog {
        FeatureCatalog::new([
            FeatureDescriptor::new("sched", true),
            FeatureDescriptor::new("logging", false),
            FeatureDescriptor::comparable::<Span>("span"),
        ])
    }

    #[test]
    fn empty_configs_match() {
        let empty = FeatureConfig::new();
        assert!(features_match(&catalog(), &empty, &empty).unwrap());
    }

    #[test]
    fn request_only_feature_mismatches() {
        let request = features(json!({"sched": {"cron": "* * * *"}}));
        assert!(!features_match(&catalog(), &request, &FeatureConfig::new()).unwrap());
    }

    #[test]
    fn artifact_only_feature_mismatches() {
        let artifact = features(json!({"sched": {"cron": "* * * *"}}));
        assert!(!features_match(&catalog(), &FeatureConfig::new(), &artifact).unwrap());
    }

    #[test]
    fn non_influencing_feature_ignored() {
        let request = features(json!({"logging": {"level": "DEBUG"}}));
        let artifact = features(json!({"logging": {"level": "INFO"}, "unknown": {"x": 1}}));
        assert!(features_match(&catalog(), &request, &artifact).unwrap());
        assert!(features_match(&catalog(), &FeatureConfig::new(), &artifact).unwrap());
    }

    #[test]
    fn exact_comparison_is_strict() {
        let request = features(json!({"sched": {"cron": "* * * *", "retries": 1}}));
        let same = features(json!({"sched": {"retries": 1, "cron": "* * * *"}}));
        let float = features(json!({"sched": {"cron": "* * * *", "retries": 1.0}}));
        let text = features(json!({"sched": {"cron": "* * * *", "retries": "1"}}));

        assert!(features_match(&catalog(), &request, &same).unwrap());
        assert!(!features_match(&catalog(), &request, &float).unwrap());
        assert!(!features_match(&catalog(), &request, &text).unwrap());
    }

    #[test]
    fn addon_on_one_side_matches_top_level_on_other() {
        let request = FeatureConfig::new().with("sched", options(json!({"cron": "@daily"})));
        let artifact = FeatureConfig::new().with_addon("sched", options(json!({"cron": "@daily"})));
        assert!(features_match(&catalog(), &request, &artifact).unwrap());
    }

    #[test]
    fn range_artifact_covers_point_request() {
        let request = features(json!({"span": {"min": 5, "max": 5}}));
        let artifact = features(json!({"span": {"min": 1, "max": 10}}));
        assert!(features_match(&catalog(), &request, &artifact).unwrap());
    }

    #[test]
    fn point_artifact_does_not_cover_range_request() {
        let request = features(json!({"span": {"min": 1, "max": 10}}));
        let artifact = features(json!({"span": {"min": 5, "max": 5}}));
        assert!(!features_match(&catalog(), &request, &artifact).unwrap());
    }

    #[test]
    fn decode_failure_aborts() {
        let request = features(json!({"span": {"min": "low", "max": 5}}));
        let artifact = features(json!({"span": {"min": 1, "max": 10}}));
        let err = features_match(&catalog(), &request, &artifact).unwrap_err();
        assert!(matches!(err, KitmatchError::FeatureDecode { .. }));
    }

    #[test]
    fn mismatch_short_circuits_before_later_decode() {
        // "sched" sorts before "span": the sched mismatch must win over the span decode error
        let request = features(json!({"sched": {"cron": "a"}, "span": {"min": "bad"}}));
        let artifact = features(json!({"sched": {"cron": "b"}, "span": {"min": 1, "max": 2}}));
        assert!(!features_match(&catalog(), &request, &artifact).unwrap());
    }
}
