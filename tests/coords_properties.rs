//! Property-based tests for coordinate arithmetic
//!
//! The conversion between the signed no-zero offset scheme and 0-based
//! offsets, and the strand-aware projection onto genomic coordinates, must
//! round-trip exactly for every feature and every legal offset.

use dnaforge::core::{
    adjust_to_physical, one_to_zero, physical_to_relative, zero_to_one, Endpoint, Feature, RelPos,
};
use proptest::prelude::*;

/// Strategy for a legal (non-zero) relative offset
fn offset_strategy() -> impl Strategy<Value = i64> {
    (-2000i64..=2000).prop_filter("offset must be non-zero", |&n| n != 0)
}

fn endpoint_strategy() -> impl Strategy<Value = Endpoint> {
    prop_oneof![Just(Endpoint::FivePrime), Just(Endpoint::ThreePrime)]
}

/// Strategy for an arbitrary feature with left <= right
fn feature_strategy() -> impl Strategy<Value = Feature> {
    (0i64..1_000_000, 1i64..10_000, any::<bool>())
        .prop_map(|(left, len, fwd)| Feature::new("YFG1", "chr1", left, left + len - 1, fwd))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// `zero_to_one` inverts `one_to_zero` for every legal offset
    #[test]
    fn prop_offset_conversion_round_trip(
        endpoint in endpoint_strategy(),
        offset in offset_strategy(),
    ) {
        prop_assert_eq!(zero_to_one(endpoint, one_to_zero(endpoint, offset)), offset);
    }

    /// `one_to_zero` never maps two distinct legal offsets to the same value
    #[test]
    fn prop_offset_conversion_injective(
        endpoint in endpoint_strategy(),
        a in offset_strategy(),
        b in offset_strategy(),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(one_to_zero(endpoint, a), one_to_zero(endpoint, b));
    }

    /// Projecting a relative position and reading it back through the
    /// inverse projection reproduces the offset exactly
    #[test]
    fn prop_projection_round_trip(
        feature in feature_strategy(),
        endpoint in endpoint_strategy(),
        offset in offset_strategy(),
    ) {
        let pos = RelPos::new(offset, endpoint);
        let physical = adjust_to_physical(&feature, pos);
        let back = physical_to_relative(&feature, endpoint, physical);
        prop_assert_eq!(back, pos);
    }

    /// Walking downstream in the no-zero scheme moves one genomic base per
    /// step, in the strand direction
    #[test]
    fn prop_projection_steps_one_base(
        feature in feature_strategy(),
        endpoint in endpoint_strategy(),
        offset in offset_strategy(),
    ) {
        // The successor of -1 is +1; there is no zero
        let next = if offset == -1 { 1 } else { offset + 1 };
        let here = adjust_to_physical(&feature, RelPos::new(offset, endpoint));
        let there = adjust_to_physical(&feature, RelPos::new(next, endpoint));
        let step = if feature.fwd { 1 } else { -1 };
        prop_assert_eq!(there - here, step);
    }

    /// The two anchors differ by the feature length along the strand
    #[test]
    fn prop_anchors_span_feature(feature in feature_strategy()) {
        let first = adjust_to_physical(&feature, RelPos::five(1));
        let last = adjust_to_physical(&feature, RelPos::three(-1));
        if feature.fwd {
            prop_assert_eq!(first, feature.left);
            prop_assert_eq!(last, feature.right);
        } else {
            prop_assert_eq!(first, feature.right);
            prop_assert_eq!(last, feature.left);
        }
    }
}
