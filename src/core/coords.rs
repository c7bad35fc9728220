//! Feature-relative coordinate arithmetic
//!
//! Converts between the biologist-facing coordinate scheme and 0-based
//! genomic offsets, and projects feature-relative positions onto a genome.
//!
//! # Coordinate System
//!
//! | Scheme | Basis | Notes |
//! |--------|-------|-------|
//! | Relative offsets | 1-based, signed, no zero | `+1`/`-1` straddle the anchor |
//! | Genomic coordinates | 0-based, inclusive | `Feature.left <= Feature.right` |
//!
//! Relative offsets are anchored at a feature end and have no zero: the
//! legal values are ..., -2, -1, +1, +2, ... . Their meaning depends on the
//! anchor end:
//!
//! - relative to 5': `+1` is the first base of the feature, `-1` the base
//!   immediately upstream of it.
//! - relative to 3': `-1` is the last base of the feature, `+1` the base
//!   immediately downstream of it.
//!
//! Conversion to a 0-based offset therefore differs per endpoint and is kept
//! in one place (`one_to_zero` / `zero_to_one`) so no other module does
//! arithmetic across the discontinuity.

use crate::core::genome::Feature;

/// Which end of a feature a relative position is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The 5' end of the feature (in feature orientation)
    FivePrime,
    /// The 3' end of the feature (in feature orientation)
    ThreePrime,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::FivePrime => write!(f, "S"),
            Endpoint::ThreePrime => write!(f, "E"),
        }
    }
}

/// A feature-relative position: a signed 1-based offset and its anchor end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelPos {
    /// Signed 1-based offset, never zero
    pub offset: i64,
    /// Anchor end the offset counts from
    pub relative_to: Endpoint,
}

impl RelPos {
    pub fn new(offset: i64, relative_to: Endpoint) -> Self {
        Self {
            offset,
            relative_to,
        }
    }

    /// Position anchored at the 5' end
    pub fn five(offset: i64) -> Self {
        Self::new(offset, Endpoint::FivePrime)
    }

    /// Position anchored at the 3' end
    pub fn three(offset: i64) -> Self {
        Self::new(offset, Endpoint::ThreePrime)
    }
}

impl std::fmt::Display for RelPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.offset > 0 {
            write!(f, "+{}{}", self.offset, self.relative_to)
        } else {
            write!(f, "{}{}", self.offset, self.relative_to)
        }
    }
}

/// Convert a signed 1-based offset to a 0-based offset from the anchor
///
/// # Examples
/// ```
/// use dnaforge::core::{one_to_zero, Endpoint};
///
/// // 5' anchor: +1 is the anchor base itself
/// assert_eq!(one_to_zero(Endpoint::FivePrime, 1), 0);
/// assert_eq!(one_to_zero(Endpoint::FivePrime, -1), -1);
///
/// // 3' anchor: -1 is the anchor base itself
/// assert_eq!(one_to_zero(Endpoint::ThreePrime, -1), 0);
/// assert_eq!(one_to_zero(Endpoint::ThreePrime, 1), 1);
/// ```
#[inline]
pub fn one_to_zero(endpoint: Endpoint, offset: i64) -> i64 {
    match endpoint {
        Endpoint::FivePrime => {
            if offset > 0 {
                offset - 1
            } else {
                offset
            }
        }
        Endpoint::ThreePrime => {
            if offset > 0 {
                offset
            } else {
                offset + 1
            }
        }
    }
}

/// Convert a 0-based offset from the anchor back to the signed 1-based form
///
/// Exact inverse of [`one_to_zero`]: `zero_to_one(e, one_to_zero(e, n)) == n`
/// for every legal (non-zero) offset `n`.
#[inline]
pub fn zero_to_one(endpoint: Endpoint, offset: i64) -> i64 {
    match endpoint {
        Endpoint::FivePrime => {
            if offset >= 0 {
                offset + 1
            } else {
                offset
            }
        }
        Endpoint::ThreePrime => {
            if offset > 0 {
                offset
            } else {
                offset - 1
            }
        }
    }
}

/// Project a feature-relative position onto absolute genomic coordinates
///
/// The anchor is the strand-aware feature end, and "downstream" walks in the
/// feature's transcription direction, so for a crick-strand feature a
/// positive relative offset decreases the genomic coordinate.
///
/// # Examples
/// ```
/// use dnaforge::core::{adjust_to_physical, Feature, RelPos};
///
/// let fwd = Feature::new("ADH1", "chr1", 1000, 1500, true);
/// // First base of the gene
/// assert_eq!(adjust_to_physical(&fwd, RelPos::five(1)), 1000);
/// // Last base of the gene
/// assert_eq!(adjust_to_physical(&fwd, RelPos::three(-1)), 1500);
/// // 500 bases of promoter
/// assert_eq!(adjust_to_physical(&fwd, RelPos::five(-500)), 500);
///
/// let crick = Feature::new("ERG10", "chr1", 5000, 5600, false);
/// // First base downstream of a crick gene sits left of it
/// assert_eq!(adjust_to_physical(&crick, RelPos::three(1)), 4999);
/// ```
pub fn adjust_to_physical(feature: &Feature, pos: RelPos) -> i64 {
    let anchor = match pos.relative_to {
        Endpoint::FivePrime => {
            if feature.fwd {
                feature.left
            } else {
                feature.right
            }
        }
        Endpoint::ThreePrime => {
            if feature.fwd {
                feature.right
            } else {
                feature.left
            }
        }
    };
    let direction = if feature.fwd { 1 } else { -1 };
    anchor + direction * one_to_zero(pos.relative_to, pos.offset)
}

/// Express an absolute genomic coordinate relative to a chosen feature end
///
/// Inverse of [`adjust_to_physical`] for a fixed endpoint.
pub fn physical_to_relative(feature: &Feature, endpoint: Endpoint, genomic: i64) -> RelPos {
    let anchor = match endpoint {
        Endpoint::FivePrime => {
            if feature.fwd {
                feature.left
            } else {
                feature.right
            }
        }
        Endpoint::ThreePrime => {
            if feature.fwd {
                feature.right
            } else {
                feature.left
            }
        }
    };
    let direction = if feature.fwd { 1 } else { -1 };
    RelPos::new(zero_to_one(endpoint, direction * (genomic - anchor)), endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fwd_feature() -> Feature {
        Feature::new("ADH1", "chr1", 1000, 1500, true)
    }

    fn crick_feature() -> Feature {
        Feature::new("ERG10", "chr1", 5000, 5600, false)
    }

    #[test]
    fn test_one_to_zero_five_prime() {
        assert_eq!(one_to_zero(Endpoint::FivePrime, 1), 0);
        assert_eq!(one_to_zero(Endpoint::FivePrime, 2), 1);
        assert_eq!(one_to_zero(Endpoint::FivePrime, -1), -1);
        assert_eq!(one_to_zero(Endpoint::FivePrime, -500), -500);
    }

    #[test]
    fn test_one_to_zero_three_prime() {
        assert_eq!(one_to_zero(Endpoint::ThreePrime, -1), 0);
        assert_eq!(one_to_zero(Endpoint::ThreePrime, -2), -1);
        assert_eq!(one_to_zero(Endpoint::ThreePrime, 1), 1);
        assert_eq!(one_to_zero(Endpoint::ThreePrime, 500), 500);
    }

    #[test]
    fn test_zero_to_one_inverse() {
        for endpoint in [Endpoint::FivePrime, Endpoint::ThreePrime] {
            for n in (-600i64..=600).filter(|&n| n != 0) {
                assert_eq!(
                    zero_to_one(endpoint, one_to_zero(endpoint, n)),
                    n,
                    "round trip failed for {} @ {}",
                    n,
                    endpoint
                );
            }
        }
    }

    #[test]
    fn test_adjust_forward_gene_body() {
        let feat = fwd_feature();
        assert_eq!(adjust_to_physical(&feat, RelPos::five(1)), 1000);
        assert_eq!(adjust_to_physical(&feat, RelPos::three(-1)), 1500);
    }

    #[test]
    fn test_adjust_forward_flanks() {
        let feat = fwd_feature();
        // Promoter window
        assert_eq!(adjust_to_physical(&feat, RelPos::five(-500)), 500);
        assert_eq!(adjust_to_physical(&feat, RelPos::five(-1)), 999);
        // Terminator window
        assert_eq!(adjust_to_physical(&feat, RelPos::three(1)), 1501);
        assert_eq!(adjust_to_physical(&feat, RelPos::three(500)), 2000);
    }

    #[test]
    fn test_adjust_crick_gene_body() {
        let feat = crick_feature();
        // 5' end of a crick gene is its right genomic coordinate
        assert_eq!(adjust_to_physical(&feat, RelPos::five(1)), 5600);
        assert_eq!(adjust_to_physical(&feat, RelPos::three(-1)), 5000);
    }

    #[test]
    fn test_adjust_crick_flanks() {
        let feat = crick_feature();
        // Downstream of a crick gene decreases the genomic coordinate
        assert_eq!(adjust_to_physical(&feat, RelPos::three(1)), 4999);
        assert_eq!(adjust_to_physical(&feat, RelPos::five(-1)), 5601);
    }

    #[test]
    fn test_physical_round_trip_forward() {
        let feat = fwd_feature();
        for pos in [
            RelPos::five(1),
            RelPos::five(-500),
            RelPos::three(-1),
            RelPos::three(200),
        ] {
            let physical = adjust_to_physical(&feat, pos);
            let back = physical_to_relative(&feat, pos.relative_to, physical);
            assert_eq!(back, pos);
        }
    }

    #[test]
    fn test_physical_round_trip_crick() {
        let feat = crick_feature();
        for pos in [
            RelPos::five(1),
            RelPos::five(-42),
            RelPos::three(-1),
            RelPos::three(77),
        ] {
            let physical = adjust_to_physical(&feat, pos);
            let back = physical_to_relative(&feat, pos.relative_to, physical);
            assert_eq!(back, pos);
        }
    }

    #[test]
    fn test_relpos_display() {
        assert_eq!(RelPos::five(1).to_string(), "+1S");
        assert_eq!(RelPos::five(-500).to_string(), "-500S");
        assert_eq!(RelPos::three(-1).to_string(), "-1E");
        assert_eq!(RelPos::three(200).to_string(), "+200E");
    }
}
