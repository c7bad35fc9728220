//! Slice algebra
//!
//! A slice is a symbolic interval over a feature: two relative positions
//! plus per-end approximation flags. Part prefixes pick a canonical initial
//! slice; user modifiers then fold over it. Everything here stays symbolic;
//! projection to genomic coordinates happens in the materializers.

use crate::core::breed::GenePrefix;
use crate::core::coords::{one_to_zero, zero_to_one, RelPos};
use crate::core::error::{MaterializeError, Result};

/// A symbolic interval over a feature
///
/// If both positions share an anchor end, `left.offset <= right.offset`
/// must hold. Cross-endpoint slices may flip during projection and are
/// checked physically instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub left: RelPos,
    pub l_approx: bool,
    pub right: RelPos,
    pub r_approx: bool,
}

impl Slice {
    pub fn new(left: RelPos, l_approx: bool, right: RelPos, r_approx: bool) -> Self {
        Self {
            left,
            l_approx,
            right,
            r_approx,
        }
    }

    /// A slice with both bounds exact
    pub fn exact(left: RelPos, right: RelPos) -> Self {
        Self::new(left, false, right, false)
    }

    /// Canonical initial slice for a part prefix
    ///
    /// `flank` is the genome-configured window for upstream/downstream
    /// parts; promoter and terminator windows are fixed.
    pub fn canonical(prefix: GenePrefix, flank: i64) -> Self {
        match prefix {
            GenePrefix::Promoter => {
                Self::new(RelPos::five(-500), true, RelPos::five(-1), false)
            }
            GenePrefix::Upstream => {
                Self::new(RelPos::five(-flank), true, RelPos::five(-1), false)
            }
            GenePrefix::Terminator => {
                Self::new(RelPos::three(1), false, RelPos::three(500), true)
            }
            GenePrefix::Downstream => {
                Self::new(RelPos::three(1), false, RelPos::three(flank), true)
            }
            GenePrefix::FusableOrf => Self::exact(RelPos::five(1), RelPos::three(-4)),
            GenePrefix::Gene | GenePrefix::Orf => {
                Self::exact(RelPos::five(1), RelPos::three(-1))
            }
            GenePrefix::Mrna => Self::new(RelPos::five(1), false, RelPos::three(200), true),
        }
    }

    /// Whether either bound is approximate
    pub fn is_approx(&self) -> bool {
        self.l_approx || self.r_approx
    }

    /// Widen approximate bounds outward by `margin` bases
    ///
    /// The arithmetic runs in 0-based space so a widening that crosses the
    /// no-zero discontinuity stays correct.
    pub fn widen_approx(&self, margin: i64) -> Self {
        let mut out = *self;
        if self.l_approx {
            let o = one_to_zero(self.left.relative_to, self.left.offset) - margin;
            out.left = RelPos::new(zero_to_one(self.left.relative_to, o), self.left.relative_to);
        }
        if self.r_approx {
            let o = one_to_zero(self.right.relative_to, self.right.offset) + margin;
            out.right = RelPos::new(zero_to_one(self.right.relative_to, o), self.right.relative_to);
        }
        out
    }
}

impl std::fmt::Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}{}:{}{}]",
            if self.l_approx { "~" } else { "" },
            self.left,
            if self.r_approx { "~" } else { "" },
            self.right
        )
    }
}

/// A slice modifier attached to a gene part
#[derive(Debug, Clone, PartialEq)]
pub enum Mod {
    /// A further slice, replacing the accumulated bounds
    Slice(Slice),
    /// A textual attribute re-basing the part (`.up`, `.down`, `.mrna`)
    Dot(String),
}

/// Static check of a single slice modifier
///
/// Same-endpoint bounds must be ordered; cross-endpoint bounds are deferred
/// to physical projection.
pub fn check_mod_slice(name: &str, slice: &Slice) -> Result<()> {
    if slice.left.relative_to == slice.right.relative_to
        && slice.left.offset > slice.right.offset
    {
        return Err(MaterializeError::InvalidSlice {
            gene: name.to_string(),
            message: format!("left bound {} exceeds right bound {}", slice.left, slice.right),
        });
    }
    Ok(())
}

/// Fold part modifiers over the canonical slice for a prefix
///
/// Returns the effective prefix (dot modifiers re-base the part) and the
/// final slice. At most one dot modifier is allowed, and only on a
/// `g`-prefixed part.
pub fn apply_mods(
    name: &str,
    prefix: GenePrefix,
    mods: &[Mod],
    flank: i64,
) -> Result<(GenePrefix, Slice)> {
    let mut current_prefix = prefix;
    let mut current = Slice::canonical(prefix, flank);
    let mut dot_seen = false;

    for m in mods {
        match m {
            Mod::Slice(s) => {
                check_mod_slice(name, s)?;
                current = *s;
            }
            Mod::Dot(d) => {
                if prefix != GenePrefix::Gene {
                    return Err(MaterializeError::IllegalModifier {
                        gene: name.to_string(),
                        message: format!(
                            "'.{}' applies only to g-prefixed parts, not '{}'",
                            d,
                            prefix.to_char()
                        ),
                    });
                }
                if dot_seen {
                    return Err(MaterializeError::IllegalModifier {
                        gene: name.to_string(),
                        message: "more than one dot modifier".to_string(),
                    });
                }
                dot_seen = true;
                current_prefix = match d.as_str() {
                    "up" => GenePrefix::Upstream,
                    "down" => GenePrefix::Downstream,
                    "mrna" => GenePrefix::Mrna,
                    other => {
                        return Err(MaterializeError::IllegalModifier {
                            gene: name.to_string(),
                            message: format!("unknown dot modifier '.{}'", other),
                        })
                    }
                };
                current = Slice::canonical(current_prefix, flank);
            }
        }
    }

    Ok((current_prefix, current))
}
