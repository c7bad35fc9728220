//! Materialized DNA slices
//!
//! The output record of the materialization pass. A slice carries its
//! realized bases, source provenance, orientation, approximation flags,
//! classification, and the pragmas of the part it came from. Destination
//! offsets are zeroed at construction and assigned by the expander's
//! offset-recomputation pass.

use crate::core::breed::Breed;
use crate::core::dna::revcomp;
use crate::core::pragma::PragmaSet;
use serde::{Deserialize, Serialize};

/// Coarse slice category for downstream passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceType {
    Regular,
    Marker,
    Linker,
    Inline,
    Fusion,
}

impl std::fmt::Display for SliceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SliceType::Regular => "regular",
            SliceType::Marker => "marker",
            SliceType::Linker => "linker",
            SliceType::Inline => "inline",
            SliceType::Fusion => "fusion",
        };
        write!(f, "{}", name)
    }
}

/// A prior part that could substitute for a slice, as reported by the
/// external-candidate proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartCandidate {
    pub id: String,
    pub name: String,
}

/// One materialized, oriented piece of the output construct
#[derive(Debug, Clone, PartialEq)]
pub struct DnaSlice {
    /// Realized bases; empty only for fusion junctions
    pub dna: Vec<u8>,
    /// Source chromosome, or `"library"` / `"inline"` for synthetic sources
    pub source_chr: String,
    /// Source span, 0-based inclusive, `source_from <= source_to` regardless
    /// of orientation (a fusion slice has `source_to = source_from - 1`)
    pub source_from: i64,
    pub source_to: i64,
    /// Strand of the source feature, not of the emitted slice
    pub source_fwd: bool,
    /// Approximation flags in emitted orientation: `source_from_approx`
    /// describes the 5' end of `dna` as emitted
    pub source_from_approx: bool,
    pub source_to_approx: bool,
    /// Destination offsets in the output construct; assigned by the
    /// expander's offset pass
    pub dest_from: i64,
    pub dest_to: i64,
    /// Orientation in the output assembly
    pub dest_fwd: bool,
    /// Sequence to amplify from; absent for fusion junctions
    pub template: Option<Vec<u8>>,
    /// Whether this slice must be produced by PCR
    pub amplified: bool,
    pub slice_type: SliceType,
    pub breed: Breed,
    /// Human-readable label, `!`-prefixed when reversed
    pub description: String,
    /// Pragmas retained verbatim from the originating part
    pub pragmas: PragmaSet,
    /// Effective source name chosen by the source resolver
    pub dna_source: String,
    /// Prior parts that could substitute for this slice
    pub external_candidates: Vec<PartCandidate>,
}

impl Default for DnaSlice {
    fn default() -> Self {
        Self {
            dna: Vec::new(),
            source_chr: String::new(),
            source_from: 0,
            source_to: -1,
            source_fwd: true,
            source_from_approx: false,
            source_to_approx: false,
            dest_from: 0,
            dest_to: -1,
            dest_fwd: true,
            template: None,
            amplified: false,
            slice_type: SliceType::Regular,
            breed: Breed::X,
            description: String::new(),
            pragmas: PragmaSet::new(),
            dna_source: String::new(),
            external_candidates: Vec::new(),
        }
    }
}

impl DnaSlice {
    /// Length of the realized sequence in bases
    pub fn len(&self) -> usize {
        self.dna.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dna.is_empty()
    }

    pub fn is_fusion(&self) -> bool {
        self.slice_type == SliceType::Fusion
    }

    /// Flip the slice into the opposite construct orientation
    ///
    /// Reverse-complements the bases and template, swaps the approximation
    /// flags so they keep describing the emitted 5'/3' ends, toggles
    /// `dest_fwd`, and toggles the `!` description prefix. Source provenance
    /// (`source_chr`, ordered span, feature strand) is unchanged. An
    /// involution: reversing twice restores the slice.
    pub fn reversed(mut self) -> Self {
        self.dna = revcomp(&self.dna);
        self.template = self.template.as_deref().map(revcomp);
        std::mem::swap(&mut self.source_from_approx, &mut self.source_to_approx);
        self.dest_fwd = !self.dest_fwd;
        self.description = match self.description.strip_prefix('!') {
            Some(rest) => rest.to_string(),
            None => format!("!{}", self.description),
        };
        self
    }
}
