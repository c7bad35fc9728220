//! Core data model for DNA materialization
//!
//! This module contains the coordinate arithmetic, slice algebra, part
//! classifiers, genome/library handles, and the materialized-slice record
//! that the expander emits.

pub mod breed;
pub mod coords;
pub mod dna;
pub mod dnaslice;
pub mod error;
pub mod genome;
pub mod part;
pub mod pragma;
pub mod slice;

/// Default upstream/downstream window size, overridable per genome
pub const DEFAULT_FLANK: i64 = 500;

/// Default widening applied to approximate slice endpoints, overridable per
/// genome
pub const DEFAULT_APPROX_MARGIN: i64 = 100;

/// Reference genome used when neither the part nor the assembly names one
pub const DEFAULT_REF_GENOME: &str = "s288c";

/// Library gene placed for `###` marker parts
pub const MARKER_GENE: &str = "URA3";

pub use breed::{near, refine_breed, Breed, GenePrefix};
pub use coords::{
    adjust_to_physical, one_to_zero, physical_to_relative, zero_to_one, Endpoint, RelPos,
};
pub use dnaslice::{DnaSlice, PartCandidate, SliceType};
pub use error::{MaterializeError, Result};
pub use genome::{Feature, Genome, GenomeSet, SequenceLibrary};
pub use part::{Assembly, GenePart, Part, Ppp, SourcePos};
pub use pragma::PragmaSet;
pub use slice::{apply_mods, check_mod_slice, Mod, Slice};
