//! dnaforge - DNA materialization for genetic construct assemblies
//!
//! Transforms a parsed assembly (a directional list of part-prefixed
//! expressions with per-part pragmas) into a flat, ordered list of
//! materialized DNA slices, each carrying its realized bases, genomic
//! provenance, orientation, approximation flags, and classification.
//! The output is the boundary consumed by primer design and the output
//! emitters.
//!
//! # Example
//!
//! ```
//! use dnaforge::core::{Assembly, Feature, GenePart, Genome, GenomeSet,
//!                      Part, Ppp, SequenceLibrary};
//! use dnaforge::expand::expand_assembly;
//! use dnaforge::materialize::Materializer;
//!
//! let mut genome = Genome::new("s288c");
//! genome.add_chromosome("chr1", vec![b'A'; 4000]);
//! genome.add_feature(Feature::new("ADH1", "chr1", 1000, 1500, true));
//! let mut genomes = GenomeSet::new();
//! genomes.insert(genome);
//! let library = SequenceLibrary::new();
//!
//! let mut assembly = Assembly::new("demo");
//! assembly.push(Ppp::new(Part::Gene(GenePart::new("gADH1"))));
//!
//! let mat = Materializer::new(&genomes, &library);
//! let slices = expand_assembly(&mat, &assembly).unwrap();
//! assert_eq!(slices[0].source_from, 1000);
//! ```

pub mod core;
pub mod expand;
pub mod materialize;

// Re-export commonly used types
pub use crate::core::{
    adjust_to_physical, apply_mods, one_to_zero, physical_to_relative, refine_breed, zero_to_one,
    Assembly, Breed, DnaSlice, Endpoint, Feature, GenePart, GenePrefix, Genome, GenomeSet,
    MaterializeError, Mod, Part, PartCandidate, Ppp, PragmaSet, RelPos, Result, SequenceLibrary,
    Slice, SliceType, SourcePos,
};
pub use crate::expand::{expand_assembly, recompute_dest_offsets};
pub use crate::materialize::{
    CandidateSource, ExternalPartResolver, HttpCandidateSource, LinkerValidator, Materializer,
};
