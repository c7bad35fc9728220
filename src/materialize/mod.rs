//! Part materializers
//!
//! One module per part kind, each producing a single [`DnaSlice`]. The
//! [`Materializer`] bundles the read-only inputs every materializer
//! consults: the loaded reference genomes, the sequence library, and the
//! optional external collaborators (part resolver, candidate proxy, linker
//! check).

pub mod candidates;
pub mod external;
pub mod fusion;
pub mod genomic;
pub mod inline;
pub mod library;
pub mod marker;

pub use candidates::{CandidateSource, HttpCandidateSource};
pub use external::ExternalPartResolver;

use crate::core::breed::{Breed, GenePrefix};
use crate::core::dnaslice::DnaSlice;
use crate::core::error::{MaterializeError, Result};
use crate::core::genome::{Genome, GenomeSet, SequenceLibrary};
use crate::core::part::{GenePart, Ppp};
use crate::core::pragma::{keys, PragmaSet};
use crate::core::DEFAULT_REF_GENOME;
use log::debug;

/// External linker well-formedness check
///
/// Linker selection is a cloning concern outside this crate; gene parts
/// that carry a linker are only checked against this collaborator.
pub trait LinkerValidator {
    fn check(&self, linker: &str) -> std::result::Result<(), String>;
}

/// Read-only environment shared by all materializers
pub struct Materializer<'a> {
    pub(crate) genomes: &'a GenomeSet,
    pub(crate) library: &'a SequenceLibrary,
    pub(crate) resolver: Option<&'a dyn ExternalPartResolver>,
    pub(crate) candidates: Option<&'a dyn CandidateSource>,
    pub(crate) linkers: Option<&'a dyn LinkerValidator>,
    default_genome: String,
}

impl<'a> Materializer<'a> {
    pub fn new(genomes: &'a GenomeSet, library: &'a SequenceLibrary) -> Self {
        Self {
            genomes,
            library,
            resolver: None,
            candidates: None,
            linkers: None,
            default_genome: DEFAULT_REF_GENOME.to_string(),
        }
    }

    pub fn with_resolver(mut self, resolver: &'a dyn ExternalPartResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_candidate_source(mut self, source: &'a dyn CandidateSource) -> Self {
        self.candidates = Some(source);
        self
    }

    pub fn with_linker_validator(mut self, validator: &'a dyn LinkerValidator) -> Self {
        self.linkers = Some(validator);
        self
    }

    pub fn with_default_genome(mut self, name: impl Into<String>) -> Self {
        self.default_genome = name.into();
        self
    }

    /// Resolve the active reference genome for a part
    ///
    /// Part pragma wins over assembly pragma, which wins over the crate
    /// default. A name with no loaded genome is fatal.
    pub fn ref_genome(&self, ppp: &Ppp, assembly_pragmas: &PragmaSet) -> Result<&'a Genome> {
        let name = ppp
            .pragmas
            .get_one(keys::REF_GENOME)
            .or_else(|| assembly_pragmas.get_one(keys::REF_GENOME))
            .unwrap_or(&self.default_genome);
        self.genomes.get(name)
    }

    /// Effective DNA source name recorded on emitted slices
    pub fn dna_source(&self, ppp: &Ppp, assembly_pragmas: &PragmaSet) -> String {
        ppp.pragmas
            .get_one(keys::DNA_SRC)
            .or_else(|| ppp.pragmas.get_one(keys::REF_GENOME))
            .or_else(|| assembly_pragmas.get_one(keys::REF_GENOME))
            .unwrap_or("")
            .to_string()
    }

    /// Materialize a gene-reference part
    ///
    /// Strips the prefix, dispatches to the reference genome or the
    /// sequence library, and attaches substitution candidates for
    /// upstream/downstream slices when a proxy is configured.
    pub fn gene_part(
        &self,
        ppp: &Ppp,
        gene: &GenePart,
        assembly_pragmas: &PragmaSet,
        dna_source: String,
    ) -> Result<DnaSlice> {
        if let (Some(linker), Some(validator)) = (&gene.linker, self.linkers) {
            validator
                .check(linker)
                .map_err(|message| MaterializeError::Linker {
                    gene: gene.name.clone(),
                    linker: linker.clone(),
                    message,
                })?;
        }

        let genome = self.ref_genome(ppp, assembly_pragmas)?;
        let (prefix, bare) = GenePrefix::split(&gene.name)?;
        debug!(
            "materializing '{}' against genome '{}'",
            gene.name,
            genome.name()
        );

        let mut slice = if genome.is_valid(bare) {
            genomic::materialize(genome, ppp, gene, prefix, bare, dna_source)?
        } else if let Some(seq) = self.library.get(bare) {
            library::materialize(seq, genome.flank(), ppp, gene, prefix, dna_source)?
        } else {
            return Err(MaterializeError::UnknownGene {
                gene: bare.to_string(),
                genome: genome.name().to_string(),
            });
        };

        if let Some(source) = self.candidates {
            if matches!(slice.breed, Breed::Upstream | Breed::Downstream) {
                let tag = if slice.breed == Breed::Upstream { "US" } else { "DS" };
                let insert_name = format!("{}_{}", tag, bare.to_uppercase());
                slice.external_candidates = source.fetch_candidates(&insert_name, slice.breed);
            }
        }

        Ok(slice)
    }
}
