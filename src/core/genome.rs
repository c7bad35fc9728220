//! Reference genomes and the sequence library
//!
//! The materialization core treats genome loading as an external concern; it
//! consumes a [`GenomeSet`] of in-memory [`Genome`] handles exposing the
//! fixed collaborator contract: `flank`, `is_valid`, `get`, `dna`. Gene
//! lookup is case-insensitive; library keys are uppercase.

use crate::core::error::{MaterializeError, Result};
use crate::core::{DEFAULT_APPROX_MARGIN, DEFAULT_FLANK};
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;

/// A reference-genome feature record
///
/// `left`/`right` are 0-based inclusive genomic coordinates with
/// `left <= right` regardless of strand; `fwd` is the strand the feature is
/// annotated on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub gene: String,
    pub chr: String,
    pub left: i64,
    pub right: i64,
    pub fwd: bool,
}

impl Feature {
    pub fn new(gene: impl Into<String>, chr: impl Into<String>, left: i64, right: i64, fwd: bool) -> Self {
        Self {
            gene: gene.into(),
            chr: chr.into(),
            left,
            right,
            fwd,
        }
    }

    /// Feature length in bases
    pub fn len(&self) -> i64 {
        self.right - self.left + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }
}

/// An in-memory reference genome: a feature table plus chromosome buffers
#[derive(Debug, Clone)]
pub struct Genome {
    name: String,
    flank: i64,
    approx_margin: i64,
    features: HashMap<String, Feature>,
    chromosomes: HashMap<String, Vec<u8>>,
}

impl Genome {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flank: DEFAULT_FLANK,
            approx_margin: DEFAULT_APPROX_MARGIN,
            features: HashMap::new(),
            chromosomes: HashMap::new(),
        }
    }

    /// Override the default upstream/downstream window size
    pub fn with_flank(mut self, flank: i64) -> Self {
        self.flank = flank;
        self
    }

    /// Override the default approximation widening margin
    pub fn with_approx_margin(mut self, margin: i64) -> Self {
        self.approx_margin = margin;
        self
    }

    pub fn add_feature(&mut self, feature: Feature) {
        self.features.insert(feature.gene.to_uppercase(), feature);
    }

    pub fn add_chromosome(&mut self, chr: impl Into<String>, seq: Vec<u8>) {
        self.chromosomes.insert(chr.into(), seq);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default window size for upstream/downstream parts
    pub fn flank(&self) -> i64 {
        self.flank
    }

    /// Widening applied to approximate slice endpoints before projection
    pub fn approx_margin(&self) -> i64 {
        self.approx_margin
    }

    /// Whether the genome annotates a feature under this gene name
    pub fn is_valid(&self, gene: &str) -> bool {
        self.features.contains_key(&gene.to_uppercase())
    }

    /// Look up a feature by gene name (case-insensitive)
    pub fn get(&self, gene: &str) -> Option<&Feature> {
        self.features.get(&gene.to_uppercase())
    }

    /// Chromosome length in bases, if the chromosome is loaded
    pub fn chrom_len(&self, chr: &str) -> Option<i64> {
        self.chromosomes.get(chr).map(|s| s.len() as i64)
    }

    /// Fetch `[from..to]` (0-based inclusive) from a chromosome
    ///
    /// `tag` names the effective DNA source for diagnostics. Bounds must lie
    /// within the chromosome; callers clamp before fetching.
    pub fn dna(&self, tag: &str, chr: &str, from: i64, to: i64) -> Result<Vec<u8>> {
        debug!("fetching {}:{}..{} from '{}'", chr, from, to, tag);
        let seq = self
            .chromosomes
            .get(chr)
            .ok_or_else(|| MaterializeError::DnaFetch {
                chr: chr.to_string(),
                from,
                to,
                message: format!("chromosome not loaded in genome '{}'", self.name),
            })?;
        if from < 0 || to < from || to >= seq.len() as i64 {
            return Err(MaterializeError::DnaFetch {
                chr: chr.to_string(),
                from,
                to,
                message: format!("span outside chromosome of length {}", seq.len()),
            });
        }
        Ok(seq[from as usize..=to as usize].to_vec())
    }
}

/// The set of loaded reference genomes, keyed by name
#[derive(Debug, Clone, Default)]
pub struct GenomeSet {
    genomes: HashMap<String, Genome>,
}

impl GenomeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, genome: Genome) {
        self.genomes.insert(genome.name().to_string(), genome);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.genomes.contains_key(name)
    }

    /// Loaded genome names, sorted for stable diagnostics
    pub fn names(&self) -> Vec<&str> {
        self.genomes.keys().map(|s| s.as_str()).sorted().collect()
    }

    /// Look up a genome by name; a miss enumerates what is loaded
    pub fn get(&self, name: &str) -> Result<&Genome> {
        self.genomes
            .get(name)
            .ok_or_else(|| MaterializeError::MissingRefGenome {
                name: name.to_string(),
                available: self.names().iter().join(", "),
            })
    }
}

/// The in-process sequence library: uppercase gene name -> sequence
#[derive(Debug, Clone, Default)]
pub struct SequenceLibrary {
    entries: HashMap<String, Vec<u8>>,
}

impl SequenceLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, gene: impl Into<String>, seq: Vec<u8>) {
        self.entries.insert(gene.into().to_uppercase(), seq);
    }

    pub fn contains(&self, gene: &str) -> bool {
        self.entries.contains_key(&gene.to_uppercase())
    }

    pub fn get(&self, gene: &str) -> Option<&[u8]> {
        self.entries.get(&gene.to_uppercase()).map(|s| s.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_genome() -> Genome {
        let mut g = Genome::new("mini");
        g.add_chromosome("chr1", b"ACGTACGTACGT".to_vec());
        g.add_feature(Feature::new("ADH1", "chr1", 2, 7, true));
        g
    }

    #[test]
    fn test_feature_lookup_case_insensitive() {
        let g = test_genome();
        assert!(g.is_valid("ADH1"));
        assert!(g.is_valid("adh1"));
        assert!(!g.is_valid("ERG10"));
        assert_eq!(g.get("Adh1").map(|f| f.left), Some(2));
    }

    #[test]
    fn test_dna_fetch_in_bounds() {
        let g = test_genome();
        assert_eq!(g.dna("mini", "chr1", 2, 7).unwrap(), b"GTACGT");
        assert_eq!(g.dna("mini", "chr1", 0, 0).unwrap(), b"A");
    }

    #[test]
    fn test_dna_fetch_out_of_bounds() {
        let g = test_genome();
        assert!(g.dna("mini", "chr1", -1, 4).is_err());
        assert!(g.dna("mini", "chr1", 4, 12).is_err());
        assert!(g.dna("mini", "chr1", 5, 4).is_err());
        assert!(g.dna("mini", "chr2", 0, 1).is_err());
    }

    #[test]
    fn test_genome_set_miss_lists_names() {
        let mut set = GenomeSet::new();
        set.insert(Genome::new("s288c"));
        set.insert(Genome::new("cenpk"));
        let err = set.get("bz2021").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bz2021"));
        assert!(msg.contains("cenpk, s288c"));
    }

    #[test]
    fn test_library_uppercase_keys() {
        let mut lib = SequenceLibrary::new();
        lib.insert("MyGene", b"AAAA".to_vec());
        assert!(lib.contains("MYGENE"));
        assert!(lib.contains("mygene"));
        assert_eq!(lib.get("myGENE"), Some(b"AAAA".as_slice()));
    }

    #[test]
    fn test_feature_len() {
        let f = Feature::new("ADH1", "chr1", 1000, 1500, true);
        assert_eq!(f.len(), 501);
    }
}
