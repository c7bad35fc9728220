//! Genomic-gene materializer
//!
//! The only slice kind produced by PCR off a reference genome. The pipeline
//! is: canonical slice for the prefix, fold user modifiers, widen
//! approximate endpoints by the genome margin, project both endpoints to
//! genomic coordinates, order the span physically, clamp to the chromosome,
//! fetch, then restore orientation. Two independent reverse complements may
//! apply: one if the feature sits on the crick strand (restoring the gene's
//! 5'->3' reading), one if the part itself is reversed in the construct.

use crate::core::breed::{refine_breed, GenePrefix};
use crate::core::coords::adjust_to_physical;
use crate::core::dna::revcomp_inplace;
use crate::core::dnaslice::{DnaSlice, SliceType};
use crate::core::error::{MaterializeError, Result};
use crate::core::genome::Genome;
use crate::core::part::{GenePart, Ppp};
use crate::core::slice::apply_mods;
use log::debug;

pub fn materialize(
    genome: &Genome,
    ppp: &Ppp,
    gene: &GenePart,
    prefix: GenePrefix,
    bare: &str,
    dna_source: String,
) -> Result<DnaSlice> {
    let feat = genome
        .get(bare)
        .ok_or_else(|| MaterializeError::UnknownGene {
            gene: bare.to_string(),
            genome: genome.name().to_string(),
        })?;

    let (eff_prefix, final_slice) = apply_mods(&gene.name, prefix, &gene.mods, genome.flank())?;
    let approx_slice = final_slice.widen_approx(genome.approx_margin());

    let left_phys = adjust_to_physical(feat, approx_slice.left);
    let right_phys = adjust_to_physical(feat, approx_slice.right);
    debug!(
        "'{}' slice {} projects to {}:{}..{}",
        gene.name, final_slice, feat.chr, left_phys, right_phys
    );

    // Physical ordering follows the feature strand; a flipped span means the
    // slice asked for negatively lengthed DNA.
    let (lo, hi) = if feat.fwd {
        (left_phys, right_phys)
    } else {
        (right_phys, left_phys)
    };
    if lo > hi {
        return Err(MaterializeError::NegativeLength {
            gene: gene.name.clone(),
            left: left_phys,
            right: right_phys,
            strand: if feat.fwd { "watson" } else { "crick" },
        });
    }

    let chrom_len = genome
        .chrom_len(&feat.chr)
        .ok_or_else(|| MaterializeError::DnaFetch {
            chr: feat.chr.clone(),
            from: lo,
            to: hi,
            message: format!("chromosome not loaded in genome '{}'", genome.name()),
        })?;
    let lo = lo.max(0);
    let hi = hi.min(chrom_len - 1);

    let fetch_tag = if dna_source.is_empty() {
        genome.name()
    } else {
        dna_source.as_str()
    };
    let mut dna = genome.dna(fetch_tag, &feat.chr, lo, hi)?;
    if !feat.fwd {
        revcomp_inplace(&mut dna);
    }

    // Refinement reads the unwidened slice; the margin is a fetch concern.
    let breed = refine_breed(eff_prefix.initial_breed(), &final_slice);

    let slice = DnaSlice {
        dna: dna.clone(),
        source_chr: feat.chr.clone(),
        source_from: lo,
        source_to: hi,
        source_fwd: feat.fwd,
        source_from_approx: final_slice.l_approx,
        source_to_approx: final_slice.r_approx,
        template: Some(dna),
        amplified: true,
        slice_type: SliceType::Regular,
        breed,
        description: gene.name.clone(),
        pragmas: ppp.pragmas.clone(),
        dna_source,
        ..Default::default()
    };

    Ok(if ppp.fwd { slice } else { slice.reversed() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::breed::Breed;
    use crate::core::coords::RelPos;
    use crate::core::dna::revcomp;
    use crate::core::genome::Feature;
    use crate::core::part::Part;
    use crate::core::slice::{Mod, Slice};
    use crate::core::DEFAULT_APPROX_MARGIN;

    /// chr1 cycles ACGT so expected windows are easy to spell out
    fn test_genome() -> Genome {
        let mut g = Genome::new("s288c");
        let chr1: Vec<u8> = b"ACGT".iter().copied().cycle().take(8000).collect();
        g.add_chromosome("chr1", chr1);
        g.add_feature(Feature::new("ADH1", "chr1", 1000, 1500, true));
        g.add_feature(Feature::new("ERG10", "chr1", 5000, 5600, false));
        g
    }

    fn run(genome: &Genome, name: &str, mods: Vec<Mod>, fwd: bool) -> Result<DnaSlice> {
        let gene = GenePart::new(name).with_mods(mods);
        let ppp = if fwd {
            Ppp::new(Part::Gene(gene.clone()))
        } else {
            Ppp::reversed(Part::Gene(gene.clone()))
        };
        let (prefix, bare) = GenePrefix::split(name).unwrap();
        materialize(genome, &ppp, &gene, prefix, bare, "s288c".to_string())
    }

    #[test]
    fn test_whole_gene_forward() {
        let genome = test_genome();
        let slice = run(&genome, "gADH1", vec![], true).unwrap();
        assert_eq!((slice.source_from, slice.source_to), (1000, 1500));
        assert!(slice.source_fwd);
        assert!(slice.dest_fwd);
        assert!(slice.amplified);
        assert_eq!(slice.breed, Breed::X);
        assert_eq!(slice.len(), 501);
        assert_eq!(slice.template, Some(slice.dna.clone()));
    }

    #[test]
    fn test_promoter_widens_approx_end() {
        let genome = test_genome();
        let slice = run(&genome, "pADH1", vec![], true).unwrap();
        // Canonical window is -500S..-1S; the approximate left end is
        // widened by the genome margin before projection.
        assert_eq!(slice.source_from, 500 - DEFAULT_APPROX_MARGIN);
        assert_eq!(slice.source_to, 999);
        assert!(slice.source_from_approx);
        assert!(!slice.source_to_approx);
        assert_eq!(slice.breed, Breed::Promoter);
    }

    #[test]
    fn test_crick_terminator_reversed() {
        let genome = test_genome();
        let slice = run(&genome, "tERG10", vec![], false).unwrap();
        // +1E anchors just downstream of the crick gene at 4999 and the
        // widened +600E end reaches down to 4400.
        assert_eq!((slice.source_from, slice.source_to), (4400, 4999));
        assert!(!slice.source_fwd);
        assert!(!slice.dest_fwd);
        assert!(slice.description.starts_with('!'));
        // Crick strand and part reversal cancel out
        let genomic = genome.dna("s288c", "chr1", 4400, 4999).unwrap();
        assert_eq!(slice.dna, genomic);
        // The approximate end is the emitted 5' end after reversal
        assert!(slice.source_from_approx);
        assert!(!slice.source_to_approx);
    }

    #[test]
    fn test_crick_gene_forward_is_revcomped() {
        let genome = test_genome();
        let slice = run(&genome, "gERG10", vec![], true).unwrap();
        assert_eq!((slice.source_from, slice.source_to), (5000, 5600));
        let genomic = genome.dna("s288c", "chr1", 5000, 5600).unwrap();
        assert_eq!(slice.dna, revcomp(&genomic));
    }

    #[test]
    fn test_user_slice_with_approx_right() {
        let genome = test_genome();
        let user = Slice::new(RelPos::five(-100), false, RelPos::three(50), true);
        let slice = run(&genome, "gADH1", vec![Mod::Slice(user)], true).unwrap();
        assert_eq!(slice.source_from, 900);
        assert_eq!(slice.source_to, 1550 + DEFAULT_APPROX_MARGIN);
        assert!(!slice.source_from_approx);
        assert!(slice.source_to_approx);
    }

    #[test]
    fn test_negative_length_detected() {
        let genome = test_genome();
        // Flipped cross-endpoint window: starts past the end, ends at the start
        let user = Slice::exact(RelPos::three(100), RelPos::five(1));
        let err = run(&genome, "gADH1", vec![Mod::Slice(user)], true).unwrap_err();
        assert!(matches!(err, MaterializeError::NegativeLength { .. }));
    }

    #[test]
    fn test_span_clamped_to_chromosome() {
        let mut genome = Genome::new("tiny");
        let chr: Vec<u8> = b"ACGT".iter().copied().cycle().take(1200).collect();
        genome.add_chromosome("chr1", chr);
        genome.add_feature(Feature::new("YFG1", "chr1", 200, 800, true));
        let slice = run(&genome, "pYFG1", vec![], true).unwrap();
        // -600S projects below the contig start and clamps to zero
        assert_eq!(slice.source_from, 0);
        assert_eq!(slice.source_to, 199);
        assert_eq!(slice.len() as i64, slice.source_to - slice.source_from + 1);
    }

    #[test]
    fn test_dot_mod_downstream_breed() {
        let genome = test_genome();
        let slice = run(&genome, "gADH1", vec![Mod::Dot("down".to_string())], true).unwrap();
        assert_eq!(slice.breed, Breed::Downstream);
        // Window starts just past the gene end
        assert_eq!(slice.source_from, 1501);
    }

    #[test]
    fn test_orf_breed_not_refined() {
        let genome = test_genome();
        let slice = run(&genome, "oADH1", vec![], true).unwrap();
        assert_eq!(slice.breed, Breed::Gs);
        assert_eq!((slice.source_from, slice.source_to), (1000, 1500));
    }
}
