//! Assembly expansion
//!
//! Walks an assembly's directional part list in order, materializing each
//! part into a DNA slice, injecting fusion junctions where a part carries
//! the `fuse` pragma, and recursing through nested multi-parts. After the
//! full list is produced, a destination-offset pass assigns each slice the
//! cumulative span of everything before it.
//!
//! Expansion is single-threaded and deterministic: output order is exactly
//! the pre-order traversal of the part list, with fusion slices following
//! their originating part. The first fatal condition aborts the assembly.

use crate::core::dnaslice::DnaSlice;
use crate::core::error::{MaterializeError, Result};
use crate::core::part::{Assembly, Part, Ppp};
use crate::core::pragma::{keys, PragmaSet};
use crate::materialize::{external, fusion, inline, marker, Materializer};
use log::{debug, info};

/// Expand an assembly into its ordered list of DNA slices
pub fn expand_assembly(mat: &Materializer<'_>, assembly: &Assembly) -> Result<Vec<DnaSlice>> {
    debug!(
        "expanding assembly '{}' ({} part(s))",
        assembly.name,
        assembly.parts.len()
    );
    let mut out = Vec::with_capacity(assembly.parts.len());
    for ppp in &assembly.parts {
        expand_ppp(mat, ppp, &assembly.pragmas, &mut out)?;
    }
    recompute_dest_offsets(&mut out);
    info!(
        "assembly '{}': {} slice(s), {} bp",
        assembly.name,
        out.len(),
        out.iter().map(DnaSlice::len).sum::<usize>()
    );
    Ok(out)
}

fn expand_ppp(
    mat: &Materializer<'_>,
    ppp: &Ppp,
    assembly_pragmas: &PragmaSet,
    out: &mut Vec<DnaSlice>,
) -> Result<()> {
    let emitted = match &ppp.part {
        Part::Gene(gene) => {
            let dna_source = mat.dna_source(ppp, assembly_pragmas);
            out.push(mat.gene_part(ppp, gene, assembly_pragmas, dna_source)?);
            true
        }
        Part::Marker => {
            let dna_source = mat.dna_source(ppp, assembly_pragmas);
            out.push(marker::materialize(mat.library, ppp, dna_source)?);
            true
        }
        Part::InlineDna(literal) => {
            let dna_source = mat.dna_source(ppp, assembly_pragmas);
            out.push(inline::materialize(ppp, literal, dna_source));
            true
        }
        Part::ExternalId(part_id) => {
            let dna_source = mat.dna_source(ppp, assembly_pragmas);
            out.push(external::materialize(mat, ppp, part_id, dna_source)?);
            true
        }
        Part::FusionMarker => {
            out.push(fusion::fusion_slice());
            true
        }
        Part::Multi(children) => {
            for child in normalize_multi(ppp, children) {
                expand_ppp(mat, &child, assembly_pragmas, out)?;
            }
            true
        }
        // Already materialized by an earlier pass
        Part::Expanded(_) => false,
        Part::InlineProtein(_) => {
            return Err(MaterializeError::UnexpandedSpecial {
                what: "inline protein sequence".to_string(),
            })
        }
        Part::HeterologyBlock => {
            return Err(MaterializeError::UnexpandedSpecial {
                what: "heterology block".to_string(),
            })
        }
        Part::Error { message, pos } => {
            return Err(MaterializeError::Parse {
                message: message.clone(),
                pos: *pos,
            })
        }
    };

    if emitted && ppp.pragmas.contains(keys::FUSE) {
        out.push(fusion::fusion_slice());
    }
    Ok(())
}

/// Distribute a multi-part's direction and pragmas over its children
///
/// Current policy is the identity. The hook stays because the expected
/// future policy merges the parent direction (reversing a multi-part
/// reverses each child and their order) and pushes parent pragmas into
/// children that lack them.
fn normalize_multi(_parent: &Ppp, children: &[Ppp]) -> Vec<Ppp> {
    children.to_vec()
}

/// Assign destination offsets so slice `i` begins where slice `i-1` ended
///
/// Zero-length fusion slices get `dest_to = dest_from - 1` and do not
/// advance the cursor.
pub fn recompute_dest_offsets(slices: &mut [DnaSlice]) {
    let mut cursor = 0i64;
    for slice in slices {
        let len = slice.len() as i64;
        slice.dest_from = cursor;
        slice.dest_to = cursor + len - 1;
        cursor += len;
    }
}
