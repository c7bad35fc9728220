//! Library-gene materializer
//!
//! Genes resolved from the in-process sequence library instead of a
//! reference genome. A library entry is bare sequence with no surrounding
//! context, so approximate bounds are rejected and the slice window is
//! projected directly onto the entry: 5'-anchored offsets index from the
//! front, 3'-anchored offsets from `length + 1 + offset`.

use crate::core::breed::{Breed, GenePrefix};
use crate::core::coords::{Endpoint, RelPos};
use crate::core::dnaslice::{DnaSlice, SliceType};
use crate::core::error::{MaterializeError, Result};
use crate::core::part::{GenePart, Ppp};
use crate::core::slice::apply_mods;
use log::debug;

/// Project a relative position onto a library entry as a 1-based index
fn project(len: i64, pos: RelPos) -> i64 {
    match pos.relative_to {
        Endpoint::FivePrime => pos.offset,
        Endpoint::ThreePrime => len + 1 + pos.offset,
    }
}

pub fn materialize(
    seq: &[u8],
    flank: i64,
    ppp: &Ppp,
    gene: &GenePart,
    prefix: GenePrefix,
    dna_source: String,
) -> Result<DnaSlice> {
    let len = seq.len() as i64;

    let (_prefix, final_slice) = apply_mods(&gene.name, prefix, &gene.mods, flank)?;
    if final_slice.is_approx() {
        return Err(MaterializeError::UnsupportedApprox {
            gene: gene.name.clone(),
        });
    }

    let x = project(len, final_slice.left);
    let y = project(len, final_slice.right);
    debug!("library window for '{}': {}..{} of {}", gene.name, x, y, len);
    if x < 1 || x > y || y > len {
        return Err(MaterializeError::InvalidSlice {
            gene: gene.name.clone(),
            message: format!("window {}..{} outside library entry of length {}", x, y, len),
        });
    }

    let dna = seq[(x - 1) as usize..=(y - 1) as usize].to_vec();
    let slice = DnaSlice {
        dna: dna.clone(),
        source_chr: "library".to_string(),
        source_from: x - 1,
        source_to: y - 1,
        template: Some(dna),
        amplified: false,
        slice_type: SliceType::Regular,
        breed: Breed::X,
        description: gene.name.clone(),
        pragmas: ppp.pragmas.clone(),
        dna_source,
        ..Default::default()
    };

    Ok(if ppp.fwd { slice } else { slice.reversed() })
}
