//! Marker part materializer
//!
//! `###` parts place the selection marker. The marker sequence comes from
//! the sequence library under the fixed gene name; a library without it is
//! a configuration error and fatal.

use crate::core::breed::Breed;
use crate::core::dnaslice::{DnaSlice, SliceType};
use crate::core::error::{MaterializeError, Result};
use crate::core::genome::SequenceLibrary;
use crate::core::part::Ppp;
use crate::core::MARKER_GENE;

pub fn materialize(library: &SequenceLibrary, ppp: &Ppp, dna_source: String) -> Result<DnaSlice> {
    let seq = library
        .get(MARKER_GENE)
        .ok_or_else(|| MaterializeError::MissingMarker {
            gene: MARKER_GENE.to_string(),
        })?;

    let slice = DnaSlice {
        dna: seq.to_vec(),
        source_chr: "library".to_string(),
        source_from: 0,
        source_to: seq.len() as i64 - 1,
        template: Some(seq.to_vec()),
        amplified: false,
        slice_type: SliceType::Marker,
        breed: Breed::Marker,
        description: format!("{} marker", MARKER_GENE),
        pragmas: ppp.pragmas.clone(),
        dna_source,
        ..Default::default()
    };

    Ok(if ppp.fwd { slice } else { slice.reversed() })
}
