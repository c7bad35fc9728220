//! Inline-literal materializer
//!
//! `/GATCGA/` parts carry their own bases. The slice is synthetic: nothing
//! is amplified and the provenance chromosome is the `"inline"` sentinel.

use crate::core::breed::Breed;
use crate::core::dnaslice::{DnaSlice, SliceType};
use crate::core::part::Ppp;

pub fn materialize(ppp: &Ppp, literal: &[u8], dna_source: String) -> DnaSlice {
    let slice = DnaSlice {
        dna: literal.to_vec(),
        source_chr: "inline".to_string(),
        source_from: 0,
        source_to: literal.len() as i64 - 1,
        template: Some(literal.to_vec()),
        amplified: false,
        slice_type: SliceType::Inline,
        breed: Breed::Inline,
        description: String::from_utf8_lossy(literal).into_owned(),
        pragmas: ppp.pragmas.clone(),
        dna_source,
        ..Default::default()
    };

    if ppp.fwd {
        slice
    } else {
        slice.reversed()
    }
}
