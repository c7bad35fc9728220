//! External-part materializer
//!
//! Parts referenced by identifier (`@R12345`) resolve through an external
//! collaborator that returns a ready-made slice. The returned slice keeps
//! its sequence and provenance but takes its pragmas and display name from
//! the carrying part.

use crate::core::dnaslice::DnaSlice;
use crate::core::error::{MaterializeError, Result};
use crate::core::genome::SequenceLibrary;
use crate::core::part::Ppp;
use crate::core::pragma::keys;
use crate::materialize::Materializer;

/// Resolver for parts referenced by external identifier
pub trait ExternalPartResolver {
    /// Produce a materialized slice for `part_id`
    ///
    /// The resolver receives the sequence library and the full carrying
    /// part, including its direction and pragmas.
    fn fetch_sequence(
        &self,
        library: &SequenceLibrary,
        ppp: &Ppp,
        part_id: &str,
    ) -> Result<DnaSlice>;
}

pub fn materialize(
    mat: &Materializer<'_>,
    ppp: &Ppp,
    part_id: &str,
    dna_source: String,
) -> Result<DnaSlice> {
    let resolver = mat
        .resolver
        .ok_or_else(|| MaterializeError::ExternalPart {
            part_id: part_id.to_string(),
            message: "no external-part resolver configured".to_string(),
        })?;

    let mut slice = resolver.fetch_sequence(mat.library, ppp, part_id)?;
    slice.pragmas = ppp.pragmas.clone();
    if let Some(name) = ppp.pragmas.get_one(keys::NAME) {
        slice.description = name.to_string();
    }
    slice.dna_source = dna_source;
    Ok(slice)
}
