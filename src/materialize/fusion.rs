//! Fusion-junction sentinel
//!
//! A fusion junction tells downstream primer design that two neighbors are
//! to be fused seamlessly. It contributes no bases: the slice is empty,
//! carries no template, and its destination span does not advance the
//! offset cursor.

use crate::core::breed::Breed;
use crate::core::dnaslice::{DnaSlice, SliceType};

pub fn fusion_slice() -> DnaSlice {
    DnaSlice {
        slice_type: SliceType::Fusion,
        breed: Breed::Virtual,
        description: "::".to_string(),
        ..Default::default()
    }
}
