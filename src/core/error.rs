//! Error types for DNA materialization
//!
//! Every fatal condition the expander can hit is a variant here. Errors are
//! eager: the first one aborts the current assembly's expansion. The only
//! tolerated degradation is the external-candidate proxy, which never
//! surfaces through this type.

use crate::core::part::SourcePos;
use thiserror::Error;

/// Main error type for assembly materialization
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// Part name does not start with a recognized prefix character
    #[error("part '{name}' does not start with a recognized prefix (one of g p t u d o f m)")]
    UnknownPrefix { name: String },

    /// Neither the reference genome nor the sequence library knows the gene
    #[error("gene '{gene}' not found in reference genome '{genome}' or the sequence library")]
    UnknownGene { gene: String, genome: String },

    /// A pragma named a reference genome that is not loaded
    #[error("reference genome '{name}' is not loaded (available: {available})")]
    MissingRefGenome { name: String, available: String },

    /// Slice bounds are inconsistent or out of range
    #[error("invalid slice on '{gene}': {message}")]
    InvalidSlice { gene: String, message: String },

    /// Dot-modifier misuse: repeated, unknown, or on a non-gene prefix
    #[error("illegal modifier on '{gene}': {message}")]
    IllegalModifier { gene: String, message: String },

    /// Approximate slice bound on a library gene
    #[error("approximate bound on library gene '{gene}' is not supported: the library has no surrounding context")]
    UnsupportedApprox { gene: String },

    /// Post-projection bounds inconsistent with the feature strand
    #[error("negatively lengthed DNA for '{gene}': projected span {left}..{right} on the {strand} strand")]
    NegativeLength {
        gene: String,
        left: i64,
        right: i64,
        strand: &'static str,
    },

    /// Protein or heterology content reached the DNA stage
    #[error("{what} must be expanded away before DNA materialization")]
    UnexpandedSpecial { what: String },

    /// The sequence library lacks the marker gene
    #[error("sequence library has no '{gene}' entry for marker placement")]
    MissingMarker { gene: String },

    /// A parse error captured upstream, surfaced with its source location
    #[error("parse error at {pos}: {message}")]
    Parse { message: String, pos: SourcePos },

    /// The external-part resolver failed to produce a slice
    #[error("external part '{part_id}': {message}")]
    ExternalPart { part_id: String, message: String },

    /// Reference sequence access failed
    #[error("DNA fetch failed for {chr}:{from}..{to}: {message}")]
    DnaFetch {
        chr: String,
        from: i64,
        to: i64,
        message: String,
    },

    /// A linker attached to a gene part failed the well-formedness check
    #[error("invalid linker '{linker}' on '{gene}': {message}")]
    Linker {
        gene: String,
        linker: String,
        message: String,
    },
}

/// Result type alias for materialization operations
pub type Result<T> = std::result::Result<T, MaterializeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_length_strand_wording() {
        let err = MaterializeError::NegativeLength {
            gene: "gADH1".to_string(),
            left: 1500,
            right: 1000,
            strand: "watson",
        };
        let msg = err.to_string();
        assert!(msg.contains("negatively lengthed"));
        assert!(msg.contains("watson"));
    }

    #[test]
    fn test_parse_error_carries_location() {
        let err = MaterializeError::Parse {
            message: "unterminated inline sequence".to_string(),
            pos: SourcePos::new(3, 14),
        };
        assert_eq!(
            err.to_string(),
            "parse error at line 3, col 14: unterminated inline sequence"
        );
    }
}
