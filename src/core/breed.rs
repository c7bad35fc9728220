//! Gene-part classification
//!
//! Two classifiers live here. The part *prefix* (`g`, `p`, `t`, ...) picks
//! the canonical slice and an initial breed; after a genomic gene has been
//! sliced, an initial breed of [`Breed::X`] is refined from the final slice
//! geometry, so `gADH1[-400:-1]` labels as a promoter even though it was
//! written with the generic prefix.

use crate::core::coords::RelPos;
use crate::core::error::{MaterializeError, Result};
use crate::core::slice::Slice;

/// Recognized part-name prefix characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenePrefix {
    /// `g` - whole gene with default flanks trimmed
    Gene,
    /// `p` - promoter window
    Promoter,
    /// `t` - terminator window
    Terminator,
    /// `u` - upstream window
    Upstream,
    /// `d` - downstream window
    Downstream,
    /// `o` - open reading frame
    Orf,
    /// `f` - fusable ORF (stop codon trimmed)
    FusableOrf,
    /// `m` - mRNA (ORF plus short terminator)
    Mrna,
}

impl GenePrefix {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(GenePrefix::Gene),
            'p' => Some(GenePrefix::Promoter),
            't' => Some(GenePrefix::Terminator),
            'u' => Some(GenePrefix::Upstream),
            'd' => Some(GenePrefix::Downstream),
            'o' => Some(GenePrefix::Orf),
            'f' => Some(GenePrefix::FusableOrf),
            'm' => Some(GenePrefix::Mrna),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            GenePrefix::Gene => 'g',
            GenePrefix::Promoter => 'p',
            GenePrefix::Terminator => 't',
            GenePrefix::Upstream => 'u',
            GenePrefix::Downstream => 'd',
            GenePrefix::Orf => 'o',
            GenePrefix::FusableOrf => 'f',
            GenePrefix::Mrna => 'm',
        }
    }

    /// Split a prefixed part name into its prefix and bare gene name
    ///
    /// # Examples
    /// ```
    /// use dnaforge::core::GenePrefix;
    ///
    /// let (prefix, gene) = GenePrefix::split("gADH1").unwrap();
    /// assert_eq!(prefix, GenePrefix::Gene);
    /// assert_eq!(gene, "ADH1");
    /// assert!(GenePrefix::split("xADH1").is_err());
    /// ```
    pub fn split(name: &str) -> Result<(Self, &str)> {
        let first = name
            .chars()
            .next()
            .and_then(Self::from_char)
            .ok_or_else(|| MaterializeError::UnknownPrefix {
                name: name.to_string(),
            })?;
        Ok((first, &name[1..]))
    }

    /// Breed assigned before any geometry is known
    pub fn initial_breed(&self) -> Breed {
        match self {
            GenePrefix::Gene => Breed::X,
            GenePrefix::Promoter => Breed::Promoter,
            GenePrefix::Terminator => Breed::Terminator,
            GenePrefix::Upstream => Breed::Upstream,
            GenePrefix::Downstream => Breed::Downstream,
            GenePrefix::Orf => Breed::Gs,
            GenePrefix::FusableOrf => Breed::FusableOrf,
            GenePrefix::Mrna => Breed::Gst,
        }
    }
}

/// Refined classification of a part's biological role
///
/// Orthogonal to `SliceType`: slice types are the coarse category downstream
/// passes dispatch on, breeds drive candidate lookup and labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breed {
    Promoter,
    Terminator,
    Upstream,
    Downstream,
    FusableOrf,
    /// ORF with no terminator
    Gs,
    /// Unclassified gene slice
    X,
    /// ORF with a short terminator tail
    Gst,
    Marker,
    Inline,
    /// Synthetic sentinel (fusion junctions)
    Virtual,
    Linker,
}

impl Breed {
    /// Single-letter wire code used by the external-candidate proxy
    pub fn code(&self) -> char {
        match self {
            Breed::Promoter => 'P',
            Breed::Terminator => 'T',
            Breed::Upstream => 'U',
            Breed::Downstream => 'D',
            Breed::FusableOrf => 'F',
            Breed::Gs => 'G',
            Breed::X => 'X',
            Breed::Gst => 'S',
            Breed::Marker => 'M',
            Breed::Inline => 'I',
            Breed::Virtual => 'V',
            Breed::Linker => 'L',
        }
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Breed::Promoter => "promoter",
            Breed::Terminator => "terminator",
            Breed::Upstream => "upstream",
            Breed::Downstream => "downstream",
            Breed::FusableOrf => "fusable-orf",
            Breed::Gs => "orf",
            Breed::X => "gene",
            Breed::Gst => "orf+term",
            Breed::Marker => "marker",
            Breed::Inline => "inline",
            Breed::Virtual => "virtual",
            Breed::Linker => "linker",
        };
        write!(f, "{}", name)
    }
}

/// Whether two relative positions share an anchor and sit within `tol` bases
pub fn near(a: RelPos, b: RelPos, tol: i64) -> bool {
    a.relative_to == b.relative_to && (a.offset - b.offset).abs() < tol
}

/// Refine an `X` breed from the final slice geometry
///
/// Non-`X` initial breeds pass through untouched; the prefix already said
/// what the part is. The decision is deterministic in the slice alone.
pub fn refine_breed(initial: Breed, final_slice: &Slice) -> Breed {
    if initial != Breed::X {
        return initial;
    }
    let left = final_slice.left;
    let right = final_slice.right;
    if near(left, RelPos::three(1), 1) && near(right, RelPos::three(150), 100) {
        Breed::Terminator
    } else if near(left, RelPos::five(-300), 400) && near(right, RelPos::five(-1), 40) {
        Breed::Promoter
    } else if left == RelPos::five(1) && near(right, RelPos::three(150), 100) {
        Breed::Gst
    } else {
        Breed::X
    }
}
