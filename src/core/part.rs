//! Assembly part descriptors
//!
//! The input unit of the expander is a [`Ppp`]: a part, a direction flag,
//! and its pragma collection. An [`Assembly`] is a directional list of PPPs
//! together with assembly-level pragmas.

use crate::core::dnaslice::DnaSlice;
use crate::core::pragma::PragmaSet;
use crate::core::slice::Mod;

/// A position in the source text, carried by propagated parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourcePos {
    pub line: u32,
    pub col: u32,
}

impl SourcePos {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl std::fmt::Display for SourcePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, col {}", self.line, self.col)
    }
}

/// A gene reference part: prefixed name, slice modifiers, optional linker
#[derive(Debug, Clone, PartialEq)]
pub struct GenePart {
    /// Prefixed gene name as written, e.g. `gADH1` or `pERG10`
    pub name: String,
    /// Slice and dot modifiers in source order
    pub mods: Vec<Mod>,
    /// Cloning linker attached to the part, checked externally
    pub linker: Option<String>,
}

impl GenePart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mods: Vec::new(),
            linker: None,
        }
    }

    pub fn with_mods(mut self, mods: Vec<Mod>) -> Self {
        self.mods = mods;
        self
    }

    pub fn with_linker(mut self, linker: impl Into<String>) -> Self {
        self.linker = Some(linker.into());
        self
    }
}

/// One part of an assembly, before materialization
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Gene reference with optional modifiers (`gADH1[-500:-1]`)
    Gene(GenePart),
    /// Selection marker placeholder (`###`)
    Marker,
    /// Inline literal DNA (`/GATCGA/`)
    InlineDna(Vec<u8>),
    /// Inline protein sequence; must be expanded before this stage
    InlineProtein(String),
    /// External part reference by identifier
    ExternalId(String),
    /// Nested multi-part group
    Multi(Vec<Ppp>),
    /// Heterology block; must be resolved before this stage
    HeterologyBlock,
    /// Explicit fusion junction between neighbors (`::`)
    FusionMarker,
    /// Parse error captured upstream, surfaced during expansion
    Error { message: String, pos: SourcePos },
    /// A slice materialized by an earlier pass; skipped here
    Expanded(Box<DnaSlice>),
}

/// Positioned part with pragmas: the expander's input unit
#[derive(Debug, Clone, PartialEq)]
pub struct Ppp {
    pub part: Part,
    /// Orientation of the part in the construct
    pub fwd: bool,
    pub pragmas: PragmaSet,
}

impl Ppp {
    pub fn new(part: Part) -> Self {
        Self {
            part,
            fwd: true,
            pragmas: PragmaSet::new(),
        }
    }

    pub fn reversed(part: Part) -> Self {
        Self {
            part,
            fwd: false,
            pragmas: PragmaSet::new(),
        }
    }

    pub fn with_pragmas(mut self, pragmas: PragmaSet) -> Self {
        self.pragmas = pragmas;
        self
    }
}

/// An ordered, directional list of parts describing one construct
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub name: String,
    pub parts: Vec<Ppp>,
    pub pragmas: PragmaSet,
}

impl Assembly {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
            pragmas: PragmaSet::new(),
        }
    }

    pub fn push(&mut self, ppp: Ppp) {
        self.parts.push(ppp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_pos_display() {
        assert_eq!(SourcePos::new(7, 3).to_string(), "line 7, col 3");
    }

    #[test]
    fn test_ppp_defaults_forward() {
        let ppp = Ppp::new(Part::Marker);
        assert!(ppp.fwd);
        assert!(ppp.pragmas.is_empty());
        assert!(!Ppp::reversed(Part::Marker).fwd);
    }

    #[test]
    fn test_assembly_push() {
        let mut asm = Assembly::new("demo");
        asm.push(Ppp::new(Part::Gene(GenePart::new("gADH1"))));
        asm.push(Ppp::new(Part::Marker));
        assert_eq!(asm.parts.len(), 2);
    }
}
