//! Pragma collections
//!
//! A pragma is a `key -> values` directive attached to a part or a whole
//! assembly. The materialization core only interprets a small set of keys
//! (`refgenome`, `dnasrc`, `name`, `uri`, `fuse`); everything else passes
//! through unchanged for downstream passes.

/// Pragma keys interpreted by this crate
pub mod keys {
    /// Selects the reference genome for a part or assembly
    pub const REF_GENOME: &str = "refgenome";
    /// Overrides the effective DNA source name
    pub const DNA_SRC: &str = "dnasrc";
    /// Names an external part's slice
    pub const NAME: &str = "name";
    /// External reference URI, passed through
    pub const URI: &str = "uri";
    /// Requests a fusion junction after the carrying part
    pub const FUSE: &str = "fuse";
}

/// An insertion-ordered key -> values multimap
///
/// Key order is preserved so emitted slices report pragmas in the order the
/// source declared them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PragmaSet {
    entries: Vec<(String, Vec<String>)>,
}

impl PragmaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under a key, creating the key on first use
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Add a bare flag pragma (a key with no value)
    pub fn insert_flag(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.contains(&key) {
            self.entries.push((key, vec![]));
        }
    }

    /// First value recorded under a key, if any
    pub fn get_one(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, values)| values.first())
            .map(|s| s.as_str())
    }

    /// All values recorded under a key
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the key is present at all (with or without values)
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate keys with their value lists in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PragmaSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
