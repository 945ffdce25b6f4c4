use std::collections::HashSet;

use lineage_types::Fingerprint;

/// Set of fingerprints that preserves first-insertion order.
///
/// Iteration order decides which branch child continues a lineage, so the
/// order must be strict first-seen and stable across rebuilds of the same
/// record sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedSet {
    seen: HashSet<Fingerprint>,
    order: Vec<Fingerprint>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, keeping the position of an already-present one.
    /// Returns whether the value was newly inserted.
    pub fn insert(&mut self, value: Fingerprint) -> bool {
        if self.seen.insert(value.clone()) {
            self.order.push(value);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, value: &Fingerprint) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Values in first-insertion order.
    pub fn as_slice(&self) -> &[Fingerprint] {
        &self.order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fingerprint> {
        self.order.iter()
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a Fingerprint;
    type IntoIter = std::slice::Iter<'a, Fingerprint>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
