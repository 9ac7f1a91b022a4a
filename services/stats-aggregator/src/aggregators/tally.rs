//! Insertion-ordered frequency table

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

/// Frequency table that remembers the order in which keys were first seen.
///
/// [`Tally::most_common`] returns the first-seen key among those with the
/// highest count, independent of hash iteration order.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    /// Counts keyed in first-seen order
    counts: IndexMap<K, usize, FxBuildHasher>,
}

impl<K: Eq + Hash> Tally<K> {
    /// Create an empty tally
    pub fn new() -> Self {
        Self {
            counts: IndexMap::default(),
        }
    }

    /// Count one occurrence of `key`
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    fn add_n(&mut self, key: K, n: usize) {
        *self.counts.entry(key).or_insert(0) += n;
    }

    /// Occurrences of `key` so far
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Whether no key has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Keys and counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, n)| (key, *n))
    }

    /// Fold `other` into this tally.
    ///
    /// Keys new to `self` are appended in `other`'s order, so merging tallies
    /// of consecutive chunks left to right preserves first-seen order.
    pub fn merge(&mut self, other: Tally<K>) {
        for (key, n) in other.counts {
            self.add_n(key, n);
        }
    }

    /// Most frequent key and its count; ties go to the first-seen key
    pub fn most_common(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, n) in self.iter() {
            if best.is_none_or(|(_, best_n)| n > best_n) {
                best = Some((key, n));
            }
        }
        best
    }
}

impl<K: Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
