//! Insertion-ordered frequency counting.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of keys while remembering the order each key was first seen.
///
/// Ties in `most_common` go to the key seen first.
#[derive(Debug, Clone)]
pub struct FrequencyTally<K> {
    entries: Vec<(K, usize)>,
    positions: HashMap<K, usize>,
}

impl<K> Default for FrequencyTally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> FrequencyTally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn record(&mut self, key: K) {
        match self.positions.get(&key) {
            Some(&index) => self.entries[index].1 += 1,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count for `key`, zero if never recorded.
    #[cfg(test)]
    pub(crate) fn count(&self, key: &K) -> usize {
        self.positions
            .get(key)
            .map(|&index| self.entries[index].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key with the highest count; on equal counts the earliest-seen key wins.
    pub fn most_common(&self) -> Option<(K, usize)> {
        let mut best: Option<(K, usize)> = None;
        for &(key, count) in &self.entries {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((key, count)),
            }
        }
        best
    }

    /// Entries in first-seen order.
    pub fn into_entries(self) -> Vec<(K, usize)> {
        self.entries
    }
}

impl<K: Copy + Eq + Hash> FromIterator<K> for FrequencyTally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.record(key);
        }
        tally
    }
}
