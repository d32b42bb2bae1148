//! Pile configurations.
//!
//! `Piles` is both the mutable board inside a `Game` and the immutable key
//! used by the Q-table. Keys are always owned copies, so later moves on a
//! game never alias an entry already stored in a table.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An ordered sequence of pile sizes. Index identifies the pile.
///
/// Equality and hashing are by value: two configurations built differently
/// (copied from a game, parsed, collected from an iterator) compare equal
/// whenever their counts are equal element-wise.
///
/// SmallVec keeps the common four-pile board off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piles(SmallVec<[u32; 4]>);

impl Piles {
    /// Create a configuration from a slice of pile sizes.
    #[must_use]
    pub fn new(sizes: &[u32]) -> Self {
        Self(SmallVec::from_slice(sizes))
    }

    /// Number of piles (empty or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no piles at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every pile is zero. A configuration with no piles counts as exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.0.iter().all(|&pile| pile == 0)
    }

    /// Total objects remaining across all piles.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&pile| u64::from(pile)).sum()
    }

    /// Size of pile `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// View the pile sizes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Iterate over (pile index, size) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// Remove `count` objects from pile `index`. Callers validate first.
    pub(crate) fn remove(&mut self, index: usize, count: u32) {
        self.0[index] -= count;
    }
}

impl From<Vec<u32>> for Piles {
    fn from(sizes: Vec<u32>) -> Self {
        Self(SmallVec::from_vec(sizes))
    }
}

impl From<&[u32]> for Piles {
    fn from(sizes: &[u32]) -> Self {
        Self::new(sizes)
    }
}

impl<const N: usize> From<[u32; N]> for Piles {
    fn from(sizes: [u32; N]) -> Self {
        Self::new(&sizes)
    }
}

impl FromIterator<u32> for Piles {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Piles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_by_value() {
        let built = Piles::from([1, 3, 5, 7]);
        let collected: Piles = vec![1u32, 3, 5, 7].into_iter().collect();
        let copied = built.clone();

        assert_eq!(built, collected);
        assert_eq!(built, copied);

        let set: HashSet<Piles> = [built, collected, copied].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_is_exhausted() {
        assert!(Piles::from([0, 0, 0, 0]).is_exhausted());
        assert!(!Piles::from([0, 0, 0, 1]).is_exhausted());
        assert!(Piles::default().is_exhausted());
    }

    #[test]
    fn test_total_and_get() {
        let piles = Piles::from([1, 3, 5, 7]);
        assert_eq!(piles.total(), 16);
        assert_eq!(piles.get(2), Some(5));
        assert_eq!(piles.get(4), None);
    }

    #[test]
    fn test_remove() {
        let mut piles = Piles::from([1, 3, 5, 7]);
        let snapshot = piles.clone();
        piles.remove(3, 4);

        assert_eq!(piles.as_slice(), &[1, 3, 5, 3]);
        // Snapshot taken before the move is unaffected.
        assert_eq!(snapshot.as_slice(), &[1, 3, 5, 7]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Piles::from([0, 2]).to_string(), "[0, 2]");
    }

    #[test]
    fn test_serde() {
        let piles = Piles::from([1, 3, 5, 7]);
        let json = serde_json::to_string(&piles).unwrap();
        assert_eq!(json, "[1,3,5,7]");
        let back: Piles = serde_json::from_str(&json).unwrap();
        assert_eq!(piles, back);
    }
}
