//! Fixed-capacity bitset recording which allowed cells a path has entered.

use std::fmt;

const WORDS: usize = 4;

/// A set of allowed-cell indices in `0..Coverage::CAPACITY`.
///
/// `Coverage` is `Copy` and hashable so it can be part of a search state's
/// identity. The number of distinct masks is `2^K` for a track with `K`
/// allowed cells, which is what bounds (and explodes) the search space.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coverage {
    words: [u64; WORDS],
}

impl Coverage {
    /// Largest number of cells a mask can track.
    pub const CAPACITY: usize = WORDS * 64;

    /// The empty mask.
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    /// Mask with only `idx` set.
    pub fn single(idx: usize) -> Self {
        Self::new().with(idx)
    }

    /// Copy of this mask with `idx` set. Indices beyond capacity are ignored.
    #[must_use]
    pub fn with(mut self, idx: usize) -> Self {
        self.insert(idx);
        self
    }

    /// Set `idx`. Returns `true` if it was not already set.
    pub fn insert(&mut self, idx: usize) -> bool {
        if idx >= Self::CAPACITY {
            return false;
        }
        let (w, b) = (idx / 64, idx % 64);
        let fresh = self.words[w] & (1 << b) == 0;
        self.words[w] |= 1 << b;
        fresh
    }

    /// Whether `idx` is set.
    pub fn contains(&self, idx: usize) -> bool {
        idx < Self::CAPACITY && self.words[idx / 64] & (1 << (idx % 64)) != 0
    }

    /// Number of set bits.
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Whether no bit is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Whether every bit of `self` is also set in `other`.
    pub fn is_subset(&self, other: &Coverage) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & !b == 0)
    }

    /// Iterate over the set indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::CAPACITY).filter(move |&i| self.contains(i))
    }
}

impl fmt::Debug for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_fresh_bits() {
        let mut c = Coverage::new();
        assert!(c.is_empty());
        assert!(c.insert(3));
        assert!(!c.insert(3));
        assert!(c.insert(130));
        assert_eq!(c.count(), 2);
        assert!(c.contains(130));
        assert!(!c.contains(129));
    }

    #[test]
    fn out_of_capacity_is_ignored() {
        let mut c = Coverage::single(0);
        assert!(!c.insert(Coverage::CAPACITY));
        assert!(!c.contains(Coverage::CAPACITY));
        assert_eq!(c.count(), 1);
    }

    #[test]
    fn subset_and_iteration() {
        let small = Coverage::single(1).with(64);
        let big = small.with(200);
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert_eq!(big.iter().collect::<Vec<_>>(), vec![1, 64, 200]);
        assert_eq!(format!("{small:?}"), "{1, 64}");
    }

    #[test]
    fn equal_sets_hash_equal() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Coverage::single(5).with(9));
        assert!(set.contains(&Coverage::single(9).with(5)));
    }
}
