use std::collections::HashMap;

use crate::state::StateKey;

/// Parent index of the root entry.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Arena entries and open-set references
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) key: StateKey,
    pub(crate) moves: u32,
    pub(crate) parent: usize,
}

/// Reference into the arena, ordered by `f` for use in `BinaryHeap`.
///
/// Equal priorities pop in insertion order (lower arena index first).
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest.
        other.f.cmp(&self.f).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

/// Every state seen by one search, with its first-seen move count and parent.
///
/// The hash index doubles as the visited set. Entries are append-only: the
/// first writer of a key wins and is never revised.
#[derive(Default)]
pub(crate) struct Arena {
    entries: Vec<Entry>,
    index: HashMap<StateKey, usize>,
}

impl Arena {
    /// Record `key` unless it was seen before. Returns the new slot.
    pub(crate) fn insert(&mut self, key: StateKey, moves: u32, parent: usize) -> Option<usize> {
        if self.index.contains_key(&key) {
            return None;
        }
        let idx = self.entries.len();
        self.entries.push(Entry { key, moves, parent });
        self.index.insert(key, idx);
        Some(idx)
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> &Entry {
        &self.entries[idx]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Kinematics;
    use lapgrid_core::Point;
    use lapgrid_track::Coverage;
    use std::collections::BinaryHeap;

    fn key(x: i32) -> StateKey {
        StateKey {
            state: Kinematics::at_rest(Point::new(x, 0)),
            coverage: Coverage::single(0),
        }
    }

    #[test]
    fn first_writer_wins() {
        let mut arena = Arena::default();
        assert_eq!(arena.insert(key(1), 0, NO_PARENT), Some(0));
        assert_eq!(arena.insert(key(2), 1, 0), Some(1));
        assert_eq!(arena.insert(key(2), 5, 0), None);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(1).moves, 1);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.insert(key(2), 3, NO_PARENT), Some(0));
    }

    #[test]
    fn heap_pops_lowest_f_then_oldest() {
        let mut open = BinaryHeap::new();
        open.push(NodeRef { idx: 0, f: 7 });
        open.push(NodeRef { idx: 3, f: 5 });
        open.push(NodeRef { idx: 1, f: 5 });
        open.push(NodeRef { idx: 2, f: 9 });
        let order: Vec<_> = std::iter::from_fn(|| open.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }
}
