//! Path reconstruction from the search arena.

use crate::arena::{Arena, NO_PARENT};
use crate::state::Kinematics;

impl Arena {
    /// Follow parent links from `idx` back to the root and return the
    /// states in forward order, root first and `idx` last.
    ///
    /// The result has `moves + 1` entries, where `moves` is the recorded
    /// move count of `idx`.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Kinematics> {
        let mut path = Vec::with_capacity(self.get(idx).moves as usize + 1);
        let mut ci = idx;
        while ci != NO_PARENT {
            let entry = self.get(ci);
            path.push(entry.key.state);
            ci = entry.parent;
        }
        path.reverse();
        path
    }
}
