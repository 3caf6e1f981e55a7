//! Priority estimates for the lap search.
//!
//! The default [`Heuristic::PenaltySum`] adds three shortfalls: distance back
//! to the start, moves still owed, and cells still owed. Each is necessary for
//! closure, but their sum can overestimate the true remaining cost (a single
//! move may reduce all three at once), so the estimate is **not admissible**
//! and the move count found with it is the best found, not a proven minimum.
//! [`Heuristic::Zero`] turns the search into uniform-cost order, which does
//! return the minimum at the price of exploring far more states.

use lapgrid_core::Point;

use crate::config::SearchConfig;
use crate::state::SearchNode;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    (a.x - b.x).unsigned_abs() + (a.y - b.y).unsigned_abs()
}

/// Heuristic used to order the open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `manhattan(pos, start) + moves owed + cells owed`.
    #[default]
    PenaltySum,
    /// Always 0.
    Zero,
}

impl Heuristic {
    /// Estimate the remaining moves from `node` to a closed lap at `start`.
    #[inline]
    pub fn estimate(self, node: &SearchNode, start: Point, config: &SearchConfig) -> u32 {
        match self {
            Self::PenaltySum => penalty_sum(
                node.state.pos,
                start,
                node.moves,
                node.visited(),
                config.min_loop_moves(),
                config.min_visited(),
            ),
            Self::Zero => 0,
        }
    }
}

/// `manhattan(pos, start) + max(0, min_moves - moves) + max(0, min_visited - visited)`,
/// saturating at `u32::MAX`.
#[inline]
pub fn penalty_sum(
    pos: Point,
    start: Point,
    moves: u32,
    visited: u32,
    min_moves: u32,
    min_visited: u32,
) -> u32 {
    manhattan(pos, start)
        .saturating_add(min_moves.saturating_sub(moves))
        .saturating_add(min_visited.saturating_sub(visited))
}
