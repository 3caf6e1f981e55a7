//! Configuration for lap searches.
//!
//! # Example
//!
//! ```
//! use lapgrid_search::{Collision, Heuristic, SearchConfig};
//! use std::time::Duration;
//!
//! let config = SearchConfig::default()
//!     .with_min_loop_moves(12)
//!     .with_min_visited(10)
//!     .with_collision(Collision::Swept)
//!     .with_timeout(Duration::from_secs(5));
//!
//! assert_eq!(config.max_speed(), 3);
//! assert_eq!(config.heuristic(), Heuristic::PenaltySum);
//! ```

use std::time::Duration;

use crate::heuristic::Heuristic;

/// Default minimum number of moves for a lap.
pub const DEFAULT_MIN_LOOP_MOVES: u32 = 40;

/// Default minimum number of distinct cells a lap must cover.
pub const DEFAULT_MIN_VISITED: u32 = 30;

/// Default top speed, in cells per move.
pub const DEFAULT_MAX_SPEED: u8 = 3;

/// Which cells a move must find drivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Collision {
    /// Only the landing cell. Fast moves may jump over obstacles.
    #[default]
    Landing,
    /// Every cell of the forward run, each shifted by the lateral offset,
    /// up to and including the landing cell.
    Swept,
}

/// Thresholds, kinematic limits and budgets for a lap search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Moves required before returning to start counts as a lap.
    min_loop_moves: u32,
    /// Distinct cells a lap must cover, the start included.
    min_visited: u32,
    /// Top speed in cells per move.
    max_speed: u8,
    /// Priority estimate added to the move count.
    heuristic: Heuristic,
    /// Legality rule for multi-cell moves.
    collision: Collision,
    /// Stop after expanding this many states.
    max_expansions: Option<usize>,
    /// Stop after this much wall-clock time.
    timeout: Option<Duration>,
}

impl SearchConfig {
    /// Creates a configuration with the default thresholds (40 moves,
    /// 30 cells, top speed 3), the penalty-sum heuristic, landing-only
    /// collision checks and no budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_loop_moves: DEFAULT_MIN_LOOP_MOVES,
            min_visited: DEFAULT_MIN_VISITED,
            max_speed: DEFAULT_MAX_SPEED,
            heuristic: Heuristic::PenaltySum,
            collision: Collision::Landing,
            max_expansions: None,
            timeout: None,
        }
    }

    /// Sets the minimum lap length in moves.
    #[must_use]
    pub const fn with_min_loop_moves(mut self, moves: u32) -> Self {
        self.min_loop_moves = moves;
        self
    }

    /// Sets the minimum number of distinct cells covered.
    #[must_use]
    pub const fn with_min_visited(mut self, cells: u32) -> Self {
        self.min_visited = cells;
        self
    }

    /// Sets the top speed.
    #[must_use]
    pub const fn with_max_speed(mut self, speed: u8) -> Self {
        self.max_speed = speed;
        self
    }

    /// Sets the heuristic.
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets the collision rule.
    #[must_use]
    pub const fn with_collision(mut self, collision: Collision) -> Self {
        self.collision = collision;
        self
    }

    /// Sets the maximum number of expansions.
    #[must_use]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Removes the expansion limit.
    #[must_use]
    pub const fn without_max_expansions(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Removes the timeout.
    #[must_use]
    pub const fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    #[must_use]
    pub const fn min_loop_moves(&self) -> u32 {
        self.min_loop_moves
    }

    #[must_use]
    pub const fn min_visited(&self) -> u32 {
        self.min_visited
    }

    #[must_use]
    pub const fn max_speed(&self) -> u8 {
        self.max_speed
    }

    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    #[must_use]
    pub const fn collision(&self) -> Collision {
        self.collision
    }

    #[must_use]
    pub const fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SearchConfig::default();
        assert_eq!(c.min_loop_moves(), 40);
        assert_eq!(c.min_visited(), 30);
        assert_eq!(c.max_speed(), 3);
        assert_eq!(c.collision(), Collision::Landing);
        assert_eq!(c.max_expansions(), None);
        assert_eq!(c.timeout(), None);
    }

    #[test]
    fn builders_set_and_clear_budgets() {
        let c = SearchConfig::new()
            .with_max_expansions(10)
            .with_timeout(Duration::from_millis(5));
        assert_eq!(c.max_expansions(), Some(10));
        assert_eq!(c.timeout(), Some(Duration::from_millis(5)));
        let c = c.without_max_expansions().without_timeout();
        assert_eq!(c.max_expansions(), None);
        assert_eq!(c.timeout(), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: SearchConfig =
            serde_json::from_str(r#"{"min_visited": 12, "collision": "Swept"}"#).unwrap();
        assert_eq!(c.min_visited(), 12);
        assert_eq!(c.min_loop_moves(), DEFAULT_MIN_LOOP_MOVES);
        assert_eq!(c.collision(), Collision::Swept);
    }
}
