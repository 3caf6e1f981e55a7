use std::fmt;
use std::time::Duration;

use crate::state::Kinematics;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States popped from the open set and expanded.
    pub expanded: usize,
    /// Legal successors produced, duplicates included.
    pub generated: usize,
    /// Distinct states recorded.
    pub stored: usize,
    /// Largest size reached by the open set.
    pub peak_open: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// A closed lap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LapReport {
    /// Moves taken, the lap's cost.
    pub moves: u32,
    /// Distinct drivable cells covered, the start included.
    pub visited: u32,
    /// One state per move plus the initial state, in driving order.
    pub path: Vec<Kinematics>,
    pub stats: SearchStats,
}

/// Budget that stopped a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limit {
    Expansions(usize),
    Timeout(Duration),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expansions(n) => write!(f, "expansion limit of {n}"),
            Self::Timeout(d) => write!(f, "timeout of {d:?}"),
        }
    }
}

/// Result of a lap search.
///
/// Not finding a lap is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A state closing the loop was reached.
    Found(LapReport),
    /// The open set emptied: no lap satisfies the thresholds.
    Exhausted(SearchStats),
    /// A configured budget ran out first.
    Aborted { limit: Limit, stats: SearchStats },
}

impl SearchOutcome {
    /// Whether a lap was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The lap, if one was found.
    pub fn report(&self) -> Option<&LapReport> {
        match self {
            Self::Found(r) => Some(r),
            _ => None,
        }
    }

    /// Move count of the lap, if one was found.
    pub fn moves(&self) -> Option<u32> {
        self.report().map(|r| r.moves)
    }

    /// Counters for the search, whatever its outcome.
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::Found(r) => &r.stats,
            Self::Exhausted(stats) | Self::Aborted { stats, .. } => stats,
        }
    }
}
