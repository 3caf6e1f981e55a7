//! Minimum-move closed laps on grid racetracks.
//!
//! A point-mass vehicle starts at rest on the start cell of a [`Course`] and
//! must drive back to it after at least a minimum number of moves, having
//! covered a minimum number of distinct drivable cells. Each move changes the
//! speed by at most one, may sidestep one cell, and may turn 90° clockwise
//! when the vehicle is slow.
//!
//! - **Move generation** ([`MoveGenerator`]) enumerates legal successors
//! - **Best-first search** ([`LapSearch`], [`find_lap`]) orders states by
//!   moves plus a [`Heuristic`] and deduplicates them on kinematics and
//!   coverage
//! - **Outcomes** ([`SearchOutcome`]) distinguish a found lap, an exhausted
//!   search, and a budget stop
//!
//! # Example
//!
//! ```
//! use lapgrid_search::{SearchConfig, find_lap};
//! use lapgrid_track::Track;
//!
//! let track = Track::parse(
//!     "11111
//!      10001
//!      10301
//!      10001
//!      11111",
//! )
//! .unwrap();
//! let config = SearchConfig::new()
//!     .with_min_loop_moves(4)
//!     .with_min_visited(4)
//!     .with_max_speed(1);
//!
//! let outcome = find_lap(&track, &config);
//! let lap = outcome.report().unwrap();
//! assert_eq!(lap.path.first().map(|k| k.pos), Some(track.start()));
//! assert_eq!(lap.path.last().map(|k| k.pos), Some(track.start()));
//! ```

mod arena;
mod config;
mod heuristic;
mod moves;
mod outcome;
mod path;
mod search;
mod state;
mod traits;

pub use config::{
    Collision, DEFAULT_MAX_SPEED, DEFAULT_MIN_LOOP_MOVES, DEFAULT_MIN_VISITED, SearchConfig,
};
pub use heuristic::{Heuristic, manhattan, penalty_sum};
pub use moves::MoveGenerator;
pub use outcome::{LapReport, Limit, SearchOutcome, SearchStats};
pub use search::{LapSearch, find_lap};
pub use state::{Kinematics, Maneuver, SearchNode, StateKey, Successor};
pub use traits::Course;
