//! Racetrack model for lapgrid.
//!
//! - [`Track`]: the immutable grid of [`CellKind`]s with its start cell
//! - [`AllowedCells`]: row-major numbering of the drivable cells
//! - [`Coverage`]: bitset over that numbering, used to count distinct
//!   cells visited along a path
//!
//! A track is validated once at construction; see [`TrackError`].

pub mod cell;
pub mod coverage;
pub mod error;
pub mod grid;
pub mod index;

pub use cell::CellKind;
pub use coverage::Coverage;
pub use error::TrackError;
pub use grid::Track;
pub use index::AllowedCells;
