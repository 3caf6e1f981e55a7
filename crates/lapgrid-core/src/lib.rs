//! **lapgrid-core**: grid geometry shared by the *lapgrid* crates.
//!
//! This crate provides the foundational types used across the workspace:
//! integer points, half-open ranges with row-major iteration, and the
//! four-valued [`Heading`] used by the vehicle kinematics.

pub mod geom;
pub mod heading;

pub use geom::{Point, Range, RangeIter};
pub use heading::Heading;
