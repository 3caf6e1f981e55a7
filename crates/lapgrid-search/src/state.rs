use std::fmt;

use lapgrid_core::{Heading, Point};
use lapgrid_track::Coverage;

/// Position, speed and heading of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    pub pos: Point,
    pub speed: u8,
    pub heading: Heading,
}

impl Kinematics {
    /// Stationary and facing East at `pos`.
    pub const fn at_rest(pos: Point) -> Self {
        Self {
            pos,
            speed: 0,
            heading: Heading::East,
        }
    }
}

impl fmt::Display for Kinematics {
    /// Formats as `(x, y, speed, heading)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.pos.x, self.pos.y, self.speed, self.heading
        )
    }
}

/// The control inputs of one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maneuver {
    /// Speed change, -1, 0 or +1.
    pub accel: i8,
    /// Sidestep: -1 left, 0 none, +1 right, relative to the new heading.
    pub lateral: i8,
    /// Whether the heading turned 90° clockwise before moving.
    pub turned: bool,
}

/// A search state: kinematics, path cost, and cells covered so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: Kinematics,
    pub moves: u32,
    pub coverage: Coverage,
}

impl SearchNode {
    /// Identity used for deduplication. Excludes `moves`.
    #[inline]
    pub fn key(&self) -> StateKey {
        StateKey {
            state: self.state,
            coverage: self.coverage,
        }
    }

    /// Number of distinct cells covered.
    #[inline]
    pub fn visited(&self) -> u32 {
        self.coverage.count()
    }
}

/// Deduplication key: two nodes with equal keys are the same search state,
/// whatever their move counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub state: Kinematics,
    pub coverage: Coverage,
}

/// A node produced by the move generator, tagged with the move that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    pub node: SearchNode,
    pub maneuver: Maneuver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_moves() {
        let a = SearchNode {
            state: Kinematics::at_rest(Point::new(2, 3)),
            moves: 4,
            coverage: Coverage::single(1),
        };
        let b = SearchNode { moves: 17, ..a };
        assert_eq!(a.key(), b.key());
        let c = SearchNode {
            coverage: a.coverage.with(2),
            ..a
        };
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn kinematics_display() {
        let k = Kinematics {
            pos: Point::new(1, 6),
            speed: 2,
            heading: Heading::South,
        };
        assert_eq!(k.to_string(), "(1, 6, 2, South)");
    }
}
