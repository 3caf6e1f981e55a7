//! The [`Heading`] type: one of the four cardinal facing directions.

use std::fmt;

use crate::geom::Point;

/// Facing direction of the vehicle.
///
/// Discriminants follow clockwise order starting from East, so that
/// `index() + 1 (mod 4)` is always a right turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Heading {
    #[default]
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Heading {
    /// All headings in clockwise order, starting from East.
    pub const ALL: [Heading; 4] = [Heading::East, Heading::South, Heading::West, Heading::North];

    /// Index in `0..4`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Heading for an index, wrapping modulo 4.
    #[inline]
    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    /// Heading after a 90° clockwise turn.
    #[inline]
    pub const fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Heading after a 90° counter-clockwise turn.
    #[inline]
    pub const fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Unit displacement for one cell of forward travel.
    #[inline]
    pub const fn vector(self) -> Point {
        match self {
            Heading::East => Point::new(1, 0),
            Heading::South => Point::new(0, 1),
            Heading::West => Point::new(-1, 0),
            Heading::North => Point::new(0, -1),
        }
    }

    /// Unit displacement for a sidestep to the right (`side > 0`), to the
    /// left (`side < 0`), or none (`side == 0`).
    #[inline]
    pub const fn lateral(self, side: i8) -> Point {
        if side > 0 {
            self.vector().rotate_cw()
        } else if side < 0 {
            self.vector().rotate_ccw()
        } else {
            Point::ZERO
        }
    }

    /// Single-letter compass abbreviation.
    pub const fn letter(self) -> char {
        match self {
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
            Heading::North => 'N',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::East => "East",
            Heading::South => "South",
            Heading::West => "West",
            Heading::North => "North",
        };
        f.write_str(name)
    }
}
