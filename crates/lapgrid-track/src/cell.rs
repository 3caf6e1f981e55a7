//! Track cell kinds and their integer encoding.

use lapgrid_core::Point;

use crate::error::TrackError;

/// What occupies a single grid cell.
///
/// The integer encoding used by track matrices is `0` drivable,
/// `1` boundary, `2` obstacle and `3` start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Drivable,
    Boundary,
    Obstacle,
    Start,
}

impl CellKind {
    /// Decode a matrix value found at `pos`.
    pub fn from_code(value: i32, pos: Point) -> Result<Self, TrackError> {
        match value {
            0 => Ok(Self::Drivable),
            1 => Ok(Self::Boundary),
            2 => Ok(Self::Obstacle),
            3 => Ok(Self::Start),
            _ => Err(TrackError::UnknownCell { value, pos }),
        }
    }

    /// The matrix value for this kind.
    pub const fn code(self) -> i32 {
        match self {
            Self::Drivable => 0,
            Self::Boundary => 1,
            Self::Obstacle => 2,
            Self::Start => 3,
        }
    }

    /// Whether the vehicle may occupy a cell of this kind.
    pub const fn is_drivable(self) -> bool {
        matches!(self, Self::Drivable | Self::Start)
    }
}
