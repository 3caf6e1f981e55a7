//! Errors raised while building a [`Track`](crate::Track).

use lapgrid_core::Point;

/// A malformed track description.
///
/// Every variant is a configuration problem detected at construction time;
/// a successfully built track never fails a later query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TrackError {
    /// The matrix has no rows, or its first row has no cells.
    #[error("track is empty")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("track row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell value outside the `0..=3` encoding.
    #[error("unknown cell value {value} at {pos}")]
    UnknownCell { value: i32, pos: Point },

    /// A character that is not a cell digit in the text form.
    #[error("invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },

    /// No cell carries the start marker.
    #[error("no starting position found")]
    NoStart,

    /// More than one cell carries the start marker.
    #[error("more than one starting position: {first} and {second}")]
    MultipleStarts { first: Point, second: Point },

    /// The drivable area does not fit the coverage mask.
    #[error("track has {count} drivable cells, coverage masks hold at most {max}")]
    TooManyCells { count: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(TrackError::NoStart.to_string(), "no starting position found");
        let err = TrackError::MultipleStarts {
            first: Point::new(1, 1),
            second: Point::new(3, 2),
        };
        assert_eq!(
            err.to_string(),
            "more than one starting position: (1, 1) and (3, 2)"
        );
        let err = TrackError::RaggedRow {
            row: 2,
            expected: 5,
            found: 4,
        };
        assert!(err.to_string().contains("row 2"));
    }
}
