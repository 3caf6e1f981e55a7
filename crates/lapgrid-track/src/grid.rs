//! The immutable racetrack grid.
//!
//! A [`Track`] is built once from a row-major integer matrix (or its text
//! form) and answers bounds and drivability queries. The start cell is stored
//! as [`CellKind::Drivable`]; its role as the closure point is kept in
//! [`Track::start`].

use std::fmt;

use lapgrid_core::{Point, Range};

use crate::cell::CellKind;
use crate::coverage::Coverage;
use crate::error::TrackError;
use crate::index::AllowedCells;

/// A fixed 2D racetrack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    cells: Vec<CellKind>,
    bounds: Range,
    start: Point,
    allowed: AllowedCells,
}

impl Track {
    /// Build a track from a row-major matrix of cell codes
    /// (`0` drivable, `1` boundary, `2` obstacle, `3` start).
    ///
    /// Exactly one start cell is required and every row must have the same
    /// width.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, TrackError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(TrackError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start: Option<Point> = None;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(TrackError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let kind = CellKind::from_code(value, pos)?;
                if kind == CellKind::Start {
                    if let Some(first) = start {
                        return Err(TrackError::MultipleStarts { first, second: pos });
                    }
                    start = Some(pos);
                    cells.push(CellKind::Drivable);
                } else {
                    cells.push(kind);
                }
            }
        }

        let start = start.ok_or(TrackError::NoStart)?;
        let bounds = Range::new(0, 0, width as i32, rows.len() as i32);
        let allowed = AllowedCells::new(bounds, |p| {
            bounds
                .offset(p)
                .is_some_and(|i| cells[i].is_drivable())
        });
        if allowed.len() > Coverage::CAPACITY {
            return Err(TrackError::TooManyCells {
                count: allowed.len(),
                max: Coverage::CAPACITY,
            });
        }

        Ok(Self {
            cells,
            bounds,
            start,
            allowed,
        })
    }

    /// Parse a track from text: one row per line, one digit per cell.
    ///
    /// Whitespace inside a line is ignored, as are blank lines before and
    /// after the grid.
    pub fn parse(s: &str) -> Result<Self, TrackError> {
        let mut rows: Vec<Vec<i32>> = Vec::new();
        for (y, line) in s.trim().lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let pos = Point::new(row.len() as i32, y as i32);
                let value = ch
                    .to_digit(10)
                    .ok_or(TrackError::InvalidChar { ch, pos })?;
                row.push(value as i32);
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// The bounding range `[0, width) × [0, height)`.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.bounds().width()
    }

    /// Height in cells.
    pub fn height(&self) -> i32 {
        self.bounds().height()
    }

    /// The loop's closure point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The dense numbering of drivable cells.
    pub fn allowed(&self) -> &AllowedCells {
        &self.allowed
    }

    /// Number of drivable cells, the start included.
    pub fn drivable_count(&self) -> usize {
        self.allowed.len()
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether the vehicle may occupy `p`. `false` off the grid.
    #[inline]
    pub fn is_drivable(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellKind::is_drivable)
    }

    /// The cell kind at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.bounds.offset(p).map(|i| self.cells[i])
    }

    /// Count how many cells are of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }
}

impl fmt::Display for Track {
    /// Writes the matrix codes back out, with the start cell as `3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Point::new(x, y);
                let code = if p == self.start {
                    CellKind::Start.code()
                } else {
                    self.at(p).map_or(CellKind::Boundary.code(), CellKind::code)
                };
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{code}")?;
            }
            if y + 1 < self.height() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
