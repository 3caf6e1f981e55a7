//! Dense numbering of the drivable cells.

use lapgrid_core::{Point, Range};

/// Bijection between drivable coordinates and indices in `0..len()`.
///
/// Indices are assigned in row-major order, so they are stable for a given
/// track. The index is what gives every cell its bit in a
/// [`Coverage`](crate::Coverage) mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedCells {
    bounds: Range,
    /// Flat row-major map from grid offset to cell index.
    slots: Vec<Option<u32>>,
    points: Vec<Point>,
}

impl AllowedCells {
    /// Scan `bounds` in row-major order, numbering every point for which
    /// `drivable` returns `true`.
    pub fn new(bounds: Range, drivable: impl Fn(Point) -> bool) -> Self {
        let mut slots = vec![None; bounds.len()];
        let mut points = Vec::new();
        for (offset, p) in bounds.iter().enumerate() {
            if drivable(p) {
                slots[offset] = Some(points.len() as u32);
                points.push(p);
            }
        }
        Self {
            bounds,
            slots,
            points,
        }
    }

    /// Index of the cell at `p`, or `None` if it is not drivable.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        let offset = self.bounds.offset(p)?;
        self.slots[offset].map(|i| i as usize)
    }

    /// Coordinate of the cell numbered `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Option<Point> {
        self.points.get(idx).copied()
    }

    /// Number of indexed cells (`K`).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no cell is indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(index, point)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.points.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_is_row_major() {
        let bounds = Range::new(0, 0, 3, 3);
        // Checkerboard of drivable cells.
        let cells = AllowedCells::new(bounds, |p| (p.x + p.y) % 2 == 0);
        assert_eq!(cells.len(), 5);
        assert_eq!(cells.index_of(Point::new(0, 0)), Some(0));
        assert_eq!(cells.index_of(Point::new(2, 0)), Some(1));
        assert_eq!(cells.index_of(Point::new(1, 1)), Some(2));
        assert_eq!(cells.index_of(Point::new(2, 2)), Some(4));
        assert_eq!(cells.index_of(Point::new(1, 0)), None);
        assert_eq!(cells.index_of(Point::new(9, 9)), None);
    }

    #[test]
    fn index_and_point_are_inverse() {
        let bounds = Range::new(0, 0, 4, 2);
        let cells = AllowedCells::new(bounds, |p| p.x != 1);
        for (i, p) in cells.iter() {
            assert_eq!(cells.index_of(p), Some(i));
            assert_eq!(cells.point(i), Some(p));
        }
        assert_eq!(cells.point(cells.len()), None);
    }

    #[test]
    fn nothing_drivable_means_empty() {
        let cells = AllowedCells::new(Range::new(0, 0, 3, 2), |_| false);
        assert!(cells.is_empty());
        assert_eq!(cells.len(), 0);
        assert_eq!(cells.iter().count(), 0);
        assert_eq!(cells.index_of(Point::new(1, 1)), None);

        let cells = AllowedCells::new(Range::new(0, 0, 3, 2), |p| p.y == 1);
        assert!(!cells.is_empty());
    }
}
