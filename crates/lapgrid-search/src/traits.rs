use lapgrid_core::Point;
use lapgrid_track::Track;

/// The terrain a lap is driven on.
///
/// The move generator and search engine only see a track through this
/// interface.
pub trait Course {
    /// Whether `p` lies on the grid.
    fn in_bounds(&self, p: Point) -> bool;

    /// Whether the vehicle may stop on `p`. Must be `false` out of bounds.
    fn is_drivable(&self, p: Point) -> bool;

    /// Coverage bit assigned to `p`, if it is a drivable cell.
    fn cell_index(&self, p: Point) -> Option<usize>;

    /// The closure point of the loop.
    fn start(&self) -> Point;

    /// Number of indexed cells (`K`).
    fn cell_count(&self) -> usize;
}

impl Course for Track {
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        Track::in_bounds(self, p)
    }

    #[inline]
    fn is_drivable(&self, p: Point) -> bool {
        Track::is_drivable(self, p)
    }

    #[inline]
    fn cell_index(&self, p: Point) -> Option<usize> {
        self.allowed().index_of(p)
    }

    #[inline]
    fn start(&self) -> Point {
        Track::start(self)
    }

    fn cell_count(&self) -> usize {
        self.drivable_count()
    }
}
