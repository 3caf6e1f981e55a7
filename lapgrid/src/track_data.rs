//! Built-in course.

use lapgrid_track::{Track, TrackError};

/// The default 14-row by 11-column course.
///
/// `1` is boundary, `2` an obstacle, `0` open track and `3` the start. The
/// infield block in the middle leaves a ring of 83 drivable cells.
pub const DEFAULT_COURSE: [[i32; 11]; 14] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1],
    [1, 2, 0, 0, 1, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1],
    [1, 3, 0, 0, 1, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1, 1, 1, 2, 2, 0, 1],
    [1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1],
    [1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Build the built-in course.
pub fn default_track() -> Result<Track, TrackError> {
    Track::from_rows(&DEFAULT_COURSE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapgrid_core::Point;
    use lapgrid_search::Course;
    use lapgrid_track::Coverage;

    #[test]
    fn default_course_shape() {
        let track = default_track().unwrap();
        assert_eq!(track.width(), 11);
        assert_eq!(track.height(), 14);
        assert_eq!(track.start(), Point::new(1, 6));
        assert_eq!(track.drivable_count(), 83);
        assert!(track.drivable_count() <= Coverage::CAPACITY);
        assert_eq!(track.cell_count(), 83);
    }
}
