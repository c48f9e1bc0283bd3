//! Diamond-to-row projection.
//!
//! A detector's diamond intersects row `r` iff the vertical offset
//! `|position.y - r|` does not exceed its reach. The intersection is a
//! single interval centred on `position.x` whose half-width shrinks by
//! one per row of vertical offset.

use crate::interval::Interval;
use lacuna_core::Detector;

/// Project `detector`'s diamond onto `row` across the full integer line.
///
/// Returns `None` when the diamond does not reach the row at all.
/// Pure: called once per `(detector, row)` pair needed, with no state
/// carried between calls.
///
/// # Examples
///
/// ```
/// use lacuna_core::{Detector, Point};
/// use lacuna_coverage::{project, Interval};
///
/// // Reach 9; three rows above row 10, so half-width 6 around x = 8.
/// let d = Detector::new(Point::new(8, 7), Point::new(2, 10));
/// assert_eq!(project(&d, 10), Some(Interval::new(2, 14)));
/// assert_eq!(project(&d, 16), Some(Interval::new(8, 8)));
/// assert_eq!(project(&d, 17), None);
/// ```
pub fn project(detector: &Detector, row: i64) -> Option<Interval> {
    let vertical = detector.position().y.abs_diff(row);
    if vertical > detector.reach() {
        return None;
    }
    let horizontal = (detector.reach() - vertical) as i64;
    let centre = detector.position().x;
    Some(Interval::new(centre - horizontal, centre + horizontal))
}

/// Project `detector`'s diamond onto `row`, clamped to `[0, max_coordinate]`.
///
/// Returns `None` when the diamond misses the row entirely, or when the
/// clamp leaves nothing inside the bound.
pub fn project_clamped(detector: &Detector, row: i64, max_coordinate: i64) -> Option<Interval> {
    project(detector, row)?.clamped(0, max_coordinate)
}
