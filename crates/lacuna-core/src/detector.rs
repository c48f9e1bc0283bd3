//! The detector model: a position, its paired reference point, and the
//! derived diamond reach.

use crate::point::Point;

/// A detector placed on the integer plane.
///
/// Each detector pairs its own `position` with the `reference` point it
/// is locked onto. The Manhattan distance between the two is the
/// detector's *reach*: the radius of the diamond-shaped region the
/// detector provably covers. Reach is computed once at construction;
/// detectors are read-only inputs for the whole computation and are
/// safely shared across scan workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Detector {
    position: Point,
    reference: Point,
    reach: u64,
}

impl Detector {
    /// Build a detector from its position and paired reference point.
    ///
    /// # Examples
    ///
    /// ```
    /// use lacuna_core::{Detector, Point};
    ///
    /// let d = Detector::new(Point::new(8, 7), Point::new(2, 10));
    /// assert_eq!(d.reach(), 9);
    /// ```
    pub fn new(position: Point, reference: Point) -> Self {
        Self {
            position,
            reference,
            reach: position.manhattan(reference),
        }
    }

    /// The detector's own location.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The reference point this detector is locked onto.
    pub fn reference(&self) -> Point {
        self.reference
    }

    /// Diamond radius: Manhattan distance from position to reference.
    pub fn reach(&self) -> u64 {
        self.reach
    }

    /// Whether `point` lies within this detector's diamond.
    pub fn covers(&self, point: Point) -> bool {
        self.position.manhattan(point) <= self.reach
    }
}
