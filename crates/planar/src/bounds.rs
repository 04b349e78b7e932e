//! Axis-aligned bounding boxes.

use crate::Point;

/// Closed axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
///
/// Invariant: `min <= max` componentwise (an empty input yields the
/// degenerate box at the origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Aabb {
    #[inline]
    pub fn corners(&self) -> (Point, Point) {
        (self.min, self.max)
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn center(&self) -> Point {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Componentwise min/max over `points`; the origin box for an empty slice.
pub fn aabb(points: &[Point]) -> Aabb {
    let Some(first) = points.first() else {
        return Aabb {
            min: Point::origin(),
            max: Point::origin(),
        };
    };
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Aabb { min, max }
}
