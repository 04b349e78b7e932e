//! Closed segment intersection.

use crate::cfg::EPS;
use crate::primitives::{cross, on_segment, orientation, Orientation};
use crate::Point;

/// Whether closed segments `ab` and `cd` share at least one point.
///
/// Touching endpoints and collinear overlap count as intersecting.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    (o1 == Orientation::Collinear && on_segment(a, c, b))
        || (o2 == Orientation::Collinear && on_segment(a, d, b))
        || (o3 == Orientation::Collinear && on_segment(c, a, d))
        || (o4 == Orientation::Collinear && on_segment(c, b, d))
}

/// Unique intersection point of `ab` and `cd`.
///
/// `None` when the segments miss each other or are parallel (including
/// collinear overlap, where there is no single point).
pub fn segment_intersection_point(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    let r = b - a;
    let s = d - c;
    let denom = r.x * s.y - r.y * s.x;
    if denom.abs() < EPS {
        return None;
    }
    let t = cross(a, c, c + s) / denom;
    let u = cross(a, c, c + r) / denom;
    let tol = EPS / denom.abs().max(1.0);
    if t < -tol || t > 1.0 + tol || u < -tol || u > 1.0 + tol {
        return None;
    }
    Some(a + r * t)
}
