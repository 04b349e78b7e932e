//! Orientation and distance primitives shared by every algorithm.

use std::cmp::Ordering;

use crate::cfg::EPS;
use crate::Point;

/// Z-component of `(a - o) × (b - o)`.
///
/// Positive for a counterclockwise turn `o → a → b`, negative for clockwise,
/// zero when collinear.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

/// Squared Euclidean distance.
#[inline]
pub fn dist_sq(a: Point, b: Point) -> f64 {
    (a - b).norm_squared()
}

/// Turn direction of `p → q → r` with `|cross| < EPS` treated as collinear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let c = cross(p, q, r);
    if c.abs() < EPS {
        Orientation::Collinear
    } else if c > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Whether `q` lies within the axis box spanned by `p` and `r` (padded by `EPS`).
///
/// Only meaningful when `p, q, r` are already known to be collinear.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) + EPS
        && q.x >= p.x.min(r.x) - EPS
        && q.y <= p.y.max(r.y) + EPS
        && q.y >= p.y.min(r.y) - EPS
}

/// Lexicographic order by (x, y); NaN compares equal.
#[inline]
pub(crate) fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Index of the lowest point (min y, tie min x). `None` for an empty slice.
pub(crate) fn lowest_point(points: &[Point]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let q = points[b];
                if p.y < q.y || (p.y == q.y && p.x < q.x) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Sorted copy with exact duplicates removed.
pub(crate) fn dedup_exact(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(cmp_xy);
    pts.dedup();
    pts
}
