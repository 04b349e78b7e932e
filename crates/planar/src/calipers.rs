//! Rotating calipers over a convex polygon.
//!
//! Pre: the input is a convex polygon in CCW order (e.g. any `Hull` from
//! `crate::hull`). Arbitrary point sets give meaningless answers; hull them first.

use crate::primitives::{cross, dist_sq};
use crate::Point;

/// Diameter (largest vertex-to-vertex distance) of a convex polygon.
///
/// Fewer than 2 vertices: 0.
#[inline]
pub fn diameter(hull: &[Point]) -> f64 {
    diameter_pair(hull).map_or(0.0, |(a, b)| dist_sq(a, b).sqrt())
}

/// Antipodal vertex pair realizing the diameter, in O(n).
///
/// For each edge `(i, i+1)` the opposite pointer `j` advances while its height
/// above the edge (|cross|) strictly grows; the farthest pair is among the
/// `(i, j)` / `(i+1, j)` pairs visited.
pub fn diameter_pair(hull: &[Point]) -> Option<(Point, Point)> {
    let n = hull.len();
    if n < 2 {
        return None;
    }
    let mut best = (hull[0], hull[1]);
    let mut best_d = dist_sq(hull[0], hull[1]);
    let mut j = 1usize;
    for i in 0..n {
        let ni = (i + 1) % n;
        // Height is unimodal along a convex polygon, so j never needs a full lap.
        let mut guard = 0usize;
        while guard < n
            && cross(hull[i], hull[ni], hull[(j + 1) % n]).abs()
                > cross(hull[i], hull[ni], hull[j]).abs()
        {
            j = (j + 1) % n;
            guard += 1;
        }
        for (a, b) in [(hull[i], hull[j]), (hull[ni], hull[j])] {
            let d = dist_sq(a, b);
            if d > best_d {
                best_d = d;
                best = (a, b);
            }
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::graham_scan;
    use proptest::prelude::*;

    fn brute_force(h: &[Point]) -> f64 {
        let mut best = 0.0f64;
        for i in 0..h.len() {
            for j in i + 1..h.len() {
                best = best.max(dist_sq(h[i], h[j]));
            }
        }
        best.sqrt()
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(diameter(&[]), 0.0);
        assert_eq!(diameter(&[Point::new(1.0, 1.0)]), 0.0);
        assert!(diameter_pair(&[Point::new(1.0, 1.0)]).is_none());
        let seg = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        assert!((diameter(&seg) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn scenario_hull_diameter() {
        let raw = [
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 2.0),
            (2.0, 0.0),
            (2.0, 4.0),
            (3.0, 3.0),
            (0.0, 5.0),
            (4.0, 0.0),
        ];
        let points: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let h = graham_scan(&points);
        // (4,0)-(0,5)
        assert!((diameter(&h.vertices) - 41f64.sqrt()).abs() < 1e-12);
        let (a, b) = diameter_pair(&h.vertices).unwrap();
        assert!((dist_sq(a, b) - 41.0).abs() < 1e-12);
    }

    #[test]
    fn regular_polygon_with_parallel_edges() {
        // Hexagon: every edge has a parallel opposite edge (height ties).
        let hex: Vec<Point> = (0..6)
            .map(|k| {
                let t = std::f64::consts::TAU * (k as f64) / 6.0;
                Point::new(t.cos(), t.sin())
            })
            .collect();
        assert!((diameter(&hex) - 2.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(
            raw in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..150)
        ) {
            let points: Vec<Point> = raw.into_iter().map(|(x, y)| Point::new(x, y)).collect();
            let h = graham_scan(&points);
            let fast = diameter(&h.vertices);
            let slow = brute_force(&h.vertices);
            prop_assert!((fast - slow).abs() <= 1e-9 * slow.max(1.0), "{} vs {}", fast, slow);
        }
    }
}
