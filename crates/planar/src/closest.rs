//! Closest pair of points by divide and conquer, O(n log n).
//!
//! Works on one x-sorted working buffer plus one scratch buffer of the same
//! length; recursion passes index ranges, never sub-copies. Each level leaves
//! its range sorted by y (merge step), which bounds the strip scan.

use std::cmp::Ordering;

use crate::primitives::{cmp_xy, dist_sq};
use crate::Point;

/// Ranges of at most this many points are solved by brute force.
const BRUTE_FORCE_MAX: usize = 4;

/// Minimum distance between two input points; 0 for fewer than 2 points.
///
/// Repeated points are distinct inputs at distance 0.
#[inline]
pub fn closest_pair(points: &[Point]) -> f64 {
    closest_pair_points(points).map_or(0.0, |(_, _, d)| d)
}

/// Closest pair and its distance; `None` for fewer than 2 points.
pub fn closest_pair_points(points: &[Point]) -> Option<(Point, Point, f64)> {
    if points.len() < 2 {
        return None;
    }
    let mut buf = points.to_vec();
    buf.sort_by(cmp_xy);
    let mut scratch = buf.clone();
    let best = solve(&mut buf, &mut scratch, 0, points.len());
    Some((best.a, best.b, best.d))
}

#[derive(Clone, Copy, Debug)]
struct Best {
    a: Point,
    b: Point,
    d: f64,
}

impl Best {
    #[inline]
    fn offer(&mut self, a: Point, b: Point) {
        let d = dist_sq(a, b).sqrt();
        if d < self.d {
            *self = Best { a, b, d };
        }
    }
}

#[inline]
fn by_y(a: &Point, b: &Point) -> Ordering {
    a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
}

/// Solve `buf[lo..hi]` (x-sorted on entry, y-sorted on exit).
fn solve(buf: &mut [Point], scratch: &mut [Point], lo: usize, hi: usize) -> Best {
    let mut best = Best {
        a: buf[lo],
        b: buf[lo],
        d: f64::INFINITY,
    };
    if hi - lo <= BRUTE_FORCE_MAX {
        for i in lo..hi {
            for j in i + 1..hi {
                best.offer(buf[i], buf[j]);
            }
        }
        buf[lo..hi].sort_by(by_y);
        return best;
    }

    let mid = (lo + hi) / 2;
    let mid_x = buf[mid].x;
    let left = solve(buf, scratch, lo, mid);
    let right = solve(buf, scratch, mid, hi);
    best = if left.d <= right.d { left } else { right };

    merge_by_y(buf, scratch, lo, mid, hi);

    // Strip candidates, in y order, staged in the (now free) scratch range.
    let mut k = lo;
    for i in lo..hi {
        if (buf[i].x - mid_x).abs() < best.d {
            scratch[k] = buf[i];
            k += 1;
        }
    }
    for i in lo..k {
        let mut j = i + 1;
        while j < k && scratch[j].y - scratch[i].y < best.d {
            best.offer(scratch[i], scratch[j]);
            j += 1;
        }
    }
    best
}

/// Merge the y-sorted runs `buf[lo..mid]` and `buf[mid..hi]` in place (via `scratch`).
fn merge_by_y(buf: &mut [Point], scratch: &mut [Point], lo: usize, mid: usize, hi: usize) {
    let (mut i, mut j, mut k) = (lo, mid, lo);
    while i < mid && j < hi {
        if by_y(&buf[j], &buf[i]) == Ordering::Less {
            scratch[k] = buf[j];
            j += 1;
        } else {
            scratch[k] = buf[i];
            i += 1;
        }
        k += 1;
    }
    scratch[k..k + (mid - i)].copy_from_slice(&buf[i..mid]);
    k += mid - i;
    scratch[k..k + (hi - j)].copy_from_slice(&buf[j..hi]);
    buf[lo..hi].copy_from_slice(&scratch[lo..hi]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn brute_force(points: &[Point]) -> f64 {
        let mut best = f64::INFINITY;
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                best = best.min(dist_sq(points[i], points[j]).sqrt());
            }
        }
        best
    }

    #[test]
    fn fewer_than_two_points() {
        assert_eq!(closest_pair(&[]), 0.0);
        assert_eq!(closest_pair(&[Point::new(1.0, 2.0)]), 0.0);
        assert!(closest_pair_points(&[Point::new(1.0, 2.0)]).is_none());
    }

    #[test]
    fn scenario_points() {
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
        assert!((closest_pair(&points) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn duplicates_are_at_distance_zero() {
        let points = vec![
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(9.0, 1.0),
            Point::new(5.0, 5.0),
            Point::new(3.0, 7.0),
            Point::new(8.0, 8.0),
        ];
        let (a, b, d) = closest_pair_points(&points).unwrap();
        assert_eq!(d, 0.0);
        assert_eq!(a, b);
        assert_eq!(a, Point::new(5.0, 5.0));
    }

    #[test]
    fn pair_straddles_the_split() {
        // Close pair sits on both sides of the median x.
        let mut points: Vec<Point> = (0..10).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect();
        points.push(Point::new(44.9, 3.0));
        points.push(Point::new(45.1, 3.0));
        let (_, _, d) = closest_pair_points(&points).unwrap();
        assert!((d - 0.2).abs() < 1e-9);
    }

    #[test]
    fn random_seeded_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in [2usize, 3, 5, 17, 64, 200] {
            let points: Vec<Point> = (0..n)
                .map(|_| Point::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
                .collect();
            assert_eq!(closest_pair(&points), brute_force(&points), "n={n}");
        }
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(
            raw in prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 2..200)
        ) {
            let points: Vec<Point> = raw.into_iter().map(|(x, y)| Point::new(x, y)).collect();
            prop_assert_eq!(closest_pair(&points), brute_force(&points));
        }

        #[test]
        fn prop_grid_matches_brute_force(
            raw in prop::collection::vec((0i32..20, 0i32..20), 2..200)
        ) {
            let points: Vec<Point> =
                raw.into_iter().map(|(x, y)| Point::new(x as f64, y as f64)).collect();
            prop_assert_eq!(closest_pair(&points), brute_force(&points));
        }
    }
}
