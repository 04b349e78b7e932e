use super::{prune_collinear, Hull};
use crate::cfg::EPS;
use crate::primitives::{cross, dedup_exact, dist_sq, lowest_point};
use crate::Point;

/// Graham scan around the lowest point (min y, tie min x).
///
/// Steps
/// - Sort the other points by `(angle, distance)` around the pivot. Both keys
///   are plain floats compared with `total_cmp`, so the order is total.
/// - Collapse each near-collinear ray (|cross| < EPS against the ray's
///   farthest point so far, same side of the pivot) to its farthest point.
/// - Stack scan, popping while the top two and the new point fail to turn left.
///
/// The returned hull starts at the pivot unless pruning removed it (flat clouds).
pub fn graham_scan(points: &[Point]) -> Hull {
    if points.len() < 3 {
        return Hull {
            vertices: points.to_vec(),
        };
    }
    let mut pts = dedup_exact(points);
    let Some(lo) = lowest_point(&pts) else {
        return Hull::default();
    };
    pts.swap(0, lo);
    let pivot = pts[0];

    // Every point is in the closed upper half-plane of the pivot: angles in [0, π].
    let mut keyed: Vec<(f64, f64, Point)> = pts[1..]
        .iter()
        .map(|&p| {
            let d = p - pivot;
            (d.y.atan2(d.x), d.norm_squared(), p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let filtered = collapse_rays(pivot, keyed.into_iter().map(|(_, _, p)| p));

    let mut hull: Vec<Point> = Vec::with_capacity(filtered.len());
    for p in filtered {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    Hull {
        vertices: prune_collinear(hull),
    }
}

/// Keep the farthest point of every run of angle-sorted points that share a
/// ray from the pivot (see [`same_ray`]). The pivot leads the result.
///
/// Sorting by rounded angles can put a nearer point after a farther one on
/// the same ray, so each run tracks its farthest member instead of its last.
fn collapse_rays(pivot: Point, sorted: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut out = vec![pivot];
    let mut ray: Option<Point> = None;
    for p in sorted {
        match ray {
            Some(far) if same_ray(pivot, far, p) => {
                if dist_sq(pivot, p) > dist_sq(pivot, far) {
                    ray = Some(p);
                }
            }
            Some(far) => {
                out.push(far);
                ray = Some(p);
            }
            None => ray = Some(p),
        }
    }
    out.extend(ray);
    out
}

/// `p` is collinear with `pivot → far` within `EPS` and on the same side of
/// the pivot; a flat cloud can have |cross| < EPS across the whole half-plane.
#[inline]
fn same_ray(pivot: Point, far: Point, p: Point) -> bool {
    cross(pivot, far, p).abs() < EPS && (far - pivot).dot(&(p - pivot)) > 0.0
}
