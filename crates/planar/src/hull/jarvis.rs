use super::{prune_collinear, wraps_tighter, Hull};
use crate::primitives::dedup_exact;
use crate::Point;

/// Jarvis march (gift wrapping) from the leftmost point (tie: lowest y).
///
/// Each step scans every point and keeps the candidate that leaves no point
/// strictly clockwise of the current edge, preferring the farther point on
/// collinear ties. Costs O(n·h). A wrap that fails to close within n steps
/// (rounding on near-degenerate input) is redone by `graham_scan`.
pub fn jarvis_march(points: &[Point]) -> Hull {
    if points.len() < 3 {
        return Hull {
            vertices: points.to_vec(),
        };
    }
    // Sorted by (x, y): index 0 is the leftmost-lowest point.
    let pts = dedup_exact(points);
    let n = pts.len();
    if n < 2 {
        return Hull { vertices: pts };
    }
    let start = 0usize;
    let mut hull: Vec<Point> = Vec::new();
    let mut p = start;
    loop {
        hull.push(pts[p]);
        let mut q = (p + 1) % n;
        for i in 0..n {
            if i != p && wraps_tighter(pts[p], pts[q], pts[i]) {
                q = i;
            }
        }
        p = q;
        if p == start {
            return Hull {
                vertices: prune_collinear(hull),
            };
        }
        // A wrap visits each point at most once; more steps means float drift.
        if hull.len() >= n {
            tracing::debug!(n, "jarvis: wrap did not close, using graham");
            return super::graham_scan(&pts);
        }
    }
}
