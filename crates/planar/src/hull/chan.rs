use super::{graham_scan, prune_collinear, wraps_tighter, Hull};
use crate::primitives::{cross, dedup_exact, lowest_point};
use crate::Point;

/// Chan's output-sensitive hull, O(n log h).
///
/// Steps
/// - Sort points by (x, y) and split them into groups of `m` points.
/// - Hull every group with `graham_scan`.
/// - Jarvis-march across the group hulls from the lowest point; each step asks
///   every group for its tangent from the current vertex (binary search,
///   O(log m)) and keeps the tightest.
/// - If the march has not closed after `m` steps, the guess was too small
///   (h > m): double `m` and start over.
///
/// `m` starts at the smallest power of two with `m² ≥ n`.
pub fn chan(points: &[Point]) -> Hull {
    if points.len() < 3 {
        return Hull {
            vertices: points.to_vec(),
        };
    }
    let pts = dedup_exact(points);
    let n = pts.len();
    let mut m = 1usize;
    while m * m < n {
        m *= 2;
    }
    loop {
        let groups: Vec<Vec<Point>> = pts
            .chunks(m)
            .map(|chunk| graham_scan(chunk).into_vertices())
            .collect();
        match march(&groups, m) {
            Some(hull) => {
                return Hull {
                    vertices: prune_collinear(hull),
                }
            }
            // m >= n bounds every possible wrap; only drift can get here.
            None if m >= n => {
                tracing::debug!(n, m, "chan: march did not close at full group size");
                return graham_scan(&pts);
            }
            None => {
                tracing::debug!(n, m, next = m * 2, "chan: hull larger than m, doubling");
                m *= 2;
            }
        }
    }
}

/// Position of a hull vertex: (group, index within the group hull).
type Slot = (usize, usize);

/// Wrap around the group hulls from their lowest vertex; `None` if more than
/// `max_steps` are needed.
fn march(groups: &[Vec<Point>], max_steps: usize) -> Option<Vec<Point>> {
    let tops: Vec<Point> = groups.concat();
    let start = tops[lowest_point(&tops)?];
    let mut at: Slot = groups
        .iter()
        .enumerate()
        .find_map(|(g, hull)| hull.iter().position(|&p| p == start).map(|i| (g, i)))?;
    let mut hull = Vec::new();
    let mut steps = 0usize;
    loop {
        let cur = groups[at.0][at.1];
        hull.push(cur);
        let mut next: Option<Slot> = None;
        for (g, group) in groups.iter().enumerate() {
            let cand = if g == at.0 {
                successor(group, at.1)
            } else {
                group_tangent(group, cur)
            };
            let Some(k) = cand else { continue };
            next = match next {
                Some((bg, bk)) if !wraps_tighter(cur, groups[bg][bk], group[k]) => Some((bg, bk)),
                _ => Some((g, k)),
            };
        }
        let Some(next) = next else {
            // Single distinct point.
            return Some(hull);
        };
        steps += 1;
        if steps > max_steps {
            return None;
        }
        if groups[next.0][next.1] == start {
            return Some(hull);
        }
        at = next;
    }
}

/// Next CCW vertex of a group hull that `cur` belongs to; every vertex of the
/// group lies left of (or on) that edge.
fn successor(group: &[Point], i: usize) -> Option<usize> {
    (group.len() > 1).then(|| (i + 1) % group.len())
}

/// Tightest wrap candidate from an outside point `cur` on one group hull.
///
/// Binary search on hulls of 3+ vertices; the hit is confirmed against its two
/// neighbours (on a convex polygon a local tangent is the global one) and the
/// linear scan takes over when rounding defeats the search.
fn group_tangent(group: &[Point], cur: Point) -> Option<usize> {
    let m = group.len();
    if m < 3 {
        return linear_tangent(group, cur);
    }
    let k = tangent_search(group, cur);
    let (prev, next) = (group[(k + m - 1) % m], group[(k + 1) % m]);
    if group[k] != cur && !wraps_tighter(cur, group[k], prev) && !wraps_tighter(cur, group[k], next)
    {
        Some(k)
    } else {
        linear_tangent(group, cur)
    }
}

/// O(log m) search for the vertex `k` of a strictly convex CCW polygon that is
/// most clockwise as seen from the outside point `p`.
///
/// Walking the polygon, the step `i → i+1` turns clockwise around `p` on one
/// contiguous arc and counter-clockwise on the other; `k` is where the
/// clockwise arc ends. Relative to vertex 0, the indices past `k` (or before
/// it, depending on how vertex 0 steps) form a suffix that the sides of
/// `p → v0` separate from the rest, which makes the predicate below monotone.
fn tangent_search(group: &[Point], p: Point) -> usize {
    let m = group.len();
    let step_cw = |i: usize| cross(p, group[i], group[(i + 1) % m]) < 0.0;
    let cw_of_v0 = |i: usize| cross(p, group[0], group[i]) < 0.0;
    let at_or_past_k = |i: usize| {
        if step_cw(0) {
            // v0 opens the clockwise arc: [1, k) keeps stepping cw from v0.
            !(step_cw(i) && cw_of_v0(i))
        } else {
            // v0 is on the ccw arc: the arc's head [k, m) lies cw of v0.
            !step_cw(i) && cw_of_v0(i)
        }
    };
    let (mut lo, mut hi) = (1usize, m);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if at_or_past_k(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    if lo == m {
        0
    } else {
        lo
    }
}

/// Reference scan over every vertex; used for tiny groups and as the fallback.
fn linear_tangent(group: &[Point], cur: Point) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &cand) in group.iter().enumerate() {
        if cand == cur {
            continue;
        }
        best = match best {
            Some(b) if !wraps_tighter(cur, group[b], cand) => Some(b),
            _ => Some(i),
        };
    }
    best
}
