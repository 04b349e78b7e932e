//! Convex hulls of planar point sets (three constructions, one result type).
//!
//! Purpose
//! - `graham_scan`: sort-and-scan, O(n log n).
//! - `jarvis_march`: gift wrapping, O(n h); fast when the hull is small.
//! - `chan`: Graham on groups + Jarvis merge with binary-searched tangents,
//!   O(n log h).
//!
//! Conventions
//! - All three take `&[Point]` and return a fresh [`Hull`]; the input order is
//!   never touched.
//! - Output is strictly CCW with collinear vertices pruned. The three
//!   constructions agree on the vertex set and may differ in starting vertex.
//! - Fewer than 3 input points: the hull is the input unchanged.
//! - Exact duplicates are ignored. Wrap and scan decisions use exact cross
//!   signs; afterwards every construction prunes vertices that are collinear
//!   with their neighbours within `EPS`.

mod chan;
mod graham;
mod jarvis;

use std::fmt;
use std::str::FromStr;

use crate::cfg::EPS;
use crate::polygon::signed_area;
use crate::primitives::cross;
use crate::Point;

pub use chan::chan;
pub use graham::graham_scan;
pub use jarvis::jarvis_march;

/// Convex polygon in CCW order without collinear vertices.
///
/// Invariants (for inputs of 3+ points that are not all collinear):
/// - Consecutive triples make strict left turns.
/// - Every input point lies on or inside the polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    pub vertices: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// On-or-inside test with slack `eps` on each edge's cross product.
    ///
    /// Only meaningful for hulls of at least 3 vertices.
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        (0..n).all(|i| cross(self.vertices[i], self.vertices[(i + 1) % n], p) >= -eps)
    }

    /// Farthest vertex pair distance (rotating calipers).
    #[inline]
    pub fn diameter(&self) -> f64 {
        crate::calipers::diameter(&self.vertices)
    }

    /// Enclosed area (non-negative for a CCW hull).
    #[inline]
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| (self.vertices[(i + 1) % n] - self.vertices[i]).norm())
            .sum()
    }
}

/// Selector for the hull construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullAlgo {
    Graham,
    Jarvis,
    Chan,
}

impl HullAlgo {
    pub const ALL: [HullAlgo; 3] = [HullAlgo::Graham, HullAlgo::Jarvis, HullAlgo::Chan];

    pub fn compute(self, points: &[Point]) -> Hull {
        match self {
            HullAlgo::Graham => graham_scan(points),
            HullAlgo::Jarvis => jarvis_march(points),
            HullAlgo::Chan => chan(points),
        }
    }
}

impl fmt::Display for HullAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HullAlgo::Graham => "graham",
            HullAlgo::Jarvis => "jarvis",
            HullAlgo::Chan => "chan",
        };
        f.write_str(s)
    }
}

impl FromStr for HullAlgo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graham" => Ok(HullAlgo::Graham),
            "jarvis" => Ok(HullAlgo::Jarvis),
            "chan" => Ok(HullAlgo::Chan),
            other => Err(format!(
                "unknown hull algorithm `{other}` (expected graham, jarvis, or chan)"
            )),
        }
    }
}

/// Wrap-step rule shared by Jarvis and Chan: should `cand` replace `best` as
/// the successor of `cur`?
///
/// `cand` wins when it lies strictly clockwise of `cur → best`, or when the
/// three are exactly collinear, `cand` points the same way as `best`, and it is
/// farther from `cur`. Signs are exact so the choice is transitive; tolerance
/// is applied afterwards by [`prune_collinear`].
#[inline]
pub(crate) fn wraps_tighter(cur: Point, best: Point, cand: Point) -> bool {
    let c = cross(cur, best, cand);
    if c < 0.0 {
        return true;
    }
    let (to_best, to_cand) = (best - cur, cand - cur);
    c == 0.0 && to_cand.dot(&to_best) > 0.0 && to_cand.norm_squared() > to_best.norm_squared()
}

/// Drop hull vertices that sit between their neighbours within `EPS`
/// (|cross| < EPS and the walk keeps its direction). Tips of thin hulls stay.
pub(crate) fn prune_collinear(mut v: Vec<Point>) -> Vec<Point> {
    loop {
        let before = v.len();
        let mut i = 0;
        while v.len() >= 3 && i < v.len() {
            let n = v.len();
            let (a, b, c) = (v[(i + n - 1) % n], v[i], v[(i + 1) % n]);
            if cross(a, b, c).abs() < EPS && (b - a).dot(&(c - b)) > 0.0 {
                v.remove(i);
                i = i.saturating_sub(1);
            } else {
                i += 1;
            }
        }
        if v.len() == before {
            return v;
        }
    }
}
