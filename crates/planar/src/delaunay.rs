//! Delaunay triangulation by Bowyer–Watson incremental insertion.
//!
//! Model
//! - A super-triangle enclosing every input point seeds the mesh. Its three
//!   vertices live at indices `n, n+1, n+2` of the working vertex buffer.
//! - Each insertion removes the triangles whose circumcircle strictly contains
//!   the new point, keeps the cavity boundary (edges not shared by two removed
//!   triangles), and fans the cavity from the new point.
//! - At the end every triangle referencing a super vertex is dropped by index.
//!
//! Numerics
//! - The in-circle test is the raw 3×3 lifted determinant (no normalization,
//!   no adaptive precision). Near-cocircular inputs may pick either diagonal.
//! - The super-triangle is finite, so hull edges whose circumcircle reaches past
//!   it can be missing from the output near the convex hull boundary.

use std::collections::HashMap;

use crate::bounds::aabb;
use crate::cfg::SUPER_TRIANGLE_SCALE;
use crate::primitives::{cross, dedup_exact};
use crate::Point;

/// Output triangle; vertices in CCW order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Whether `p` lies strictly inside this triangle's circumcircle.
    #[inline]
    pub fn circumcircle_contains(&self, p: Point) -> bool {
        in_circumcircle(self.a, self.b, self.c, p)
    }

    /// Center of the circumcircle; `None` for a degenerate (collinear) triangle.
    pub fn circumcenter(&self) -> Option<Point> {
        let b = self.b - self.a;
        let c = self.c - self.a;
        let d = 2.0 * (b.x * c.y - b.y * c.x);
        if d == 0.0 {
            return None;
        }
        let b2 = b.norm_squared();
        let c2 = c.norm_squared();
        let ux = (c.y * b2 - b.y * c2) / d;
        let uy = (b.x * c2 - c.x * b2) / d;
        Some(Point::new(self.a.x + ux, self.a.y + uy))
    }

    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * cross(self.a, self.b, self.c).abs()
    }
}

/// Strict in-circumcircle predicate for triangle `abc` (either orientation).
pub fn in_circumcircle(a: Point, b: Point, c: Point, p: Point) -> bool {
    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);
    let det = (ax * ax + ay * ay) * (bx * cy - cx * by) - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);
    let orient = cross(a, b, c);
    if orient > 0.0 {
        det > 0.0
    } else if orient < 0.0 {
        det < 0.0
    } else {
        false
    }
}

/// Vertex-index triangle, CCW.
#[derive(Clone, Copy, Debug)]
struct Tri {
    v: [usize; 3],
}

impl Tri {
    fn ccw(verts: &[Point], a: usize, b: usize, c: usize) -> Tri {
        if cross(verts[a], verts[b], verts[c]) < 0.0 {
            Tri { v: [a, c, b] }
        } else {
            Tri { v: [a, b, c] }
        }
    }
    #[inline]
    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.v;
        [(a, b), (b, c), (c, a)]
    }
}

/// Delaunay triangulation of `points`.
///
/// Exact duplicates are inserted once. Fewer than 3 distinct points: empty.
pub fn triangulate(points: &[Point]) -> Vec<Triangle> {
    let mut verts = dedup_exact(points);
    let n = verts.len();
    if n < 3 {
        return Vec::new();
    }
    verts.extend(super_triangle(&verts));

    let mut tris = vec![Tri::ccw(&verts, n, n + 1, n + 2)];
    let mut boundary: Vec<(usize, usize)> = Vec::new();
    let mut edge_count: HashMap<(usize, usize), u32> = HashMap::new();

    for ip in 0..n {
        let p = verts[ip];
        boundary.clear();
        edge_count.clear();
        tris.retain(|t| {
            let [a, b, c] = t.v;
            if in_circumcircle(verts[a], verts[b], verts[c], p) {
                for e in t.edges() {
                    *edge_count.entry(undirected(e)).or_insert(0) += 1;
                    boundary.push(e);
                }
                false
            } else {
                true
            }
        });
        for &(a, b) in &boundary {
            if edge_count.get(&undirected((a, b))) == Some(&1) {
                tris.push(Tri::ccw(&verts, a, b, ip));
            }
        }
    }

    let out: Vec<Triangle> = tris
        .into_iter()
        .filter(|t| t.v.iter().all(|&i| i < n))
        .map(|t| Triangle {
            a: verts[t.v[0]],
            b: verts[t.v[1]],
            c: verts[t.v[2]],
        })
        .collect();
    tracing::debug!(points = n, triangles = out.len(), "delaunay: done");
    out
}

#[inline]
fn undirected((a, b): (usize, usize)) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// CCW triangle strictly containing the bounding box of `points`.
fn super_triangle(points: &[Point]) -> [Point; 3] {
    let bb = aabb(points);
    let mid = bb.center();
    let spread = bb.width().max(bb.height());
    let d = if spread > 0.0 { spread } else { 1.0 } * SUPER_TRIANGLE_SCALE;
    [
        Point::new(mid.x - 2.0 * d, mid.y - d),
        Point::new(mid.x + 2.0 * d, mid.y - d),
        Point::new(mid.x, mid.y + 2.0 * d),
    ]
}
