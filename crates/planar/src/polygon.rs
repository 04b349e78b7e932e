//! Simple-polygon queries: crossing-number membership and shoelace area.

use crate::Point;

/// Ray-casting point-in-polygon test.
///
/// Casts a horizontal ray to +x and toggles on every edge it crosses. Points
/// exactly on the boundary or level with a vertex get whatever the crossing
/// count yields; the answer is deterministic but not specified. Self-
/// intersecting input is accepted (even-odd rule). Empty polygon: `false`.
pub fn point_in_polygon(polygon: &[Point], p: Point) -> bool {
    let n = polygon.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace signed area; positive for CCW vertex order.
pub fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let a = polygon[i];
            let b = polygon[(i + 1) % n];
            a.x * b.y - a.y * b.x
        })
        .sum();
    0.5 * twice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ]
    }

    #[test]
    fn square_inside_outside() {
        let sq = square();
        assert!(point_in_polygon(&sq, Point::new(2.0, 2.0)));
        assert!(!point_in_polygon(&sq, Point::new(5.0, 5.0)));
        assert!(!point_in_polygon(&sq, Point::new(-1.0, 2.0)));
        assert!(!point_in_polygon(&[], Point::new(0.0, 0.0)));
    }

    #[test]
    fn concave_notch() {
        // U shape: the notch (2, 3) is outside, the arms are inside.
        let u = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        assert!(!point_in_polygon(&u, Point::new(2.0, 3.0)));
        assert!(point_in_polygon(&u, Point::new(0.5, 3.0)));
        assert!(point_in_polygon(&u, Point::new(3.5, 3.0)));
        assert!(point_in_polygon(&u, Point::new(2.0, 0.5)));
    }

    #[test]
    fn orientation_sign_of_area() {
        let mut sq = square();
        assert!((signed_area(&sq) - 16.0).abs() < 1e-12);
        sq.reverse();
        assert!((signed_area(&sq) + 16.0).abs() < 1e-12);
        assert_eq!(signed_area(&sq[..2]), 0.0);
    }
}
