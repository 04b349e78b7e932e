//! Run every toolkit routine on a small fixed point set and print the results.
//!
//! Usage:
//!   cargo run -p planar --example toolkit_demo

use planar::prelude::*;

fn main() {
    let points: Vec<Point> = [
        (0.0, 0.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (2.0, 0.0),
        (2.0, 4.0),
        (3.0, 3.0),
        (0.0, 5.0),
        (4.0, 0.0),
    ]
    .iter()
    .map(|&(x, y)| Point::new(x, y))
    .collect();

    for algo in HullAlgo::ALL {
        println!("{algo} hull size: {}", algo.compute(&points).len());
    }
    let hull = graham_scan(&points);
    println!("polygon diameter: {:.6}", hull.diameter());
    println!("delaunay triangles: {}", triangulate(&points).len());
    println!(
        "segments intersect: {}",
        segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0)
        )
    );
    println!(
        "point inside hull polygon: {}",
        point_in_polygon(&hull.vertices, Point::new(1.0, 1.0))
    );
    println!("closest pair distance: {:.6}", closest_pair(&points));
    let bb = aabb(&points);
    println!("aabb min: ({}, {})", bb.min.x, bb.min.y);
    println!("aabb max: ({}, {})", bb.max.x, bb.max.y);
}
