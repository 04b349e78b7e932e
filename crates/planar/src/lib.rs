//! Planar geometry toolkit: hulls, calipers, Delaunay, and small predicates.
//!
//! Every routine is a pure function over an in-memory point slice. Inputs are
//! never mutated; results are freshly owned values.
//!
//! Conventions
//! - Points are `nalgebra::Point2<f64>` (re-exported as [`Point`]).
//! - Orientation predicates share one tolerance, [`cfg::EPS`].
//! - Degenerate inputs map to defined fallbacks (echo input, 0, empty), never panics.

pub mod bounds;
pub mod calipers;
pub mod cfg;
pub mod closest;
pub mod delaunay;
pub mod hull;
pub mod polygon;
pub mod primitives;
pub mod sample;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A point in the plane.
pub type Point = nalgebra::Point2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bounds::{aabb, Aabb};
    pub use crate::calipers::{diameter, diameter_pair};
    pub use crate::closest::{closest_pair, closest_pair_points};
    pub use crate::delaunay::{triangulate, Triangle};
    pub use crate::hull::{chan, graham_scan, jarvis_march, Hull, HullAlgo};
    pub use crate::polygon::{point_in_polygon, signed_area};
    pub use crate::sample::{draw_points, PointCloudCfg, ReplayToken, Shape};
    pub use crate::segment::{segment_intersection_point, segments_intersect};
    pub use crate::Point;
}
