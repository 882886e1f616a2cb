//! 2D geometry kernel.
//!
//! Purpose
//! - Validated convex polygons (`Polygon`) carrying both their vertex loop
//!   and outward half-spaces (`Hs2`).
//! - The two visibility predicates, `segments_intersect` and
//!   `point_in_polygon`, plus the interior clip used for vertex-grazing chords.
//! - One tolerance (`GeomCfg::eps`) shared by every predicate.
//!
//! Code cross-refs: `visibility::build` is the only heavy consumer.

mod polygon;
mod predicates;
pub mod rand;
mod types;
mod util;

pub use polygon::Polygon;
pub use predicates::{orientation, point_in_polygon, segment_crosses_interior, segments_intersect};
pub use types::{GeomCfg, Hs2, Orientation, Point, Segment};
pub use util::from_points_convex_hull;
