//! Visibility graph: builders and the immutable `StateSpace`.
//!
//! Purpose
//! - Turn convex obstacles plus labeled start/goal points into a weighted,
//!   undirected graph whose edges are mutually visible vertex pairs.
//! - Also accept caller-asserted links and a visibility-free mode, so a
//!   hand-drawn environment can be reproduced exactly.
//!
//! Code cross-refs: `geom2::{segments_intersect, segment_crosses_interior}`,
//! `problem::RouteProblem`.

mod build;
mod types;

pub use build::{build_state_space, BuildCfg, StateSpaceBuilder};
pub use types::{Edge, EdgeKind, Obstacle, ObstacleId, StateSpace, Vertex, VertexId, VertexRole};
