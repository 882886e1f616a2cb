//! Curated API.
//!
//! One flat import surface over the modules; the prelude is the short form.

// 2D geometry
pub use crate::geom2::{
    from_points_convex_hull, orientation, point_in_polygon, segment_crosses_interior,
    segments_intersect, GeomCfg, Hs2, Orientation, Point, Polygon, Segment,
};
// Random obstacles
pub use crate::geom2::rand::{
    draw_obstacle_field, draw_polygon_radial, FieldCfg, ObstacleField, RadialCfg, ReplayToken,
    VertexCount,
};
// State space
pub use crate::visibility::{
    build_state_space, BuildCfg, Edge, EdgeKind, Obstacle, ObstacleId, StateSpace,
    StateSpaceBuilder, Vertex, VertexId, VertexRole,
};
// Problems and search
pub use crate::problem::{make_problem, Problem, RouteProblem};
pub use crate::search::{
    search, search_all, search_with_cfg, Node, ParseStrategyError, SearchCfg, Solution, Strategy,
};
// Negative weights
pub use crate::shortest_path::{bellman_ford, johnson, AllPairs, ShortestPaths, WeightedDigraph};
// Errors
pub use crate::error::{GeometryError, ProblemError, SearchError};
