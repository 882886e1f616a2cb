//! Shortest routes among convex polygonal obstacles.
//!
//! Pipeline
//! - `geom2`: points, segments, validated convex polygons, strict predicates.
//! - `visibility`: labeled state space (obstacle corners plus start and goal)
//!   with boundary edges, asserted links and discovered visibility edges.
//! - `problem`: the `Problem` trait and the route formulation over a state space.
//! - `search`: BFS, DFS, uniform-cost and A* over any `Problem`.
//! - `shortest_path`: Bellman-Ford and Johnson for graphs with negative weights.
//!
//! Numerical policy
//! - All tolerance decisions go through `GeomCfg::eps`. Touching an obstacle
//!   (sharing a vertex, sliding along an edge) never blocks visibility; only
//!   passing through an open interior does.
//!
//! API Policy
//! - Pre-1.0. `api` and `prelude` are the supported import surfaces; module
//!   internals may move between releases.

pub mod api;
pub mod error;
pub mod geom2;
pub mod problem;
pub mod search;
pub mod shortest_path;
pub mod visibility;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeometryError, ProblemError, SearchError};
pub use geom2::{GeomCfg, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeometryError, ProblemError, SearchError};
    pub use crate::geom2::rand::{
        draw_obstacle_field, draw_polygon_radial, FieldCfg, ObstacleField, RadialCfg, ReplayToken,
        VertexCount,
    };
    pub use crate::geom2::{GeomCfg, Point, Polygon, Segment};
    pub use crate::problem::{make_problem, Problem, RouteProblem};
    pub use crate::search::{search, search_all, search_with_cfg, SearchCfg, Solution, Strategy};
    pub use crate::visibility::{build_state_space, BuildCfg, StateSpace, StateSpaceBuilder, VertexId};
    pub use nalgebra::Vector2 as Vec2;
}
