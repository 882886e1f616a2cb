//! Shortest paths with negative edge weights.
//!
//! Purpose
//! - The best-first engine in `crate::search` assumes non-negative step
//!   costs. Directed graphs with arbitrary-sign weights go through
//!   Bellman-Ford (single source, negative-cycle detection) or Johnson
//!   (all pairs: Bellman-Ford potentials, then Dijkstra on reweighted edges).
//!
//! Notes
//! - A negative cycle is reported only when it is reachable from the source
//!   (Bellman-Ford) or anywhere in the graph (Johnson).
//! - Vertices are plain indices `0..n`; `WeightedDigraph::from_state_space`
//!   keeps `VertexId` numbering.

mod bellman_ford;
mod johnson;
mod types;

pub use bellman_ford::bellman_ford;
pub use johnson::johnson;
pub use types::{AllPairs, ShortestPaths, WeightedDigraph};
