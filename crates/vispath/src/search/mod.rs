//! Uninformed and informed graph search over any `Problem`.
//!
//! Purpose
//! - One frontier-driven loop parameterized by `Strategy`: FIFO (BFS), LIFO
//!   (DFS), or a min-priority queue on path cost (UCS) or path cost plus
//!   heuristic (A*).
//!
//! Guarantees
//! - UCS and A* (with an admissible, consistent heuristic) return a
//!   minimum-cost path when step costs are non-negative. BFS minimizes the
//!   number of steps. DFS returns some path.
//! - Deterministic: ties break in insertion order.
//!
//! Negative edge weights belong to `crate::shortest_path`.

mod engine;
mod frontier;
mod path;
mod types;

pub use engine::{search, search_all, search_with_cfg};
pub use types::{Node, ParseStrategyError, SearchCfg, Solution, Strategy};
