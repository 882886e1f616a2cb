//! Strategy selection, search configuration, nodes and results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Frontier ordering. All four share one search loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
    ];

    /// Uninformed order-only strategies also refuse to queue a state twice.
    #[inline]
    pub(crate) fn skips_queued(self) -> bool {
        matches!(self, Strategy::BreadthFirst | Strategy::DepthFirst)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
            Strategy::UniformCost => "UCS",
            Strategy::AStar => "A*",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown strategy `{0}` (expected bfs, dfs, ucs or astar)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "ucs" | "uniform-cost" => Ok(Strategy::UniformCost),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchCfg {
    /// Fail with `ExceededBudget` instead of expanding more than this many nodes.
    pub max_expansions: Option<usize>,
}

/// Search-tree node. Parents are arena indices, so the tree owns no cycles
/// even when the state space does.
#[derive(Clone, Debug)]
pub struct Node<S, A> {
    pub state: S,
    pub parent: Option<usize>,
    /// Action that produced this node; `None` only at the root.
    pub action: Option<A>,
    pub path_cost: f64,
    pub depth: usize,
}

/// A successful search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution<S, A> {
    /// Initial state first, goal state last.
    pub states: Vec<S>,
    /// `actions[i]` leads from `states[i]` to `states[i + 1]`.
    pub actions: Vec<A>,
    pub cost: f64,
    pub nodes_expanded: usize,
}
