//! The shared best-first search loop.
//!
//! Semantics (all strategies)
//! - The goal test runs when a node is removed from the frontier, so UCS and
//!   A* return a cheapest path under non-negative costs and a consistent
//!   heuristic.
//! - A state is expanded at most once; later frontier entries for an
//!   explored state are discarded on removal.
//! - BFS and DFS additionally never queue a state that is already waiting
//!   in the frontier. UCS and A* queue duplicates and let the cheaper entry
//!   win.
//! - Ties are broken by insertion order; actions are generated in the order
//!   `Problem::actions` returns them. Equal inputs give equal outputs.

use std::collections::HashSet;

use crate::error::SearchError;
use crate::problem::Problem;

use super::frontier::Frontier;
use super::path::reconstruct;
use super::types::{Node, SearchCfg, Solution, Strategy};

/// Search with the default configuration (no expansion budget).
pub fn search<P: Problem>(
    problem: &P,
    strategy: Strategy,
) -> Result<Solution<P::State, P::Action>, SearchError> {
    search_with_cfg(problem, strategy, SearchCfg::default())
}

/// Search from `problem.initial_state()` to the first goal state removed
/// from the frontier.
///
/// Errors: `NoPathFound` when the frontier empties, `ExceededBudget` when
/// `cfg.max_expansions` would be exceeded by one more expansion.
pub fn search_with_cfg<P: Problem>(
    problem: &P,
    strategy: Strategy,
    cfg: SearchCfg,
) -> Result<Solution<P::State, P::Action>, SearchError> {
    let out = Runner::new(problem, strategy, cfg).run();
    match &out {
        Ok(sol) => tracing::debug!(
            %strategy,
            cost = sol.cost,
            steps = sol.actions.len(),
            expanded = sol.nodes_expanded,
            "search finished"
        ),
        Err(e) => tracing::debug!(%strategy, error = %e, "search failed"),
    }
    out
}

/// Run every strategy on the same problem, in `Strategy::ALL` order.
pub fn search_all<P: Problem>(
    problem: &P,
    cfg: SearchCfg,
) -> Vec<(Strategy, Result<Solution<P::State, P::Action>, SearchError>)> {
    Strategy::ALL
        .iter()
        .map(|&s| (s, search_with_cfg(problem, s, cfg)))
        .collect()
}

struct Runner<'a, P: Problem> {
    problem: &'a P,
    strategy: Strategy,
    cfg: SearchCfg,
    nodes: Vec<Node<P::State, P::Action>>,
    frontier: Frontier,
    explored: HashSet<P::State>,
    queued: HashSet<P::State>,
    expanded: usize,
}

impl<'a, P: Problem> Runner<'a, P> {
    fn new(problem: &'a P, strategy: Strategy, cfg: SearchCfg) -> Self {
        Self {
            problem,
            strategy,
            cfg,
            nodes: Vec::new(),
            frontier: Frontier::for_strategy(strategy),
            explored: HashSet::new(),
            queued: HashSet::new(),
            expanded: 0,
        }
    }

    fn priority(&self, node: &Node<P::State, P::Action>) -> f64 {
        match self.strategy {
            Strategy::AStar => node.path_cost + self.problem.heuristic(&node.state),
            _ => node.path_cost,
        }
    }

    fn enqueue(&mut self, node: Node<P::State, P::Action>) {
        let priority = self.priority(&node);
        if self.strategy.skips_queued() {
            self.queued.insert(node.state.clone());
        }
        let id = self.nodes.len();
        self.nodes.push(node);
        self.frontier.push(id, priority);
    }

    fn run(mut self) -> Result<Solution<P::State, P::Action>, SearchError> {
        self.enqueue(Node {
            state: self.problem.initial_state(),
            parent: None,
            action: None,
            path_cost: 0.0,
            depth: 0,
        });
        while let Some(id) = self.frontier.pop() {
            let state = self.nodes[id].state.clone();
            self.queued.remove(&state);
            if self.problem.is_goal(&state) {
                let (states, actions) = reconstruct(&self.nodes, id);
                return Ok(Solution {
                    states,
                    actions,
                    cost: self.nodes[id].path_cost,
                    nodes_expanded: self.expanded,
                });
            }
            if self.explored.contains(&state) {
                continue;
            }
            if self.cfg.max_expansions.is_some_and(|m| self.expanded >= m) {
                return Err(SearchError::ExceededBudget {
                    expansions: self.expanded,
                });
            }
            self.expand(id, state);
        }
        Err(SearchError::NoPathFound)
    }

    fn expand(&mut self, id: usize, state: P::State) {
        let (cost, depth) = (self.nodes[id].path_cost, self.nodes[id].depth);
        tracing::trace!(state = ?state, cost, frontier = self.frontier.len(), "expand");
        for action in self.problem.actions(&state) {
            let next = self.problem.result(&state, &action);
            if self.explored.contains(&next) || next == state {
                continue;
            }
            if self.strategy.skips_queued() && self.queued.contains(&next) {
                continue;
            }
            let step = self.problem.step_cost(&state, &action, &next);
            self.enqueue(Node {
                state: next,
                parent: Some(id),
                action: Some(action),
                path_cost: cost + step,
                depth: depth + 1,
            });
        }
        self.explored.insert(state);
        self.expanded += 1;
    }
}
