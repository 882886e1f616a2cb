//! Problem formulation: one capability trait shared by every domain.
//!
//! A domain implements `Problem`; the search engine never needs to know more
//! about it. The visibility-graph domain is `RouteProblem`.

mod route;

pub use route::{make_problem, RouteProblem};

use std::fmt::Debug;
use std::hash::Hash;

/// A search problem over states of type `State` connected by `Action`s.
///
/// Contract
/// - `step_cost` is non-negative for all strategies in `search`.
/// - `heuristic` defaults to zero, under which A* reduces to uniform cost.
/// - Actions are enumerated in a fixed order; the engine's determinism relies on it.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn initial_state(&self) -> Self::State;
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;
    fn is_goal(&self, state: &Self::State) -> bool;
    fn step_cost(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> f64;

    /// Estimated remaining cost from `state` to a goal.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests;
