//! Shortest routes on a visibility graph.

use crate::error::ProblemError;
use crate::geom2::point_in_polygon;
use crate::visibility::{StateSpace, VertexId};

use super::Problem;

/// Move between mutually visible vertices; cost is Euclidean length.
///
/// States are vertex ids and an action is the id of the vertex moved to.
/// The straight-line heuristic is admissible and consistent (triangle
/// inequality), so A* returns optimal routes.
#[derive(Clone, Copy, Debug)]
pub struct RouteProblem<'a> {
    space: &'a StateSpace,
    start: VertexId,
    goal: VertexId,
    informed: bool,
}

/// Formulate a route from `start` to `goal` (vertex labels) over `space`.
///
/// Fails if a label is unknown or names a point strictly inside an obstacle.
pub fn make_problem<'a>(
    space: &'a StateSpace,
    start: &str,
    goal: &str,
) -> Result<RouteProblem<'a>, ProblemError> {
    let start = endpoint(space, start)?;
    let goal = endpoint(space, goal)?;
    Ok(RouteProblem {
        space,
        start,
        goal,
        informed: true,
    })
}

fn endpoint(space: &StateSpace, label: &str) -> Result<VertexId, ProblemError> {
    let id = space
        .id_of(label)
        .ok_or_else(|| ProblemError::UnknownVertex(label.to_string()))?;
    let at = space.location(id);
    if let Some(o) = space
        .obstacles()
        .iter()
        .find(|o| point_in_polygon(at, &o.polygon, space.cfg()))
    {
        return Err(ProblemError::InsideObstacle {
            label: label.to_string(),
            obstacle: o.label.clone(),
        });
    }
    Ok(id)
}

impl<'a> RouteProblem<'a> {
    #[inline]
    pub fn space(&self) -> &'a StateSpace {
        self.space
    }

    #[inline]
    pub fn goal(&self) -> VertexId {
        self.goal
    }

    /// Same route with a zero heuristic.
    pub fn without_heuristic(self) -> Self {
        Self {
            informed: false,
            ..self
        }
    }

    /// Labels along a vertex sequence.
    pub fn labels(&self, states: &[VertexId]) -> Vec<&'a str> {
        states.iter().map(|&v| self.space.label(v)).collect()
    }
}

impl Problem for RouteProblem<'_> {
    type State = VertexId;
    type Action = VertexId;

    fn initial_state(&self) -> VertexId {
        self.start
    }

    fn actions(&self, state: &VertexId) -> Vec<VertexId> {
        self.space.neighbors(*state).map(|(v, _)| v).collect()
    }

    fn result(&self, _state: &VertexId, action: &VertexId) -> VertexId {
        *action
    }

    fn is_goal(&self, state: &VertexId) -> bool {
        *state == self.goal
    }

    /// Edge weight of `state → next`. Only pairs produced by `actions` are
    /// valid; other pairs fail a debug assertion and, in release builds,
    /// fall back to straight-line distance.
    fn step_cost(&self, state: &VertexId, _action: &VertexId, next: &VertexId) -> f64 {
        let weight = self.space.weight(*state, *next);
        debug_assert!(weight.is_some(), "no edge between {state:?} and {next:?}");
        weight.unwrap_or_else(|| self.space.distance(*state, *next))
    }

    fn heuristic(&self, state: &VertexId) -> f64 {
        if self.informed {
            self.space.distance(*state, self.goal)
        } else {
            0.0
        }
    }
}
