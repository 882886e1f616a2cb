//! Error taxonomy.
//!
//! - `GeometryError`: malformed input detected while building a state space.
//! - `ProblemError`: a problem cannot be formulated over a built state space.
//! - `SearchError`: a search ran but produced no path.
//!
//! Build and formulation errors are fatal for their call; `SearchError` is an
//! ordinary outcome that callers are expected to branch on.

use thiserror::Error;

/// Invalid geometry or labeling found at construction time.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("vertex {index} repeats its predecessor")]
    RepeatedVertex { index: usize },
    #[error("boundary is not strictly convex at vertex {index}")]
    NotConvex { index: usize },
    #[error("boundary winds {turns} times around its interior")]
    SelfIntersecting { turns: i64 },
    #[error("obstacles `{first}` and `{second}` overlap")]
    Overlap { first: String, second: String },
    #[error("vertex label `{0}` is used twice")]
    DuplicateLabel(String),
    #[error("no vertex labeled `{0}`")]
    UnknownVertex(String),
    #[error("{0} vertex was never set")]
    MissingEndpoint(&'static str),
    #[error("{0} vertex is already set")]
    EndpointAlreadySet(&'static str),
}

/// A problem formulation that refers to invalid states.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ProblemError {
    #[error("no vertex labeled `{0}`")]
    UnknownVertex(String),
    #[error("vertex `{label}` lies strictly inside obstacle `{obstacle}`")]
    InsideObstacle { label: String, obstacle: String },
}

/// Failure outcomes of a search.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("no path found: frontier exhausted")]
    NoPathFound,
    #[error("negative-weight cycle through vertices {cycle:?}")]
    NegativeCycle { cycle: Vec<usize> },
    #[error("expansion budget exceeded after {expansions} expansions")]
    ExceededBudget { expansions: usize },
    #[error("vertex {vertex} is out of range for a graph with {len} vertices")]
    InvalidVertex { vertex: usize, len: usize },
}
