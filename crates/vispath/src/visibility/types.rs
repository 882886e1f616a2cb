//! Data types for the visibility graph.
//!
//! Kept small and explicit so `build` and the search domain stay easy to read.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::geom2::{GeomCfg, Point, Polygon};

/// Dense vertex index, assigned in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);
/// Obstacle index, assigned in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObstacleId(pub usize);

/// What a vertex stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexRole {
    Start,
    Goal,
    /// Corner `index` of obstacle `obstacle`.
    Corner { obstacle: ObstacleId, index: usize },
}

/// Labeled waypoint.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub label: String,
    pub at: Point,
    pub role: VertexRole,
}

/// How an edge entered the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Side of an obstacle polygon.
    Boundary,
    /// Asserted by the caller without a visibility test.
    Link,
    /// Discovered by the pairwise visibility test.
    Visibility,
}

/// Undirected weighted edge, reported with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub weight: f64,
    pub kind: EdgeKind,
}

/// Obstacle polygon together with the vertex ids of its corners.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub label: String,
    pub polygon: Polygon,
    pub corners: Vec<VertexId>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct EdgeData {
    pub weight: f64,
    pub kind: EdgeKind,
}

/// Immutable visibility graph over labeled vertices.
///
/// Adjacency lists keep insertion order (boundary, then links, then
/// discovered edges), which fixes the action order seen by every search.
#[derive(Clone, Debug)]
pub struct StateSpace {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) by_label: HashMap<String, VertexId>,
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) adj: Vec<IndexMap<VertexId, EdgeData>>,
    pub(crate) start: VertexId,
    pub(crate) goal: VertexId,
    pub(crate) cfg: GeomCfg,
}

impl StateSpace {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(IndexMap::len).sum::<usize>() / 2
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter().enumerate().map(|(i, v)| (VertexId(i), v))
    }

    #[inline]
    pub fn id_of(&self, label: &str) -> Option<VertexId> {
        self.by_label.get(label).copied()
    }

    #[inline]
    pub fn label(&self, id: VertexId) -> &str {
        &self.vertices[id.0].label
    }

    #[inline]
    pub fn location(&self, id: VertexId) -> Point {
        self.vertices[id.0].at
    }

    #[inline]
    pub fn start(&self) -> VertexId {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> VertexId {
        self.goal
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    /// Neighbors of `id` with edge weights, in adjacency order.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.adj[id.0].iter().map(|(&v, e)| (v, e.weight))
    }

    #[inline]
    pub fn degree(&self, id: VertexId) -> usize {
        self.adj[id.0].len()
    }

    #[inline]
    pub fn weight(&self, a: VertexId, b: VertexId) -> Option<f64> {
        self.adj.get(a.0)?.get(&b).map(|e| e.weight)
    }

    #[inline]
    pub fn edge_kind(&self, a: VertexId, b: VertexId) -> Option<EdgeKind> {
        self.adj.get(a.0)?.get(&b).map(|e| e.kind)
    }

    /// Every undirected edge once, ordered by `(a, adjacency position)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adj.iter().enumerate().flat_map(|(i, out)| {
            out.iter().filter(move |(v, _)| i < v.0).map(move |(&b, e)| Edge {
                a: VertexId(i),
                b,
                weight: e.weight,
                kind: e.kind,
            })
        })
    }

    /// Straight-line distance between two vertices.
    #[inline]
    pub fn distance(&self, a: VertexId, b: VertexId) -> f64 {
        (self.location(b) - self.location(a)).norm()
    }
}
