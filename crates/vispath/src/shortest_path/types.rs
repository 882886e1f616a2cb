use crate::error::SearchError;
use crate::visibility::StateSpace;

/// Directed graph on vertices `0..n` with arbitrary-sign `f64` weights.
#[derive(Clone, Debug, Default)]
pub struct WeightedDigraph {
    adj: Vec<Vec<(usize, f64)>>,
}

impl WeightedDigraph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    /// Build from `(from, to, weight)` triples.
    pub fn from_edges(n: usize, edges: &[(usize, usize, f64)]) -> Result<Self, SearchError> {
        let mut g = Self::new(n);
        for &(u, v, w) in edges {
            g.add_edge(u, v, w)?;
        }
        Ok(g)
    }

    /// Both directions of every state-space edge, weighted by length.
    pub fn from_state_space(space: &StateSpace) -> Self {
        let adj = space
            .vertices()
            .map(|(id, _)| space.neighbors(id).map(|(v, w)| (v.0, w)).collect())
            .collect();
        Self { adj }
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<(), SearchError> {
        self.check(from)?;
        self.check(to)?;
        self.adj[from].push((to, weight));
        Ok(())
    }

    /// Append an isolated vertex and return its index.
    pub fn add_vertex(&mut self) -> usize {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    pub(crate) fn check(&self, v: usize) -> Result<(), SearchError> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(SearchError::InvalidVertex {
                vertex: v,
                len: self.adj.len(),
            })
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Outgoing `(to, weight)` pairs in insertion order.
    #[inline]
    pub fn out_edges(&self, v: usize) -> &[(usize, f64)] {
        &self.adj[v]
    }

    /// All edges as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, out)| out.iter().map(move |&(v, w)| (u, v, w)))
    }
}

/// Single-source distances and predecessor tree.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    pub(crate) source: usize,
    pub(crate) dist: Vec<f64>,
    pub(crate) pred: Vec<Option<usize>>,
}

impl ShortestPaths {
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// `None` when `v` is unreachable or out of range.
    pub fn distance(&self, v: usize) -> Option<f64> {
        self.dist.get(v).copied().filter(|d| d.is_finite())
    }

    /// Vertices from the source to `v`, both included.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.distance(v)?;
        Some(walk_back(&self.pred, self.source, v))
    }
}

/// Distances between every ordered pair.
#[derive(Clone, Debug, PartialEq)]
pub struct AllPairs {
    pub(crate) dist: Vec<Vec<f64>>,
    pub(crate) pred: Vec<Vec<Option<usize>>>,
}

impl AllPairs {
    #[inline]
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.dist
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.distance(from, to)?;
        Some(walk_back(&self.pred[from], from, to))
    }
}

fn walk_back(pred: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut cur = target;
    while cur != source {
        match pred[cur] {
            Some(p) => {
                path.push(p);
                cur = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
