//! Johnson's all-pairs algorithm.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::SearchError;

use super::bellman_ford::bellman_ford;
use super::types::{AllPairs, WeightedDigraph};

/// Dijkstra queue entry.
#[derive(Clone, Copy, Debug)]
struct DijkstraState {
    cost: f64,
    node: usize,
}

impl PartialEq for DijkstraState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraState {}

impl Ord for DijkstraState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for DijkstraState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// All-pairs shortest paths on a graph that may carry negative weights.
///
/// Potentials `h` come from Bellman-Ford on the graph plus a virtual source
/// joined to every vertex by a zero edge. Reweighted edges
/// `w + h(u) - h(v)` are non-negative, so one Dijkstra per source suffices.
pub fn johnson(graph: &WeightedDigraph) -> Result<AllPairs, SearchError> {
    let n = graph.len();
    let mut augmented = graph.clone();
    let q = augmented.add_vertex();
    for v in 0..n {
        augmented.add_edge(q, v, 0.0)?;
    }
    // `q` has no incoming edges, so it never lies on a cycle.
    let h = bellman_ford(&augmented, q)?.dist;

    let mut dist = Vec::with_capacity(n);
    let mut pred = Vec::with_capacity(n);
    for s in 0..n {
        let (d, p) = dijkstra(graph, &h, s);
        let row = d
            .iter()
            .enumerate()
            .map(|(t, &x)| if x.is_finite() { x - h[s] + h[t] } else { x })
            .collect();
        dist.push(row);
        pred.push(p);
    }
    tracing::debug!(vertices = n, edges = graph.edge_count(), "johnson done");
    Ok(AllPairs { dist, pred })
}

/// Dijkstra on weights reweighted by potentials `h`.
fn dijkstra(graph: &WeightedDigraph, h: &[f64], source: usize) -> (Vec<f64>, Vec<Option<usize>>) {
    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred = vec![None; n];
    let mut heap = BinaryHeap::new();
    dist[source] = 0.0;
    heap.push(DijkstraState {
        cost: 0.0,
        node: source,
    });
    while let Some(DijkstraState { cost, node }) = heap.pop() {
        if cost > dist[node] {
            continue;
        }
        for &(next, w) in graph.out_edges(node) {
            // Rounding can leave a reweighted edge a hair below zero.
            let reweighted = (w + h[node] - h[next]).max(0.0);
            let alt = cost + reweighted;
            if alt < dist[next] {
                dist[next] = alt;
                pred[next] = Some(node);
                heap.push(DijkstraState {
                    cost: alt,
                    node: next,
                });
            }
        }
    }
    (dist, pred)
}
