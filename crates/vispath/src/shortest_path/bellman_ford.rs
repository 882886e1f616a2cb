//! Bellman-Ford with negative-cycle extraction.

use crate::error::SearchError;

use super::types::{ShortestPaths, WeightedDigraph};

/// Single-source shortest paths from `source`.
///
/// Fails with `NegativeCycle` if a negative cycle is reachable from
/// `source`; `cycle` lists its vertices in edge order, rotated to start at
/// the smallest index.
pub fn bellman_ford(graph: &WeightedDigraph, source: usize) -> Result<ShortestPaths, SearchError> {
    graph.check(source)?;
    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred = vec![None; n];
    dist[source] = 0.0;

    let mut settled = false;
    for round in 0..n.saturating_sub(1) {
        if relax_all(graph, &mut dist, &mut pred).is_none() {
            tracing::trace!(round, "bellman-ford converged");
            settled = true;
            break;
        }
    }
    if !settled {
        if let Some(last) = relax_all(graph, &mut dist, &mut pred) {
            let cycle = extract_cycle(&pred, last, n);
            tracing::debug!(source, ?cycle, "negative cycle");
            return Err(SearchError::NegativeCycle { cycle });
        }
    }
    Ok(ShortestPaths { source, dist, pred })
}

/// One pass over every edge; returns the last vertex improved, if any.
fn relax_all(graph: &WeightedDigraph, dist: &mut [f64], pred: &mut [Option<usize>]) -> Option<usize> {
    let mut last = None;
    for (u, v, w) in graph.edges() {
        if dist[u].is_finite() && dist[u] + w < dist[v] {
            dist[v] = dist[u] + w;
            pred[v] = Some(u);
            last = Some(v);
        }
    }
    last
}

/// Walking `n` predecessor steps from a vertex improved in round `n` lands
/// on a cycle of the predecessor graph.
fn extract_cycle(pred: &[Option<usize>], from: usize, n: usize) -> Vec<usize> {
    let mut x = from;
    for _ in 0..n {
        match pred[x] {
            Some(p) => x = p,
            None => break,
        }
    }
    let mut cycle = vec![x];
    let mut y = pred[x];
    while let Some(v) = y {
        if v == x || cycle.len() > n {
            break;
        }
        cycle.push(v);
        y = pred[v];
    }
    cycle.reverse();
    if let Some(pos) = cycle.iter().enumerate().min_by_key(|&(_, v)| *v).map(|(i, _)| i) {
        cycle.rotate_left(pos);
    }
    cycle
}
