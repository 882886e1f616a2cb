//! Frontier containers keyed by strategy.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::types::Strategy;

/// Priority queue entry; `seq` breaks ties in insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    priority: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes (arena indices) awaiting expansion.
#[derive(Debug)]
pub(crate) enum Frontier {
    Fifo(VecDeque<usize>),
    Lifo(Vec<usize>),
    Priority { heap: BinaryHeap<Entry>, seq: u64 },
}

impl Frontier {
    pub(crate) fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Strategy::DepthFirst => Frontier::Lifo(Vec::new()),
            Strategy::UniformCost | Strategy::AStar => Frontier::Priority {
                heap: BinaryHeap::new(),
                seq: 0,
            },
        }
    }

    /// `priority` is ignored by the FIFO and LIFO variants.
    pub(crate) fn push(&mut self, node: usize, priority: f64) {
        match self {
            Frontier::Fifo(q) => q.push_back(node),
            Frontier::Lifo(s) => s.push(node),
            Frontier::Priority { heap, seq } => {
                heap.push(Entry {
                    priority,
                    seq: *seq,
                    node,
                });
                *seq += 1;
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Fifo(q) => q.pop_front(),
            Frontier::Lifo(s) => s.pop(),
            Frontier::Priority { heap, .. } => heap.pop().map(|e| e.node),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Fifo(q) => q.len(),
            Frontier::Lifo(s) => s.len(),
            Frontier::Priority { heap, .. } => heap.len(),
        }
    }
}
