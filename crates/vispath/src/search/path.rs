//! Solution path reconstruction from the node arena.

use super::types::Node;

/// States from the root to `leaf` and the actions between them.
pub(crate) fn reconstruct<S: Clone, A: Clone>(nodes: &[Node<S, A>], leaf: usize) -> (Vec<S>, Vec<A>) {
    let mut states = Vec::with_capacity(nodes[leaf].depth + 1);
    let mut actions = Vec::with_capacity(nodes[leaf].depth);
    let mut cur = Some(leaf);
    while let Some(i) = cur {
        let n = &nodes[i];
        states.push(n.state.clone());
        if let Some(a) = &n.action {
            actions.push(a.clone());
        }
        cur = n.parent;
    }
    states.reverse();
    actions.reverse();
    (states, actions)
}
