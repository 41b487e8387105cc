//! Level assignment: multi-source BFS depth within one component.

use std::collections::VecDeque;

use petgraph::Direction;
use tracing::debug;

use super::graph::FunnelGraph;
use super::types::{Component, Edge, LevelMap};

/// Assign every member of `component` a depth.
///
/// Roots are members with no incoming edge inside the component. A component
/// without any (a closed cycle) gets its first member as the only root. From
/// the roots a breadth-first walk gives each newly reached node its parent's
/// level plus one. Members never reached stay at level 0.
///
/// The returned map lists members in component order.
pub fn assign_levels(component: &Component, edges: &[Edge]) -> LevelMap {
    let graph = FunnelGraph::build(component.iter().map(String::as_str), edges);
    let digraph = &graph.digraph;

    let mut roots: Vec<_> = digraph
        .node_indices()
        .filter(|&idx| graph.in_degree(&digraph[idx]) == 0)
        .collect();
    if roots.is_empty() {
        if let Some(first) = digraph.node_indices().next() {
            debug!(root = %digraph[first], "no entry point in component, forcing root");
            roots.push(first);
        }
    }

    let mut level: Vec<Option<usize>> = vec![None; digraph.node_count()];
    let mut queue: VecDeque<_> = VecDeque::new();
    for root in roots {
        level[root.index()] = Some(0);
        queue.push_back(root);
    }

    while let Some(idx) = queue.pop_front() {
        let next = level[idx.index()].unwrap_or(0) + 1;
        for succ in digraph.neighbors_directed(idx, Direction::Outgoing) {
            if level[succ.index()].is_none() {
                level[succ.index()] = Some(next);
                queue.push_back(succ);
            }
        }
    }

    digraph
        .node_indices()
        .map(|idx| (digraph[idx].clone(), level[idx.index()].unwrap_or(0)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_levels.rs"]
mod tests;
