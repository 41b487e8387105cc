//! FunnelGraph — petgraph DiGraph over funnel ids, plus component partitioning.
//!
//! Nodes are added in the order given, so a node's `NodeIndex` doubles as its
//! input position.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{Component, Edge};

/// Directed graph of funnel ids. Edge weights index into the edge slice the
/// graph was built from.
pub struct FunnelGraph {
    pub digraph: DiGraph<String, usize>,
    /// Maps funnel id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl FunnelGraph {
    /// Build a graph over `ids`. Edges with an endpoint outside `ids` are
    /// skipped; duplicate ids keep their first position.
    pub fn build<'a, I>(ids: I, edges: &[Edge]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut digraph: DiGraph<String, usize> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for id in ids {
            if !node_index.contains_key(id) {
                let idx = digraph.add_node(id.to_string());
                node_index.insert(id.to_string(), idx);
            }
        }

        for (i, edge) in edges.iter().enumerate() {
            let (Some(&src), Some(&tgt)) = (
                node_index.get(edge.source_id.as_str()),
                node_index.get(edge.target_id.as_str()),
            ) else {
                continue;
            };
            digraph.add_edge(src, tgt, i);
        }

        Self {
            digraph,
            node_index,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.digraph.node_indices().map(|idx| self.digraph[idx].as_str())
    }

    /// Number of edges ending at `id`, self-loops included.
    pub fn in_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self.digraph.edges_directed(idx, Direction::Incoming).count(),
        }
    }

    #[cfg(test)]
    pub fn out_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self.digraph.edges_directed(idx, Direction::Outgoing).count(),
        }
    }

    /// Partition the nodes into weakly connected components.
    ///
    /// Components are ordered by their earliest node and list their members
    /// in insertion order.
    pub fn components(&self) -> Vec<Component> {
        let mut visited = vec![false; self.digraph.node_count()];
        let mut components = Vec::new();

        for seed in self.digraph.node_indices() {
            if visited[seed.index()] {
                continue;
            }
            visited[seed.index()] = true;
            let mut members = vec![seed];
            let mut stack = vec![seed];
            while let Some(idx) = stack.pop() {
                for nb in self.digraph.neighbors_undirected(idx) {
                    if !visited[nb.index()] {
                        visited[nb.index()] = true;
                        members.push(nb);
                        stack.push(nb);
                    }
                }
            }
            members.sort_unstable();
            components.push(
                members
                    .into_iter()
                    .map(|idx| self.digraph[idx].clone())
                    .collect(),
            );
        }

        components
    }
}

/// Split `ids` into connected groups, treating every edge as undirected.
///
/// Every id lands in exactly one component; ids without edges are singletons.
pub fn partition_components<'a, I>(ids: I, edges: &[Edge]) -> Vec<Component>
where
    I: IntoIterator<Item = &'a str>,
{
    FunnelGraph::build(ids, edges).components()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
