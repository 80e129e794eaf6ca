//! Task-precedence graph.
//!
//! A directed graph over task oids where an edge `a -> b` means task
//! `a` must precede task `b`. The graph stores a node set and one
//! successor set per node; it answers existence and count queries only.
//! Cycle detection and topological traversal belong to the scheduler
//! consuming the model.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::repository::Oid;

/// Directed precedence graph over task oids.
///
/// Edges are simple (no multigraph semantics): inserting the same edge
/// twice is a no-op. Edge insertion auto-creates missing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrecedenceGraph {
    nodes: BTreeSet<Oid>,
    successors: BTreeMap<Oid, BTreeSet<Oid>>,
}

impl PrecedenceGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Idempotent.
    pub fn add_node(&mut self, node: Oid) {
        self.nodes.insert(node);
    }

    /// Adds a directed edge `from -> to`, creating missing endpoints.
    pub fn add_edge(&mut self, from: Oid, to: Oid) {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.successors.entry(from).or_default().insert(to);
    }

    /// Whether the node is present.
    pub fn has_node(&self, node: Oid) -> bool {
        self.nodes.contains(&node)
    }

    /// Whether the directed edge `from -> to` is present.
    pub fn has_edge(&self, from: Oid, to: Oid) -> bool {
        self.successors
            .get(&from)
            .is_some_and(|set| set.contains(&to))
    }

    /// Iterates the direct successors of a node.
    pub fn successors(&self, node: Oid) -> impl Iterator<Item = Oid> + '_ {
        self.successors.get(&node).into_iter().flatten().copied()
    }

    /// Iterates all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = Oid> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.successors.values().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let g = PrecedenceGraph::new();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_node(1));
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut g = PrecedenceGraph::new();
        g.add_edge(1, 2);

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_node(1));
        assert!(g.has_node(2));
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(2, 1));
    }

    #[test]
    fn test_duplicate_edge_is_idempotent() {
        let mut g = PrecedenceGraph::new();
        g.add_edge(1, 2);
        g.add_edge(1, 2);

        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_successors() {
        let mut g = PrecedenceGraph::new();
        g.add_edge(1, 2);
        g.add_edge(1, 3);
        g.add_edge(2, 3);

        let succ: Vec<Oid> = g.successors(1).collect();
        assert_eq!(succ, vec![2, 3]);
        assert_eq!(g.successors(3).count(), 0);
        assert_eq!(g.successors(99).count(), 0);
    }

    #[test]
    fn test_isolated_node() {
        let mut g = PrecedenceGraph::new();
        g.add_node(5);
        g.add_node(5);

        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert!(g.has_node(5));
    }

    #[test]
    fn test_node_iteration_is_sorted() {
        let mut g = PrecedenceGraph::new();
        g.add_edge(20, 10);
        g.add_node(5);

        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![5, 10, 20]);
    }
}
