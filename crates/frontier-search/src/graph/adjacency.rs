use std::collections::BTreeMap;

use crate::traits::{Graph, WeightedGraph};
use crate::NodeId;

/// A directed edge with its traversal cost.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: NodeId,
    pub cost: f64,
}

/// A general directed, weighted graph stored as adjacency lists.
///
/// Neighbours are reported in the order their edges were first added.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyGraph {
    edges: BTreeMap<NodeId, Vec<Edge>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to, cost)` triples.
    pub fn from_edges(edges: impl IntoIterator<Item = (u32, u32, f64)>) -> Self {
        let mut g = Self::new();
        for (from, to, cost) in edges {
            g.add_edge(NodeId(from), NodeId(to), cost);
        }
        g
    }

    /// Add an isolated node. Does nothing if it already exists.
    pub fn add_node(&mut self, node: NodeId) {
        self.edges.entry(node).or_default();
    }

    /// Add the edge `from -> to`, or update its cost if it already exists.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: f64) {
        self.add_node(to);
        let out = self.edges.entry(from).or_default();
        match out.iter_mut().find(|e| e.to == to) {
            Some(e) => e.cost = cost,
            None => out.push(Edge { to, cost }),
        }
    }

    /// Add `a -> b` and `b -> a` with the same cost.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, cost: f64) {
        self.add_edge(a, b, cost);
        self.add_edge(b, a, cost);
    }

    /// Remove the edge `from -> to`. Returns whether it existed.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        let Some(out) = self.edges.get_mut(&from) else {
            return false;
        };
        let before = out.len();
        out.retain(|e| e.to != to);
        out.len() != before
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.edges.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Every node, in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.keys().copied()
    }

    /// Outgoing edges of `node`.
    pub fn edges(&self, node: NodeId) -> &[Edge] {
        self.edges.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Graph for AdjacencyGraph {
    fn neighbours(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        buf.extend(self.edges(node).iter().map(|e| e.to));
    }
}

impl WeightedGraph for AdjacencyGraph {
    fn cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edges(from).iter().find(|e| e.to == to).map(|e| e.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_in_insertion_order() {
        let g = AdjacencyGraph::from_edges([(0, 3, 1.0), (0, 1, 2.0), (0, 2, 3.0)]);
        let mut buf = Vec::new();
        g.neighbours(NodeId(0), &mut buf);
        assert_eq!(buf, vec![NodeId(3), NodeId(1), NodeId(2)]);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn unknown_node_has_no_neighbours() {
        let g = AdjacencyGraph::from_edges([(0, 1, 1.0)]);
        let mut buf = Vec::new();
        g.neighbours(NodeId(9), &mut buf);
        assert!(buf.is_empty());
        assert_eq!(g.cost(NodeId(9), NodeId(0)), None);
    }

    #[test]
    fn add_edge_updates_cost() {
        let mut g = AdjacencyGraph::new();
        g.add_edge(NodeId(0), NodeId(1), 4.0);
        g.add_edge(NodeId(0), NodeId(1), 2.5);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.cost(NodeId(0), NodeId(1)), Some(2.5));
        assert_eq!(g.cost(NodeId(1), NodeId(0)), None);
    }

    #[test]
    fn undirected_and_remove() {
        let mut g = AdjacencyGraph::new();
        g.add_undirected_edge(NodeId(1), NodeId(2), 7.0);
        assert_eq!(g.cost(NodeId(2), NodeId(1)), Some(7.0));
        assert!(g.remove_edge(NodeId(2), NodeId(1)));
        assert!(!g.remove_edge(NodeId(2), NodeId(1)));
        assert_eq!(g.cost(NodeId(2), NodeId(1)), None);
        assert!(g.contains(NodeId(2)));
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![NodeId(1), NodeId(2)]);
    }
}
