use crate::NodeId;

/// Minimal graph interface: neighbour enumeration.
pub trait Graph {
    /// Append every node directly reachable from `node` into `buf`.
    /// The caller clears `buf` before calling.
    ///
    /// Must return the same neighbours, in the same order, for the whole
    /// duration of a search.
    fn neighbours(&self, node: NodeId, buf: &mut Vec<NodeId>);
}

/// Graph with weighted edges.
pub trait WeightedGraph: Graph {
    /// Cost of moving from `from` to `to`.
    ///
    /// Must be `Some` finite non-negative value whenever `to` is one of the
    /// neighbours of `from`. Searches report `None` or an invalid value as
    /// an error instead of guessing a cost.
    fn cost(&self, from: NodeId, to: NodeId) -> Option<f64>;
}

impl<G: Graph + ?Sized> Graph for &G {
    #[inline]
    fn neighbours(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        (**self).neighbours(node, buf);
    }
}

impl<G: WeightedGraph + ?Sized> WeightedGraph for &G {
    #[inline]
    fn cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        (**self).cost(from, to)
    }
}

/// Estimate of the remaining cost from `node` to `goal`, added to the
/// accumulated cost to order the A* frontier.
///
/// A heuristic that never overestimates the true remaining cost
/// (admissible) keeps A* paths optimal.
pub trait Heuristic {
    fn estimate(&self, node: NodeId, goal: NodeId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(NodeId, NodeId) -> f64,
{
    #[inline]
    fn estimate(&self, node: NodeId, goal: NodeId) -> f64 {
        self(node, goal)
    }
}

/// The same scalar for every node.
///
/// This is the legacy single-value heuristic: it is added uniformly to every
/// frontier priority, so it never changes the expansion order and behaves
/// like Dijkstra's algorithm. Use a per-node [`Heuristic`] to get the usual
/// A* speed-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantHeuristic(pub f64);

impl ConstantHeuristic {
    /// Value used when nothing else was configured.
    pub const DEFAULT: Self = Self(1.0);
}

impl Default for ConstantHeuristic {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Heuristic for ConstantHeuristic {
    #[inline]
    fn estimate(&self, _node: NodeId, _goal: NodeId) -> f64 {
        self.0
    }
}

/// Always zero: A* degenerates to uniform-cost search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _node: NodeId, _goal: NodeId) -> f64 {
        0.0
    }
}
