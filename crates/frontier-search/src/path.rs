//! Path reconstruction and path costs.

use std::collections::{HashMap, HashSet};

use crate::trace::Tracer;
use crate::{NodeId, SearchError, WeightedGraph};

/// Node -> the node that discovered it; `None` marks the start.
///
/// Presence of a key doubles as the visited set.
pub type PredecessorMap = HashMap<NodeId, Option<NodeId>>;

/// Node -> lowest accumulated cost found so far.
pub type CostTable = HashMap<NodeId, f64>;

/// Walk `came_from` back from `goal` to `start` and return the path in
/// start-to-goal order.
///
/// Returns `None` when `goal` was never reached or when the predecessor
/// chain is broken or loops back on itself. A loop means the map is
/// corrupted; it is reported with `log::warn!` rather than followed.
pub fn reconstruct_path(
    came_from: &PredecessorMap,
    start: NodeId,
    goal: NodeId,
) -> Option<Vec<NodeId>> {
    reconstruct(came_from, start, goal, &Tracer::off())
}

pub(crate) fn reconstruct(
    came_from: &PredecessorMap,
    start: NodeId,
    goal: NodeId,
    tracer: &Tracer<'_>,
) -> Option<Vec<NodeId>> {
    if !came_from.contains_key(&goal) {
        tracer.emit(format_args!("Goal {goal} was never reached"));
        return None;
    }

    let mut path = Vec::new();
    let mut on_path = HashSet::new();
    let mut current = goal;
    while current != start {
        path.push(current);
        on_path.insert(current);
        let Some(&Some(prev)) = came_from.get(&current) else {
            tracer.emit(format_args!(
                "Error: predecessor chain from {goal} stops at {current} before reaching {start}"
            ));
            log::warn!("predecessor chain from {goal} stops at {current} before reaching {start}");
            return None;
        };
        if on_path.contains(&prev) {
            tracer.emit(format_args!("Error: path contains a loop at {prev}"));
            log::warn!("predecessor map contains a loop at {prev} (goal {goal})");
            return None;
        }
        current = prev;
    }
    path.push(start);
    path.reverse();
    Some(path)
}

/// Cost of one edge, checked against the [`WeightedGraph`] contract.
pub(crate) fn edge_cost<G: WeightedGraph + ?Sized>(
    graph: &G,
    from: NodeId,
    to: NodeId,
) -> Result<f64, SearchError> {
    match graph.cost(from, to) {
        None => Err(SearchError::MissingCost { from, to }),
        Some(cost) if !cost.is_finite() || cost < 0.0 => {
            Err(SearchError::InvalidCost { from, to, cost })
        }
        Some(cost) => Ok(cost),
    }
}

/// Sum of the edge costs along `path`. Empty and single-node paths cost 0.
pub fn path_cost<G: WeightedGraph + ?Sized>(graph: &G, path: &[NodeId]) -> Result<f64, SearchError> {
    let mut total = 0.0;
    for step in path.windows(2) {
        total += edge_cost(graph, step[0], step[1])?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyGraph, TraceLog};

    fn ids(v: &[u32]) -> Vec<NodeId> {
        v.iter().copied().map(NodeId).collect()
    }

    fn map(entries: &[(u32, Option<u32>)]) -> PredecessorMap {
        entries
            .iter()
            .map(|&(k, v)| (NodeId(k), v.map(NodeId)))
            .collect()
    }

    #[test]
    fn walks_back_to_start() {
        let came_from = map(&[(0, None), (1, Some(0)), (3, Some(1)), (4, Some(3))]);
        assert_eq!(
            reconstruct_path(&came_from, NodeId(0), NodeId(4)),
            Some(ids(&[0, 1, 3, 4]))
        );
    }

    #[test]
    fn start_equals_goal() {
        let came_from = map(&[(7, None)]);
        assert_eq!(
            reconstruct_path(&came_from, NodeId(7), NodeId(7)),
            Some(ids(&[7]))
        );
    }

    #[test]
    fn unreached_goal() {
        let came_from = map(&[(0, None), (1, Some(0))]);
        assert_eq!(reconstruct_path(&came_from, NodeId(0), NodeId(9)), None);
    }

    #[test]
    fn loop_is_detected() {
        // 4 -> 3 -> 2 -> 3 never reaches 0.
        let came_from = map(&[(0, None), (2, Some(3)), (3, Some(2)), (4, Some(3))]);
        let log = TraceLog::new();
        let tracer = Tracer::new(&log, true);
        assert_eq!(reconstruct(&came_from, NodeId(0), NodeId(4), &tracer), None);
        assert!(log.lines().iter().any(|l| l.contains("loop")));
    }

    #[test]
    fn self_loop_is_detected() {
        let came_from = map(&[(0, None), (5, Some(5))]);
        assert_eq!(reconstruct_path(&came_from, NodeId(0), NodeId(5)), None);
    }

    #[test]
    fn broken_chain() {
        // 2's predecessor is the sentinel but 2 is not the start.
        let came_from = map(&[(0, None), (2, None), (3, Some(2))]);
        assert_eq!(reconstruct_path(&came_from, NodeId(0), NodeId(3)), None);
        // 6's predecessor was never recorded.
        let came_from = map(&[(0, None), (5, Some(6))]);
        assert_eq!(reconstruct_path(&came_from, NodeId(0), NodeId(5)), None);
    }

    #[test]
    fn path_cost_sums_edges() {
        let g = AdjacencyGraph::from_edges([(0, 1, 1.5), (1, 2, 2.0)]);
        assert_eq!(path_cost(&g, &ids(&[0, 1, 2])), Ok(3.5));
        assert_eq!(path_cost(&g, &ids(&[1])), Ok(0.0));
        assert_eq!(path_cost(&g, &[]), Ok(0.0));
        assert_eq!(
            path_cost(&g, &ids(&[0, 2])),
            Err(SearchError::MissingCost {
                from: NodeId(0),
                to: NodeId(2)
            })
        );
    }
}
