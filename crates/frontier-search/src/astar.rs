use frontier_core::Point;

use crate::path::{CostTable, PredecessorMap, edge_cost};
use crate::queue::MinQueue;
use crate::strategy::{Exploration, PathSearch};
use crate::trace::{LogSink, TraceSink, Tracer};
use crate::traits::{ConstantHeuristic, Heuristic, WeightedGraph};
use crate::{NodeId, SearchError};

/// A* search.
///
/// Expands nodes by accumulated cost plus the heuristic estimate. With a
/// heuristic that never overestimates, the returned path has the lowest
/// total cost.
///
/// The default heuristic is [`ConstantHeuristic::DEFAULT`]: the same scalar is
/// added to every priority, so the order of expansion is the one of
/// uniform-cost search. Install a per-node heuristic with
/// [`with_heuristic`](Self::with_heuristic) to prune the search.
///
/// Frontier ties are broken by insertion order (see [`MinQueue`]).
pub struct AStar<'g, G: ?Sized, H = ConstantHeuristic> {
    graph: Option<&'g G>,
    heuristic: H,
    sink: &'g dyn TraceSink,
}

impl<G: ?Sized> Default for AStar<'_, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, G: ?Sized> AStar<'g, G> {
    /// A strategy with no graph, the default constant heuristic, tracing to
    /// [`LogSink`].
    pub fn new() -> Self {
        Self {
            graph: None,
            heuristic: ConstantHeuristic::DEFAULT,
            sink: &LogSink,
        }
    }

    /// Set the constant heuristic to the Euclidean distance between `a` and
    /// `b`.
    ///
    /// The value is added to every priority alike and therefore does not
    /// steer the search; it is kept for hosts that configure the heuristic
    /// from two map positions.
    pub fn set_heuristic(&mut self, a: Point, b: Point) {
        self.heuristic = ConstantHeuristic(a.distance(b));
    }
}

impl<'g, G: ?Sized, H> AStar<'g, G, H> {
    /// Replace the heuristic, keeping graph and sink.
    pub fn with_heuristic<H2: Heuristic>(self, heuristic: H2) -> AStar<'g, G, H2> {
        AStar {
            graph: self.graph,
            heuristic,
            sink: self.sink,
        }
    }

    /// Send trace lines to `sink` instead of the `log` facade.
    pub fn with_sink(mut self, sink: &'g dyn TraceSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// The graph currently searched, if any.
    pub fn graph(&self) -> Option<&'g G> {
        self.graph
    }
}

impl<'g, G: WeightedGraph + ?Sized, H: Heuristic> AStar<'g, G, H> {
    /// Run the search and return its full record, including the cost table.
    pub fn explore(
        &self,
        start: NodeId,
        goal: NodeId,
        trace: bool,
    ) -> Result<Exploration, SearchError> {
        self.search(start, goal, &Tracer::new(self.sink, trace))
    }

    /// Like [`find_path`](PathSearch::find_path), also returning the total
    /// cost of the path.
    pub fn find_path_with_cost(
        &self,
        start: NodeId,
        goal: NodeId,
        trace: bool,
    ) -> Result<Option<(Vec<NodeId>, f64)>, SearchError> {
        let tracer = Tracer::new(self.sink, trace);
        let exploration = self.search(start, goal, &tracer)?;
        Ok(exploration.path_traced(&tracer).map(|path| {
            let cost = exploration.cost_to(goal).unwrap_or(0.0);
            (path, cost)
        }))
    }

    fn search(
        &self,
        start: NodeId,
        goal: NodeId,
        tracer: &Tracer<'_>,
    ) -> Result<Exploration, SearchError> {
        let graph = self.graph.ok_or(SearchError::GraphNotSet)?;
        tracer.emit(format_args!(
            "A* search: looking for path from {start} to {goal}"
        ));

        // Entries carry the cost they were queued with, so stale duplicates
        // can be told apart from the current best entry.
        let mut frontier: MinQueue<(NodeId, f64)> = MinQueue::new();
        frontier.push((start, 0.0), 0.0);
        let mut came_from = PredecessorMap::new();
        came_from.insert(start, None);
        let mut cost_so_far = CostTable::new();
        cost_so_far.insert(start, 0.0);

        let mut nbuf = Vec::new();
        let mut expanded = 0;

        let found = loop {
            let Some((current, queued_cost)) = frontier.pop() else {
                break false;
            };
            let current_cost = cost_so_far.get(&current).copied().unwrap_or(queued_cost);
            if queued_cost > current_cost {
                tracer.emit(format_args!(
                    "Skipping stale entry for {current} (cost {queued_cost}, best {current_cost})"
                ));
                continue;
            }
            tracer.emit(format_args!("Current node is {current}"));

            if current == goal {
                tracer.emit(format_args!("Found goal node {goal}"));
                break true;
            }

            expanded += 1;
            nbuf.clear();
            graph.neighbours(current, &mut nbuf);
            tracer.emit(format_args!("{} neighbours found", nbuf.len()));

            for &next in nbuf.iter() {
                let new_cost = current_cost + edge_cost(graph, current, next)?;
                if let Some(&known) = cost_so_far.get(&next) {
                    if new_cost >= known {
                        tracer.emit(format_args!("Already visited {next}"));
                        continue;
                    }
                }
                cost_so_far.insert(next, new_cost);
                came_from.insert(next, Some(current));
                let priority = new_cost + self.heuristic.estimate(next, goal);
                tracer.emit(format_args!(
                    "Adding {next} to frontier, cost {new_cost}, priority {priority}"
                ));
                frontier.push((next, new_cost), priority);
            }
        };

        if !found {
            tracer.emit(format_args!("Frontier exhausted, {goal} is unreachable"));
        }

        Ok(Exploration {
            start,
            goal,
            came_from,
            cost_so_far: Some(cost_so_far),
            found,
            expanded,
        })
    }
}

impl<'g, G: WeightedGraph + ?Sized, H: Heuristic> PathSearch<'g, G> for AStar<'g, G, H> {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn set_graph(&mut self, graph: &'g G) {
        self.graph = Some(graph);
    }

    fn find_path(
        &self,
        start: NodeId,
        goal: NodeId,
        trace: bool,
    ) -> Result<Option<Vec<NodeId>>, SearchError> {
        let tracer = Tracer::new(self.sink, trace);
        let exploration = self.search(start, goal, &tracer)?;
        Ok(exploration.path_traced(&tracer))
    }
}
