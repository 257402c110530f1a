use std::collections::VecDeque;
use std::collections::hash_map::Entry;

use crate::path::PredecessorMap;
use crate::strategy::{Exploration, PathSearch};
use crate::trace::{LogSink, TraceSink, Tracer};
use crate::traits::Graph;
use crate::{NodeId, SearchError};

/// Breadth-first search.
///
/// Expands nodes in discovery order from a FIFO frontier, so the returned
/// path has the fewest edges. Edge costs are never consulted.
pub struct Bfs<'g, G: ?Sized> {
    graph: Option<&'g G>,
    sink: &'g dyn TraceSink,
}

impl<G: ?Sized> Default for Bfs<'_, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, G: ?Sized> Bfs<'g, G> {
    /// A strategy with no graph, tracing to [`LogSink`].
    pub fn new() -> Self {
        Self {
            graph: None,
            sink: &LogSink,
        }
    }

    /// Send trace lines to `sink` instead of the `log` facade.
    pub fn with_sink(mut self, sink: &'g dyn TraceSink) -> Self {
        self.sink = sink;
        self
    }

    /// The graph currently searched, if any.
    pub fn graph(&self) -> Option<&'g G> {
        self.graph
    }
}

impl<'g, G: Graph + ?Sized> Bfs<'g, G> {
    /// Run the search and return its full record instead of just the path.
    pub fn explore(
        &self,
        start: NodeId,
        goal: NodeId,
        trace: bool,
    ) -> Result<Exploration, SearchError> {
        self.search(start, goal, &Tracer::new(self.sink, trace))
    }

    fn search(
        &self,
        start: NodeId,
        goal: NodeId,
        tracer: &Tracer<'_>,
    ) -> Result<Exploration, SearchError> {
        let graph = self.graph.ok_or(SearchError::GraphNotSet)?;
        tracer.emit(format_args!("BFS: looking for path from {start} to {goal}"));

        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        let mut came_from = PredecessorMap::new();
        came_from.insert(start, None);

        let mut nbuf = Vec::new();
        let mut expanded = 0;

        let found = loop {
            let Some(current) = frontier.pop_front() else {
                break false;
            };
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
                match came_from.entry(next) {
                    Entry::Vacant(e) => {
                        tracer.emit(format_args!("Adding {next} to frontier"));
                        e.insert(Some(current));
                        frontier.push_back(next);
                    }
                    Entry::Occupied(_) => {
                        tracer.emit(format_args!("Already visited {next}"));
                    }
                }
            }
        };

        if !found {
            tracer.emit(format_args!("Frontier exhausted, {goal} is unreachable"));
        }

        Ok(Exploration {
            start,
            goal,
            came_from,
            cost_so_far: None,
            found,
            expanded,
        })
    }
}

impl<'g, G: Graph + ?Sized> PathSearch<'g, G> for Bfs<'g, G> {
    fn name(&self) -> &'static str {
        "BFS"
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
