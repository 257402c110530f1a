use crate::path::{self, CostTable, PredecessorMap};
use crate::trace::Tracer;
use crate::{NodeId, SearchError};

/// Capability shared by every search strategy.
///
/// The strategy keeps a borrowed graph between calls; everything else a
/// search needs is created inside [`find_path`](Self::find_path), so one
/// strategy value can serve any number of queries. The trait is object
/// safe: hosts can switch strategies through `Box<dyn PathSearch<'g, G>>`.
pub trait PathSearch<'g, G: ?Sized> {
    /// Short human-readable name ("BFS", "A*").
    fn name(&self) -> &'static str;

    /// Use `graph` for subsequent searches, replacing any previous graph.
    fn set_graph(&mut self, graph: &'g G);

    /// Search a path from `start` to `goal`, both included.
    ///
    /// Returns `Ok(None)` when `goal` is unreachable. `trace` sends
    /// step-by-step diagnostics to the strategy's sink and never changes the
    /// result.
    fn find_path(
        &self,
        start: NodeId,
        goal: NodeId,
        trace: bool,
    ) -> Result<Option<Vec<NodeId>>, SearchError>;
}

/// Record of one finished search.
#[derive(Clone, Debug)]
pub struct Exploration {
    pub(crate) start: NodeId,
    pub(crate) goal: NodeId,
    pub(crate) came_from: PredecessorMap,
    pub(crate) cost_so_far: Option<CostTable>,
    pub(crate) found: bool,
    pub(crate) expanded: usize,
}

impl Exploration {
    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }

    /// Whether the goal was taken off the frontier.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Every node discovered during the search, with its predecessor.
    pub fn came_from(&self) -> &PredecessorMap {
        &self.came_from
    }

    /// Whether `node` was discovered.
    pub fn visited(&self, node: NodeId) -> bool {
        self.came_from.contains_key(&node)
    }

    /// Cost table of a weighted search; `None` for BFS.
    pub fn cost_so_far(&self) -> Option<&CostTable> {
        self.cost_so_far.as_ref()
    }

    /// Lowest accumulated cost found for `node`.
    pub fn cost_to(&self, node: NodeId) -> Option<f64> {
        self.cost_so_far.as_ref()?.get(&node).copied()
    }

    /// Number of nodes whose neighbours were enumerated.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The start-to-goal path, if the goal was found.
    pub fn path(&self) -> Option<Vec<NodeId>> {
        self.path_traced(&Tracer::off())
    }

    pub(crate) fn path_traced(&self, tracer: &Tracer<'_>) -> Option<Vec<NodeId>> {
        if !self.found {
            return None;
        }
        path::reconstruct(&self.came_from, self.start, self.goal, tracer)
    }
}
