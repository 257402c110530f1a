//! Breadth-first and A* path search over pluggable graph providers.
//!
//! Both strategies implement the [`PathSearch`] capability trait, so a host
//! can pick one at runtime and drive it through the same two calls:
//! [`set_graph`](PathSearch::set_graph) then
//! [`find_path`](PathSearch::find_path).
//!
//! - **BFS** ([`Bfs`]): FIFO frontier, fewest edges, never reads edge costs.
//! - **A\*** ([`AStar`]): cost-ordered frontier over a [`MinQueue`], with a
//!   pluggable [`Heuristic`].
//!
//! All per-search state (frontier, predecessor map, cost table) lives inside
//! one call, so a strategy value can be reused and shared by reference.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | BFS |
//! | [`WeightedGraph`] : [`Graph`] | A*, [`path_cost`] |
//! | [`Heuristic`] | A* frontier ordering |
//! | [`TraceSink`] | step-by-step diagnostics when `trace` is on |
//!
//! # Example
//!
//! ```
//! use frontier_search::{AdjacencyGraph, AStar, NodeId, PathSearch, ZeroHeuristic};
//!
//! let graph = AdjacencyGraph::from_edges([
//!     (0, 1, 1.0),
//!     (0, 2, 5.0),
//!     (1, 3, 1.0),
//!     (2, 3, 1.0),
//!     (3, 4, 1.0),
//! ]);
//! let mut astar = AStar::new().with_heuristic(ZeroHeuristic);
//! astar.set_graph(&graph);
//! let path = astar.find_path(NodeId(0), NodeId(4), false).unwrap();
//! assert_eq!(path, Some(vec![NodeId(0), NodeId(1), NodeId(3), NodeId(4)]));
//! ```

mod astar;
mod bfs;
mod distance;
mod error;
pub mod graph;
mod node;
mod path;
mod queue;
mod strategy;
mod trace;
mod traits;

pub use astar::AStar;
pub use bfs::Bfs;
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::{GridError, SearchError};
pub use graph::{AdjacencyGraph, Edge, GridGraph, Terrain};
pub use node::NodeId;
pub use path::{CostTable, PredecessorMap, path_cost, reconstruct_path};
pub use queue::MinQueue;
pub use strategy::{Exploration, PathSearch};
pub use trace::{LogSink, TRACE_TARGET, TraceLog, TraceSink};
pub use traits::{ConstantHeuristic, Graph, Heuristic, WeightedGraph, ZeroHeuristic};
