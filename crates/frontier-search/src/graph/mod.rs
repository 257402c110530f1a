//! Ready-made graph providers.

mod adjacency;
mod grid;

pub use adjacency::{AdjacencyGraph, Edge};
pub use grid::{GridGraph, Terrain};
