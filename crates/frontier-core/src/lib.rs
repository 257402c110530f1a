//! **frontier-core** — geometry primitives for the *frontier* graph-search
//! crates.
//!
//! [`Point`] gives graph nodes a 2-D position (used by grid graphs and by
//! distance heuristics), and [`Range`] describes the rectangle a grid graph
//! covers.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
