use std::fmt;

use frontier_core::Point;

use crate::NodeId;

/// Errors reported by a search call.
///
/// An unreachable goal is not an error: searches return `Ok(None)` for it.
/// These variants mean the caller or the graph provider broke its contract.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// `find_path` was called before `set_graph`.
    GraphNotSet,
    /// The graph listed `to` as a neighbour of `from` but has no cost for it.
    MissingCost { from: NodeId, to: NodeId },
    /// The graph returned a negative, NaN or infinite edge cost.
    InvalidCost { from: NodeId, to: NodeId, cost: f64 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GraphNotSet => write!(f, "search: no graph set"),
            Self::MissingCost { from, to } => {
                write!(f, "search: graph has no cost for edge {from} -> {to}")
            }
            Self::InvalidCost { from, to, cost } => {
                write!(f, "search: invalid cost {cost} for edge {from} -> {to}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Errors that can occur when building or parsing a grid map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The map has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a known terrain glyph.
    InvalidTerrain { ch: char, pos: Point },
    /// More cells than node ids can address.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty map"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidTerrain { ch, pos } => {
                write!(f, "grid: invalid terrain \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid: {width}x{height} has too many cells for node ids")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_edge() {
        let e = SearchError::MissingCost {
            from: NodeId(2),
            to: NodeId(5),
        };
        assert_eq!(e.to_string(), "search: graph has no cost for edge 2 -> 5");
        let e = GridError::InvalidTerrain {
            ch: '?',
            pos: Point::new(1, 0),
        };
        assert!(e.to_string().contains("(1, 0)"));
    }
}
