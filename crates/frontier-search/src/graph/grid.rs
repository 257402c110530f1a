//! Grid maps as graphs.
//!
//! Each cell of a rectangular map is a node; its id is the row-major index
//! of the cell inside the grid's [`Range`]. Movement is 4-way by default and
//! 8-way with [`GridGraph::with_diagonals`].

use std::f64::consts::SQRT_2;
use std::fmt;

use frontier_core::{Point, Range};

use crate::traits::{Graph, WeightedGraph};
use crate::{GridError, NodeId, euclidean};

/// What a grid cell is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// `#`, impassable.
    Wall,
    /// `.`, cost 1.
    Floor,
    /// `^`, cost 2.
    Rough,
    /// `~`, cost 3.
    Water,
}

impl Terrain {
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            '^' => Some(Self::Rough),
            '~' => Some(Self::Water),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Rough => '^',
            Self::Water => '~',
        }
    }

    /// Cost of stepping onto this terrain orthogonally; `None` for walls.
    pub fn cost(self) -> Option<f64> {
        match self {
            Self::Wall => None,
            Self::Floor => Some(1.0),
            Self::Rough => Some(2.0),
            Self::Water => Some(3.0),
        }
    }

    #[inline]
    pub fn passable(self) -> bool {
        self != Self::Wall
    }
}

/// A rectangular terrain map usable as a [`WeightedGraph`].
///
/// Moving onto a cell costs that cell's [`Terrain::cost`]; diagonal moves
/// cost `√2` times as much and may not cut the corner of a wall.
#[derive(Clone, Debug, PartialEq)]
pub struct GridGraph {
    range: Range,
    cells: Vec<Terrain>,
    diagonals: bool,
}

impl GridGraph {
    /// A `width` × `height` grid filled with `fill`. Negative sizes give an
    /// empty grid.
    pub fn new(width: i32, height: i32, fill: Terrain) -> Result<Self, GridError> {
        let width = usize::try_from(width).unwrap_or(0);
        let height = usize::try_from(height).unwrap_or(0);
        let range = grid_range(width, height)?;
        Ok(Self {
            range,
            cells: vec![fill; range.len()],
            diagonals: false,
        })
    }

    /// Parse a map drawn with terrain glyphs, one row per line.
    pub fn parse(map: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = map.lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }
        let range = grid_range(width, rows.len())?;

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::InconsistentSize {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let terrain = Terrain::from_glyph(ch).ok_or(GridError::InvalidTerrain {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(terrain);
            }
        }

        Ok(Self {
            range,
            cells,
            diagonals: false,
        })
    }

    /// Enable or disable 8-way movement.
    pub fn with_diagonals(mut self, diagonals: bool) -> Self {
        self.diagonals = diagonals;
        self
    }

    pub fn diagonals(&self) -> bool {
        self.diagonals
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    pub fn terrain(&self, p: Point) -> Option<Terrain> {
        self.range.index_of(p).map(|i| self.cells[i])
    }

    /// Change the terrain at `p`. Returns `false` if `p` is off the grid.
    pub fn set(&mut self, p: Point, terrain: Terrain) -> bool {
        match self.range.index_of(p) {
            Some(i) => {
                self.cells[i] = terrain;
                true
            }
            None => false,
        }
    }

    /// Whether `p` is on the grid and not a wall.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.terrain(p).is_some_and(Terrain::passable)
    }

    /// Node id of the cell at `p`.
    #[inline]
    pub fn node(&self, p: Point) -> Option<NodeId> {
        self.range
            .index_of(p)
            .and_then(|i| u32::try_from(i).ok())
            .map(NodeId)
    }

    /// Position of `node`.
    #[inline]
    pub fn point(&self, node: NodeId) -> Option<Point> {
        self.range.point_at(node.index())
    }

    /// Straight-line distance between node positions.
    ///
    /// Every step costs at least 1, so this never overestimates and keeps A*
    /// optimal on this grid.
    pub fn euclidean_heuristic(&self) -> impl Fn(NodeId, NodeId) -> f64 + '_ {
        move |node, goal| match (self.point(node), self.point(goal)) {
            (Some(a), Some(b)) => euclidean(a, b),
            _ => 0.0,
        }
    }

    fn diagonal_allowed(&self, from: Point, d: Point) -> bool {
        self.passable(from.shift(d.x, 0)) && self.passable(from.shift(0, d.y))
    }
}

/// The range of a `width` × `height` grid, if every cell gets a distinct
/// `u32` node id.
fn grid_range(width: usize, height: usize) -> Result<Range, GridError> {
    let too_large = || GridError::TooLarge { width, height };
    let cells = width.checked_mul(height).ok_or_else(too_large)?;
    u32::try_from(cells).map_err(|_| too_large())?;
    let w = i32::try_from(width).map_err(|_| too_large())?;
    let h = i32::try_from(height).map_err(|_| too_large())?;
    Ok(Range::new(0, 0, w, h))
}

impl Graph for GridGraph {
    fn neighbours(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        let Some(p) = self.point(node) else {
            return;
        };
        if !self.passable(p) {
            return;
        }
        if self.diagonals {
            for n in p.neighbors_8() {
                let d = n - p;
                if !self.passable(n) || (d.x != 0 && d.y != 0 && !self.diagonal_allowed(p, d)) {
                    continue;
                }
                buf.extend(self.node(n));
            }
        } else {
            for n in p.neighbors_4() {
                if self.passable(n) {
                    buf.extend(self.node(n));
                }
            }
        }
    }
}

impl WeightedGraph for GridGraph {
    fn cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let a = self.point(from)?;
        let b = self.point(to)?;
        if !self.passable(a) {
            return None;
        }
        let step = self.terrain(b)?.cost()?;
        let d = b - a;
        match (d.x.abs(), d.y.abs()) {
            (1, 0) | (0, 1) => Some(step),
            (1, 1) if self.diagonals && self.diagonal_allowed(a, d) => Some(step * SQRT_2),
            _ => None,
        }
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.range.width() as usize;
        for (i, row) in self.cells.chunks(w.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AStar, Bfs, PathSearch, ZeroHeuristic, path_cost};

    const LAKE: &str = "\
.~~~.
.~~~.
.....";

    fn neighbour_points(g: &GridGraph, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        g.neighbours(g.node(p).unwrap(), &mut buf);
        buf.into_iter().map(|n| g.point(n).unwrap()).collect()
    }

    #[test]
    fn parse_and_display() {
        let g = GridGraph::parse(LAKE).unwrap();
        assert_eq!(g.range(), Range::new(0, 0, 5, 3));
        assert_eq!(g.terrain(Point::new(2, 1)), Some(Terrain::Water));
        assert_eq!(g.to_string(), LAKE);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(GridGraph::parse(""), Err(GridError::Empty));
        assert_eq!(
            GridGraph::parse("...\n..\n..."),
            Err(GridError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            GridGraph::parse("..\n.x"),
            Err(GridError::InvalidTerrain {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn oversized_grids_are_rejected() {
        assert_eq!(
            GridGraph::new(70_000, 70_000, Terrain::Floor),
            Err(GridError::TooLarge {
                width: 70_000,
                height: 70_000
            })
        );
        let empty = GridGraph::new(-3, 2, Terrain::Floor).unwrap();
        assert!(empty.range().is_empty());
        assert_eq!(empty.node(Point::ZERO), None);
    }

    #[test]
    fn node_point_mapping() {
        let g = GridGraph::new(4, 3, Terrain::Floor).unwrap();
        assert_eq!(g.node(Point::new(1, 2)), Some(NodeId(9)));
        assert_eq!(g.point(NodeId(9)), Some(Point::new(1, 2)));
        assert_eq!(g.node(Point::new(4, 0)), None);
        assert_eq!(g.point(NodeId(12)), None);
    }

    #[test]
    fn walls_block_movement() {
        let g = GridGraph::parse("...\n.#.\n...").unwrap();
        assert_eq!(
            neighbour_points(&g, Point::new(1, 0)),
            vec![Point::new(2, 0), Point::new(0, 0)]
        );
        assert!(neighbour_points(&g, Point::new(1, 1)).is_empty());
        assert_eq!(g.cost(NodeId(1), NodeId(4)), None);
    }

    #[test]
    fn diagonals_do_not_cut_corners() {
        let g = GridGraph::parse("..\n#.").unwrap().with_diagonals(true);
        let from = Point::new(1, 0);
        let ns = neighbour_points(&g, from);
        assert!(ns.contains(&Point::new(1, 1)));
        assert!(ns.contains(&Point::new(0, 0)));
        // (0, 1) is a wall.
        assert_eq!(ns.len(), 2);

        let g = GridGraph::parse("#.\n..").unwrap().with_diagonals(true);
        // (1, 0) -> (0, 1) would squeeze past the wall at (0, 0).
        assert!(!neighbour_points(&g, Point::new(1, 0)).contains(&Point::new(0, 1)));
        let open = GridGraph::new(2, 2, Terrain::Floor).unwrap().with_diagonals(true);
        let c = open.cost(NodeId(1), NodeId(2)).unwrap();
        assert!((c - SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn costs_follow_terrain() {
        let g = GridGraph::parse(".^~").unwrap();
        assert_eq!(g.cost(NodeId(0), NodeId(1)), Some(2.0));
        assert_eq!(g.cost(NodeId(1), NodeId(2)), Some(3.0));
        assert_eq!(g.cost(NodeId(2), NodeId(1)), Some(2.0));
        // Not adjacent.
        assert_eq!(g.cost(NodeId(0), NodeId(2)), None);
    }

    #[test]
    fn bfs_wades_astar_walks_around() {
        let g = GridGraph::parse(LAKE).unwrap();
        let start = g.node(Point::new(0, 0)).unwrap();
        let goal = g.node(Point::new(4, 0)).unwrap();

        let mut bfs = Bfs::new();
        bfs.set_graph(&g);
        let mut astar = AStar::new().with_heuristic(g.euclidean_heuristic());
        astar.set_graph(&g);

        let short = bfs.find_path(start, goal, false).unwrap().unwrap();
        assert_eq!(short.len(), 5);
        assert_eq!(path_cost(&g, &short), Ok(10.0));

        let (cheap, cost) = astar.find_path_with_cost(start, goal, false).unwrap().unwrap();
        assert_eq!(cheap.len(), 9);
        assert_eq!(cost, 8.0);
        assert!(
            cheap
                .iter()
                .all(|&n| g.terrain(g.point(n).unwrap()) == Some(Terrain::Floor))
        );
    }

    #[test]
    fn walled_off_goal() {
        let g = GridGraph::parse("..#.\n..#.").unwrap();
        let start = g.node(Point::new(0, 0)).unwrap();
        let goal = g.node(Point::new(3, 1)).unwrap();
        let mut astar = AStar::new().with_heuristic(ZeroHeuristic);
        astar.set_graph(&g);
        let ex = astar.explore(start, goal, false).unwrap();
        assert!(!ex.found());
        assert_eq!(ex.came_from().len(), 4);
    }

    #[test]
    fn heuristic_is_admissible_on_open_grid() {
        let g = GridGraph::new(6, 6, Terrain::Floor).unwrap().with_diagonals(true);
        let h = g.euclidean_heuristic();
        let goal = g.node(Point::new(5, 5)).unwrap();
        let mut astar = AStar::new().with_heuristic(ZeroHeuristic);
        astar.set_graph(&g);
        for p in g.range() {
            let n = g.node(p).unwrap();
            let (_, exact) = astar.find_path_with_cost(n, goal, false).unwrap().unwrap();
            assert!(h(n, goal) <= exact + 1e-9);
        }
    }
}
