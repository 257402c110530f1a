//! Route-finding demo shared by the `route` binary.
//!
//! Demonstrates: BFS and A* driven through the same `PathSearch` trait,
//! a per-node Euclidean heuristic, recorded search traces, and seeded
//! random terrain maps.

use std::error::Error;
use std::fmt::Write as _;

use clap::{Parser, ValueEnum};
use frontier_core::Point;
use frontier_search::{
    AStar, Bfs, GridError, GridGraph, NodeId, PathSearch, Terrain, TraceLog, path_cost,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Built-in map: a river with a single ford, some walls and rough ground.
pub const LAKE_MAP: &str = "\
..........~~~~..........
.####.....~~~~.....###..
.#........~~~~.......#..
.#...^^^..~~~~..^^...#..
.#...^^^..........^^....
.####.....~~~~.....###..
..........~~~~..........";

pub const RANDOM_WIDTH: i32 = 24;
pub const RANDOM_HEIGHT: i32 = 10;

/// Which strategies to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Algo {
    Bfs,
    #[value(name = "astar", alias = "a*")]
    AStar,
    #[default]
    Both,
}

/// Run BFS and A* across a terrain map and print the routes they find
#[derive(Parser, Clone, Debug, Default, PartialEq, Eq)]
#[command(name = "route", long_about = None)]
pub struct Options {
    /// Strategy to run
    #[arg(value_enum, default_value_t = Algo::Both)]
    pub algo: Algo,

    /// Print the recorded search trace
    #[arg(long)]
    pub trace: bool,

    /// Allow diagonal moves
    #[arg(long)]
    pub diagonals: bool,

    /// Generate a random map from this seed instead of using the lake map
    #[arg(long = "random", value_name = "SEED")]
    pub seed: Option<u64>,
}

/// A random terrain map. The top-left and bottom-right corners are always
/// floor so they can serve as endpoints.
pub fn random_map(width: i32, height: i32, seed: u64) -> Result<GridGraph, GridError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = GridGraph::new(width, height, Terrain::Floor)?;
    let range = grid.range();
    for p in range {
        let terrain = match rng.random_range(0..100) {
            0..25 => Terrain::Wall,
            25..35 => Terrain::Water,
            35..45 => Terrain::Rough,
            _ => Terrain::Floor,
        };
        grid.set(p, terrain);
    }
    grid.set(range.min, Terrain::Floor);
    grid.set(range.max.shift(-1, -1), Terrain::Floor);
    Ok(grid)
}

/// Draw `grid` with `path` overlaid: `S` start, `G` goal, `*` in between.
pub fn render(grid: &GridGraph, path: &[NodeId]) -> String {
    let range = grid.range();
    let mut glyphs: Vec<char> = range
        .iter()
        .map(|p| grid.terrain(p).map_or(' ', Terrain::glyph))
        .collect();
    for (i, n) in path.iter().enumerate() {
        let mark = if i == 0 {
            'S'
        } else if i == path.len() - 1 {
            'G'
        } else {
            '*'
        };
        if let Some(g) = glyphs.get_mut(n.index()) {
            *g = mark;
        }
    }
    glyphs
        .chunks(range.width().max(1) as usize)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn endpoints(grid: &GridGraph) -> Option<(Point, Point)> {
    let range = grid.range();
    if range.is_empty() {
        return None;
    }
    Some((range.min, range.max.shift(-1, -1)))
}

/// Run the selected strategies from the top-left to the bottom-right corner
/// and return a printable report.
pub fn run(opts: &Options) -> Result<String, Box<dyn Error>> {
    let grid = match opts.seed {
        Some(seed) => random_map(RANDOM_WIDTH, RANDOM_HEIGHT, seed)?,
        None => GridGraph::parse(LAKE_MAP)?,
    }
    .with_diagonals(opts.diagonals);
    let (from, to) = endpoints(&grid).ok_or("empty map")?;
    let start = grid.node(from).ok_or("start is off the map")?;
    let goal = grid.node(to).ok_or("goal is off the map")?;
    let trace = TraceLog::new();

    let mut strategies: Vec<Box<dyn PathSearch<'_, GridGraph> + '_>> = Vec::new();
    if matches!(opts.algo, Algo::Bfs | Algo::Both) {
        strategies.push(Box::new(Bfs::<GridGraph>::new().with_sink(&trace)));
    }
    if matches!(opts.algo, Algo::AStar | Algo::Both) {
        let astar = AStar::<GridGraph>::new()
            .with_heuristic(grid.euclidean_heuristic())
            .with_sink(&trace);
        strategies.push(Box::new(astar));
    }

    let mut out = String::new();
    for search in strategies.iter_mut() {
        search.set_graph(&grid);
        writeln!(out, "== {}", search.name())?;
        match search.find_path(start, goal, opts.trace)? {
            Some(path) => {
                writeln!(out, "{}", render(&grid, &path))?;
                writeln!(
                    out,
                    "steps: {}, cost: {:.2}",
                    path.len() - 1,
                    path_cost(&grid, &path)?
                )?;
            }
            None => writeln!(out, "no path from {from} to {to}")?,
        }
        for line in trace.take() {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(out.trim_end().to_string())
}
