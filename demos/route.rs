//! Terminal route-finding demo.
//!
//! Run: cargo run --bin route -- [bfs|astar|both] [--trace] [--diagonals] [--random SEED]

use clap::Parser;
use frontier_demos::{Options, run};

fn main() {
    let opts = Options::parse();

    match run(&opts) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
