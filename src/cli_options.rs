/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Cybernexus.

Cybernexus is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Cybernexus is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Cybernexus. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The binary is intended for developers tuning the graph generator. It
//! builds the same graphs that the game phases use, so that layouts, route
//! counts, and canonical breadth-first paths can be inspected without
//! clicking through the game.
//!
//! # Examples
//!
//! Generate three graphs for the breadth-first phase:
//!
//! ```
//! $ cybernexus --count 3
//! graph 1: 12 nodes, 26 edges, average degree 4.33, 152 path(s), canonical 1 -> 4 -> 9 -> 12
//! graph 2: 12 nodes, 24 edges, average degree 4.00, 87 path(s), canonical 1 -> 6 -> 12
//! graph 3: 12 nodes, 27 edges, average degree 4.50, 210 path(s), canonical 1 -> 2 -> 8 -> 12
//! ```
//!
//! Dump a graph as JSON for the presentation-layer developers:
//!
//! ```
//! $ cybernexus --json
//! {
//!   "nodes": [
//!     {
//!       "id": 1,
//!       ...
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::time::Instant;

use cybernexus::game::Phase;
use cybernexus::generator;
use cybernexus::generator::layout::Bounds;
use cybernexus::generator::tutorial;
use cybernexus::graph::Graph;
use cybernexus::path::Path;
use cybernexus::search;
use cybernexus::verify::{self, Outcome};

use crate::config::COPYRIGHT_NOTICE;

/// Build random Cybernexus graphs for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Game phase to build graphs for (the tutorial graph is fixed)
    #[arg(value_enum, short, long, default_value_t = Phase::BreadthFirst)]
    phase: Phase,

    /// Number of nodes in each generated graph (at least 2)
    #[arg(short, long, default_value_t = generator::DEFAULT_NODE_COUNT)]
    nodes: usize,

    /// Number of graphs to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the graphs as JSON instead of one summary line per graph
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the graphs
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    // A graph needs at least a start and a target node.
    let node_count: usize = args.nodes.max(2);

    let bounds: Bounds = Bounds::default();
    let mut total_duration: f32 = 0.0;
    let mut max_duration: f32 = 0.0;
    let mut total_edges: usize = 0;
    let mut total_paths: usize = 0;

    for i in 0..args.count {
        debug!("Generating graph {} for the {} phase", i + 1, args.phase);

        let start: Instant = Instant::now();
        let graph: Graph = match args.phase {
            Phase::Tutorial => tutorial::tutorial_graph(),
            Phase::BreadthFirst | Phase::DepthFirst => generator::generate(node_count, &bounds),
        };
        let duration: f32 = start.elapsed().as_secs_f32();
        total_duration += duration;
        if duration > max_duration {
            max_duration = duration;
        }

        // Verify that the graph came out connected
        if !graph.is_connected() {
            eprintln!("Disconnected graph: {:?}", graph.edges());
            panic!("Bug: the generated graph is not connected");
        }

        let canonical: Path = search::canonical_bfs_path(&graph);
        let num_paths: usize = search::count_simple_paths(&graph);
        total_edges += graph.num_edges();
        total_paths += num_paths;

        // Verify that the canonical path passes the phase verifier
        let outcome: Outcome = match args.phase {
            Phase::Tutorial | Phase::BreadthFirst => verify::verify_bfs(&graph, &canonical),
            Phase::DepthFirst => verify::verify_dfs(&graph, &canonical),
        };
        if outcome != Outcome::Success {
            eprintln!("Refused canonical path {canonical}: {outcome:?}");
            panic!("Bug: the canonical path does not pass its own verifier");
        }

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&graph).expect("Cannot serialize the graph")
            );
        } else {
            println!(
                "graph {}: {} nodes, {} edges, average degree {:.2}, {} path(s), canonical {}",
                i + 1,
                graph.num_nodes(),
                graph.num_edges(),
                graph.average_degree(),
                num_paths,
                canonical
            );
        }
    }

    // Print some stats
    if args.summary {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
     average edges = {}
     average paths = {}",
            total_duration,
            total_duration / args.count as f32,
            max_duration,
            total_edges as f32 / args.count as f32,
            total_paths as f32 / args.count as f32,
        );
    }
    0
}
