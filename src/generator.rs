/*
generator.rs

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

//! Generate random connected game graphs.
//!
//! A graph is built in stages:
//!
//! 1. [`layout`] places the nodes inside a rectangular bound, keeping a
//!    minimum distance between them when possible. The first node is the
//!    start, the last one is the target.
//! 2. [`backbone`] connects all the nodes with a spanning tree of short
//!    edges, so the graph is connected before any random edge is added.
//! 3. [`extra_edges`] links the target to a few nearby nodes, adds a random
//!    layer of distance-capped edges, and finally gives every interior node
//!    at least two edges. These extra edges are what create the alternative
//!    routes that the player can explore.
//!
//! Generation never fails: when the placement retry budget runs out, the last
//! sampled position is kept. A cramped layout is acceptable, a disconnected
//! graph is not, and connectivity comes from the spanning tree no matter how
//! the placement went.
//!
//! The tutorial graph is not random; [`tutorial`] hands out the same 4-node
//! chain every time.

pub mod backbone;
pub mod extra_edges;
pub mod layout;
pub mod tutorial;

use log::debug;

use crate::graph::Graph;
use layout::Bounds;

/// Node count used by the random game phases.
pub const DEFAULT_NODE_COUNT: usize = 12;

/// Generate a connected random graph with `node_count` nodes placed inside
/// the given bounds.
pub fn generate(node_count: usize, bounds: &Bounds) -> Graph {
    let mut graph: Graph = Graph::new();
    layout::place_nodes(&mut graph, node_count, bounds);
    backbone::connect(&mut graph);
    extra_edges::link_target_shortcuts(&mut graph);
    extra_edges::weave_random_edges(&mut graph);
    extra_edges::repair_degrees(&mut graph);

    debug!(
        "Generated graph: {} nodes, {} edges, average degree {:.2}",
        graph.num_nodes(),
        graph.num_edges(),
        graph.average_degree()
    );
    debug_assert!(graph.is_connected(), "Bug: generated graph is disconnected");
    graph
}
