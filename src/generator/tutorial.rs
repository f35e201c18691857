/*
tutorial.rs

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

//! The fixed tutorial graph.

use crate::graph::Graph;

/// Number of nodes in the tutorial graph.
pub const TUTORIAL_NODE_COUNT: usize = 4;

/// Build the tutorial graph: four nodes in a horizontal line, linked as a
/// chain, with the rightmost node as the target. There is a single path, so
/// the player cannot take a wrong turn while learning the controls.
pub fn tutorial_graph() -> Graph {
    let mut graph: Graph = Graph::new();
    graph.add_node(600.0, 540.0, false);
    graph.add_node(900.0, 540.0, false);
    graph.add_node(1200.0, 540.0, false);
    graph.add_node(1500.0, 540.0, true);
    graph.set_start(1);
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);
    graph.add_edge(3, 4);
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search;

    #[test]
    fn tutorial_graph_is_a_chain() {
        let graph: Graph = tutorial_graph();
        assert_eq!(graph.num_nodes(), TUTORIAL_NODE_COUNT);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.start(), 1);
        assert_eq!(graph.target(), 4);
        assert!(graph.is_connected());
        assert_eq!(search::count_simple_paths(&graph), 1);
        assert_eq!(search::canonical_bfs_path(&graph).get(), &vec![1, 2, 3, 4]);
    }
}
