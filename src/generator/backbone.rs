/*
backbone.rs

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

//! Spanning backbone of the generated graph.

use crate::graph::Graph;

/// Connect all the nodes with a spanning tree of short edges.
///
/// Starting from the start node, the closest (connected, unconnected) pair
/// by Euclidean distance is linked and the unconnected node joins the
/// connected set, until no unconnected node is left. The comparison is
/// strict, so on equal distances the first pair in iteration order (the
/// unconnected nodes in ID order, then the connected nodes in insertion
/// order) wins.
pub fn connect(graph: &mut Graph) {
    if graph.num_nodes() == 0 {
        return;
    }
    let start: usize = graph.start();
    let mut connected: Vec<usize> = vec![start];
    let mut unconnected: Vec<usize> = (1..=graph.num_nodes()).filter(|id| *id != start).collect();

    while !unconnected.is_empty() {
        let mut best_pair: Option<(usize, usize)> = None;
        let mut best_distance: f64 = f64::INFINITY;

        for uc in &unconnected {
            for c in &connected {
                let dist: f64 = graph.node(*uc).distance_to(graph.node(*c));
                if dist < best_distance {
                    best_distance = dist;
                    best_pair = Some((*c, *uc));
                }
            }
        }

        if let Some((c, uc)) = best_pair {
            graph.add_edge(c, uc);
            connected.push(uc);
            unconnected.retain(|id| *id != uc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_connects_every_node() {
        let mut graph: Graph = Graph::new();
        graph.add_node(0.0, 0.0, false);
        graph.add_node(500.0, 0.0, false);
        graph.add_node(0.0, 400.0, false);
        graph.add_node(500.0, 400.0, true);
        graph.set_start(1);

        connect(&mut graph);
        assert!(graph.is_connected());
        // A spanning tree has exactly n - 1 edges.
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn closest_pairs_are_linked_first() {
        // Node 2 is nearest to the start, node 3 is nearest to node 2.
        let mut graph: Graph = Graph::new();
        graph.add_node(0.0, 0.0, false);
        graph.add_node(100.0, 0.0, false);
        graph.add_node(250.0, 0.0, true);
        graph.set_start(1);

        connect(&mut graph);
        assert!(graph.are_adjacent(1, 2));
        assert!(graph.are_adjacent(2, 3));
        assert!(!graph.are_adjacent(1, 3));
    }

    #[test]
    fn single_node_needs_no_edges() {
        let mut graph: Graph = Graph::new();
        graph.add_node(0.0, 0.0, true);
        graph.set_start(1);
        connect(&mut graph);
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.is_connected());
    }
}
