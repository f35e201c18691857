/*
extra_edges.rs

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

//! Extra edges over the spanning backbone.
//!
//! The backbone alone would leave a single route to every node. The passes
//! in this module add the redundancy that makes the game interesting: direct
//! links into the target, a random layer of short edges, and a final repair
//! pass so that no interior node is a dead end. All three passes only add
//! edges, so the connectivity of the backbone is never at risk.

use log::debug;
use rand::Rng;

use crate::graph::Graph;

/// Maximum number of direct links added between the target and nearby nodes.
const MAX_TARGET_LINKS: usize = 4;

/// Maximum distance for a direct link to the target.
const TARGET_LINK_RANGE: f64 = 500.0;

/// Distance cap for a random extra edge, on graphs of more than ten nodes.
const EXTRA_EDGE_RANGE: f64 = 600.0;

/// Distance cap for a random extra edge, on smaller graphs.
const EXTRA_EDGE_RANGE_SMALL: f64 = 500.0;

/// Minimum degree guaranteed to every non-start, non-target node.
const MIN_INTERIOR_DEGREE: usize = 2;

/// Link the target to its nearest non-adjacent nodes, so that it is not a
/// single dead end.
///
/// Up to [`MAX_TARGET_LINKS`] nodes within [`TARGET_LINK_RANGE`] of the
/// target are linked, closest first.
pub fn link_target_shortcuts(graph: &mut Graph) {
    let target: usize = graph.target();
    let mut candidates: Vec<(usize, f64)> = graph
        .nodes()
        .iter()
        .filter(|n| n.id != target && !graph.are_adjacent(n.id, target))
        .map(|n| (n.id, n.distance_to(graph.node(target))))
        .filter(|(_, dist)| *dist < TARGET_LINK_RANGE)
        .collect();
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (id, dist) in candidates.into_iter().take(MAX_TARGET_LINKS) {
        debug!("Target shortcut {id}-{target} (distance {dist:.0})");
        graph.add_edge(id, target);
    }
}

/// Add a random layer of distance-capped edges.
///
/// The number of attempts is drawn between twice and three times the node
/// count. Each attempt samples two nodes; distinct, non-adjacent pairs under
/// the distance cap are linked with a probability that decays linearly from
/// 0.7 down to 0.3 as the distance approaches the cap, so close pairs are
/// more likely to be linked.
pub fn weave_random_edges(graph: &mut Graph) {
    let n: usize = graph.num_nodes();
    if n < 2 {
        return;
    }
    let mut rng = rand::rng();
    let attempts: usize = rng.random_range(n * 2..=n * 3);
    let max_dist: f64 = if n > 10 {
        EXTRA_EDGE_RANGE
    } else {
        EXTRA_EDGE_RANGE_SMALL
    };

    for _ in 0..attempts {
        let id1: usize = rng.random_range(1..=n);
        let id2: usize = rng.random_range(1..=n);
        if id1 == id2 || graph.are_adjacent(id1, id2) {
            continue;
        }
        let dist: f64 = graph.node(id1).distance_to(graph.node(id2));
        if dist < max_dist {
            let prob: f64 = 0.7 - (dist / max_dist) * 0.4;
            if rng.random::<f64>() < prob {
                debug!("Extra edge {id1}-{id2} (distance {dist:.0})");
                graph.add_edge(id1, id2);
            }
        }
    }
}

/// Give every non-start, non-target node at least two edges by linking
/// low-degree nodes to their nearest non-neighbor.
pub fn repair_degrees(graph: &mut Graph) {
    let n: usize = graph.num_nodes();
    let start: usize = graph.start();
    let target: usize = graph.target();

    for id in 1..=n {
        if id == start || id == target || graph.degree(id) >= MIN_INTERIOR_DEGREE {
            continue;
        }

        let mut best: Option<usize> = None;
        let mut best_distance: f64 = f64::INFINITY;
        for other in 1..=n {
            if other == id || graph.are_adjacent(id, other) {
                continue;
            }
            let dist: f64 = graph.node(id).distance_to(graph.node(other));
            if dist < best_distance {
                best_distance = dist;
                best = Some(other);
            }
        }

        if let Some(other) = best {
            debug!("Degree repair: edge {id}-{other}");
            graph.add_edge(id, other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A backbone-only chain: 1 - 2 - 3 - 4 - 5, all 100 apart, node 5 target.
    fn chain_graph() -> Graph {
        let mut graph: Graph = Graph::new();
        for i in 0..5 {
            graph.add_node(100.0 * i as f64, 0.0, i == 4);
        }
        graph.set_start(1);
        for id in 1..5 {
            graph.add_edge(id, id + 1);
        }
        graph
    }

    #[test]
    fn target_gets_nearby_shortcuts() {
        let mut graph: Graph = chain_graph();
        link_target_shortcuts(&mut graph);

        // Nodes 1 (400 away), 2 (300) and 3 (200) are in range and not yet
        // adjacent to the target; node 4 already is.
        assert!(graph.are_adjacent(3, 5));
        assert!(graph.are_adjacent(2, 5));
        assert!(graph.are_adjacent(1, 5));
        assert_eq!(graph.degree(5), 4);
    }

    #[test]
    fn shortcuts_are_bounded() {
        // Ten nodes close to the target: only four shortcuts are added.
        let mut graph: Graph = Graph::new();
        for i in 0..10 {
            graph.add_node(30.0 * i as f64, 0.0, false);
        }
        graph.add_node(0.0, 50.0, true);
        graph.set_start(1);
        for id in 1..10 {
            graph.add_edge(id, id + 1);
        }
        graph.add_edge(10, 11);

        let before: usize = graph.degree(11);
        link_target_shortcuts(&mut graph);
        assert_eq!(graph.degree(11), before + MAX_TARGET_LINKS);
    }

    #[test]
    fn weave_only_adds_valid_edges() {
        let mut graph: Graph = chain_graph();
        let backbone_edges: usize = graph.num_edges();
        weave_random_edges(&mut graph);

        assert!(graph.num_edges() >= backbone_edges);
        assert!(graph.is_connected());
        for edge in graph.edges() {
            assert_ne!(edge.node1, edge.node2);
        }
    }

    #[test]
    fn repair_brings_interior_nodes_to_degree_two() {
        // A star around node 1: every leaf has degree 1.
        let mut graph: Graph = Graph::new();
        graph.add_node(500.0, 500.0, false);
        graph.add_node(500.0, 300.0, false);
        graph.add_node(700.0, 500.0, false);
        graph.add_node(500.0, 700.0, false);
        graph.add_node(300.0, 500.0, true);
        graph.set_start(1);
        for id in 2..=5 {
            graph.add_edge(1, id);
        }

        repair_degrees(&mut graph);
        for id in 2..=4 {
            assert!(graph.degree(id) >= MIN_INTERIOR_DEGREE);
        }
        assert!(graph.is_connected());
    }
}
