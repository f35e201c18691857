/*
verify.rs

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

//! Judge the player's path.
//!
//! The breadth-first check requires an exact match with the canonical
//! breadth-first path of the graph (see [`crate::search::canonical_bfs_path`]
//! for the tie-break). A shortest path that is not the canonical one reports
//! [`Outcome::ValidButSuboptimal`], like any other valid walk.
//!
//! The depth-first check accepts any simple adjacency-respecting walk from
//! the start node to the target. Several depth-first visit orders are equally
//! legitimate, so the check does not try to single one out; it also accepts
//! paths that no depth-first traversal would produce.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::path::Path;
use crate::search;

/// Verdict on a player path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The path satisfies the requested traversal.
    Success,

    /// The path is a valid walk to the target but does not match the
    /// canonical breadth-first path, which is carried for display.
    ValidButSuboptimal(Path),

    /// Two consecutive nodes of the path are not adjacent.
    Invalid,

    /// The path does not end on the target node.
    NotAtTarget,

    /// The path is empty.
    NoPath,
}

/// Whether every consecutive pair of nodes in the path is adjacent in the
/// graph.
///
/// Node repetition is not checked here: the click handling refuses reused
/// nodes before they can enter the path.
pub fn is_walk(graph: &Graph, path: &Path) -> bool {
    path.get()
        .windows(2)
        .all(|pair| graph.are_adjacent(pair[0], pair[1]))
}

/// Check the player path against the canonical breadth-first traversal.
pub fn verify_bfs(graph: &Graph, path: &Path) -> Outcome {
    if path.is_empty() {
        return Outcome::NoPath;
    }
    if path.last() != Some(graph.target()) {
        return Outcome::NotAtTarget;
    }

    let canonical: Path = search::canonical_bfs_path(graph);
    if *path == canonical {
        Outcome::Success
    } else if is_walk(graph, path) {
        Outcome::ValidButSuboptimal(canonical)
    } else {
        Outcome::Invalid
    }
}

/// Check the player path as a depth-first demonstration: any simple walk
/// from the start node to the target passes.
pub fn verify_dfs(graph: &Graph, path: &Path) -> Outcome {
    if path.is_empty() {
        return Outcome::NoPath;
    }
    if path.last() != Some(graph.target()) {
        return Outcome::NotAtTarget;
    }

    if is_walk(graph, path) {
        Outcome::Success
    } else {
        Outcome::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The tutorial shape: 1 - 2 - 3 - 4 with 4 as the target.
    fn chain_graph() -> Graph {
        let mut graph: Graph = Graph::new();
        graph.add_node(0.0, 0.0, false);
        graph.add_node(1.0, 0.0, false);
        graph.add_node(2.0, 0.0, false);
        graph.add_node(3.0, 0.0, true);
        graph.set_start(1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        graph
    }

    // Start 1, target 4, routes 1-2-4 and 1-3-4, plus the long way 1-2-5-4.
    fn two_route_graph() -> Graph {
        let mut graph: Graph = Graph::new();
        graph.add_node(0.0, 0.0, false);
        graph.add_node(1.0, 1.0, false);
        graph.add_node(1.0, -1.0, false);
        graph.add_node(2.0, 0.0, true);
        graph.add_node(2.0, 2.0, false);
        graph.set_start(1);
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);
        graph.add_edge(3, 4);
        graph.add_edge(2, 5);
        graph.add_edge(5, 4);
        graph
    }

    #[test]
    fn chain_path_is_the_canonical_bfs() {
        let graph: Graph = chain_graph();
        let path: Path = Path::from_ids(&[1, 2, 3, 4]);
        assert_eq!(verify_bfs(&graph, &path), Outcome::Success);
    }

    #[test]
    fn empty_and_short_paths_are_refused() {
        let graph: Graph = chain_graph();
        assert_eq!(verify_bfs(&graph, &Path::new(4)), Outcome::NoPath);
        assert_eq!(verify_dfs(&graph, &Path::new(4)), Outcome::NoPath);
        let partial: Path = Path::from_ids(&[1, 2]);
        assert_eq!(verify_bfs(&graph, &partial), Outcome::NotAtTarget);
        assert_eq!(verify_dfs(&graph, &partial), Outcome::NotAtTarget);
    }

    #[test]
    fn only_the_tie_broken_shortest_path_wins() {
        let graph: Graph = two_route_graph();
        // Node 2 was wired to the start before node 3, so the canonical path
        // goes through node 2.
        assert_eq!(
            verify_bfs(&graph, &Path::from_ids(&[1, 2, 4])),
            Outcome::Success
        );

        // The other shortest path is valid but not canonical.
        match verify_bfs(&graph, &Path::from_ids(&[1, 3, 4])) {
            Outcome::ValidButSuboptimal(canonical) => {
                assert_eq!(canonical.get(), &vec![1, 2, 4]);
            }
            outcome => panic!("unexpected outcome {outcome:?}"),
        }
    }

    #[test]
    fn longer_walk_is_suboptimal_for_bfs() {
        let graph: Graph = two_route_graph();
        match verify_bfs(&graph, &Path::from_ids(&[1, 2, 5, 4])) {
            Outcome::ValidButSuboptimal(canonical) => {
                assert_eq!(canonical.get(), &vec![1, 2, 4]);
            }
            outcome => panic!("unexpected outcome {outcome:?}"),
        }
    }

    #[test]
    fn any_simple_route_passes_dfs() {
        let graph: Graph = two_route_graph();
        assert_eq!(
            verify_dfs(&graph, &Path::from_ids(&[1, 2, 4])),
            Outcome::Success
        );
        assert_eq!(
            verify_dfs(&graph, &Path::from_ids(&[1, 3, 4])),
            Outcome::Success
        );
        assert_eq!(
            verify_dfs(&graph, &Path::from_ids(&[1, 2, 5, 4])),
            Outcome::Success
        );
    }

    #[test]
    fn disconnected_jumps_are_invalid() {
        let graph: Graph = two_route_graph();
        // Nodes 3 and 5 are not adjacent.
        let jump: Path = Path::from_ids(&[1, 3, 5, 4]);
        assert_eq!(verify_bfs(&graph, &jump), Outcome::Invalid);
        assert_eq!(verify_dfs(&graph, &jump), Outcome::Invalid);
    }
}
