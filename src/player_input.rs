/*
player_input.rs

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

//! Manage the player's node clicks.
//!
//! The module grows the player path one node per accepted click and reports
//! why a click was refused. The rules:
//!
//! * An empty path only accepts the start node.
//! * A non-empty path only accepts a node that is adjacent to the last
//!   accepted node and not already in the path.
//!
//! Because of these rules the player path is always a simple walk, so the
//! verifiers never see a repeated node arriving from here.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::path::Path;

/// What happened to a node click.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppendResult {
    /// The click on the start node opened the path.
    Started,

    /// The node was appended to the path.
    Extended,

    /// The node was appended and is the target: the path is complete.
    ReachedTarget,

    /// The path is empty and the clicked node is not the start node.
    RejectedNotStart,

    /// The clicked node is not adjacent to the last node in the path.
    RejectedNotNeighbor,

    /// The clicked node is already in the path.
    RejectedAlreadyVisited,
}

impl AppendResult {
    /// Whether the click was accepted and the path grew.
    pub fn accepted(&self) -> bool {
        matches!(
            self,
            AppendResult::Started | AppendResult::Extended | AppendResult::ReachedTarget
        )
    }
}

/// Process a click on the given node and grow the path when the click is
/// legal.
///
/// Accepted clicks update the highlight flags: the node is flagged as
/// in-path, and the edge walked from the previous node is flagged as
/// player-selected.
pub fn append(graph: &mut Graph, path: &mut Path, id: usize) -> AppendResult {
    let Some(last) = path.last() else {
        // Only the start node can open the path.
        if id != graph.start() {
            debug!("Click on node {id} refused: the path must start at the start node");
            return AppendResult::RejectedNotStart;
        }
        path.push(id);
        graph.marks_mut().node_mut(id).in_path = true;
        return AppendResult::Started;
    };

    if graph.are_adjacent(last, id) && !path.contains(id) {
        path.push(id);
        graph.marks_mut().node_mut(id).in_path = true;
        if let Some(i) = graph.edge_index(last, id) {
            graph.marks_mut().edge_mut(i).player_selected = true;
        }
        if graph.node(id).is_target {
            return AppendResult::ReachedTarget;
        }
        return AppendResult::Extended;
    }

    // A node that is both used and non-adjacent reports the used case.
    if path.contains(id) {
        debug!("Click on node {id} refused: already in the path");
        AppendResult::RejectedAlreadyVisited
    } else {
        debug!("Click on node {id} refused: not a neighbor of node {last}");
        AppendResult::RejectedNotNeighbor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Start 1, target 4, routes 1-2-4 and 1-3-4.
    fn two_route_graph() -> Graph {
        let mut graph: Graph = Graph::new();
        graph.add_node(0.0, 0.0, false);
        graph.add_node(1.0, 1.0, false);
        graph.add_node(1.0, -1.0, false);
        graph.add_node(2.0, 0.0, true);
        graph.set_start(1);
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);
        graph.add_edge(3, 4);
        graph
    }

    #[test]
    fn empty_path_only_accepts_start() {
        let mut graph: Graph = two_route_graph();
        let mut path: Path = Path::new(4);
        assert_eq!(
            append(&mut graph, &mut path, 2),
            AppendResult::RejectedNotStart
        );
        assert!(path.is_empty());
        assert_eq!(append(&mut graph, &mut path, 1), AppendResult::Started);
        assert_eq!(path.get(), &vec![1]);
        assert!(graph.marks().node(1).in_path);
    }

    #[test]
    fn extends_only_to_unused_neighbors() {
        let mut graph: Graph = two_route_graph();
        let mut path: Path = Path::new(4);
        append(&mut graph, &mut path, 1);
        assert_eq!(
            append(&mut graph, &mut path, 4),
            AppendResult::RejectedNotNeighbor
        );
        assert_eq!(append(&mut graph, &mut path, 2), AppendResult::Extended);
        assert_eq!(
            append(&mut graph, &mut path, 1),
            AppendResult::RejectedAlreadyVisited
        );
        assert_eq!(
            append(&mut graph, &mut path, 4),
            AppendResult::ReachedTarget
        );
        assert_eq!(path.get(), &vec![1, 2, 4]);
    }

    #[test]
    fn walked_edges_are_flagged() {
        let mut graph: Graph = two_route_graph();
        let mut path: Path = Path::new(4);
        append(&mut graph, &mut path, 1);
        append(&mut graph, &mut path, 2);
        let i: usize = graph.edge_index(1, 2).unwrap();
        assert!(graph.marks().edge(i).player_selected);
        let unused: usize = graph.edge_index(1, 3).unwrap();
        assert!(!graph.marks().edge(unused).player_selected);
    }

    #[test]
    fn accepted_clicks_never_break_the_walk() {
        // Hammer the graph with a fixed click rotation: whatever is accepted
        // must keep the path a simple walk.
        let mut graph: Graph = two_route_graph();
        let mut path: Path = Path::new(4);
        for id in [3, 1, 1, 4, 3, 3, 2, 4] {
            append(&mut graph, &mut path, id);
        }
        let ids: &Vec<usize> = path.get();
        for pair in ids.windows(2) {
            assert!(graph.are_adjacent(pair[0], pair[1]));
        }
        let mut dedup: Vec<usize> = ids.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), ids.len());
    }
}
