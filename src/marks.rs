/*
marks.rs

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

//! Transient highlight flags for nodes and edges.
//!
//! The flags only exist for the presentation layer: they record what must be
//! drawn highlighted and carry no algorithmic meaning. They are kept out of
//! the [`crate::graph::Node`] and [`crate::graph::Edge`] types so that
//! resetting them cannot touch the topology.

use serde::{Deserialize, Serialize};

/// Highlight flags of a single node.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default)]
pub struct NodeMarks {
    /// Whether a traversal displayed the node as visited.
    pub visited: bool,

    /// Whether the node belongs to the displayed path.
    pub in_path: bool,

    /// Whether the node is the current selection.
    pub selected: bool,
}

/// Highlight flags of a single edge.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default)]
pub struct EdgeMarks {
    /// Whether the player walked this edge.
    pub player_selected: bool,
}

/// Highlight flags for all the nodes and edges of a graph.
///
/// The flag slots are created along with the nodes and the edges, so the
/// vectors always have the same lengths as the graph node and edge lists.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Marks {
    /// One entry per node. The node with ID `i` is at index `i - 1`.
    nodes: Vec<NodeMarks>,

    /// One entry per edge, in edge-insertion order.
    edges: Vec<EdgeMarks>,
}

impl Marks {
    /// Create an empty [`Marks`] object.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add the flag slot for a new node.
    pub fn push_node(&mut self) {
        self.nodes.push(NodeMarks::default());
    }

    /// Add the flag slot for a new edge.
    pub fn push_edge(&mut self) {
        self.edges.push(EdgeMarks::default());
    }

    /// Return the flags of the given node.
    pub fn node(&self, id: usize) -> &NodeMarks {
        &self.nodes[id - 1]
    }

    /// Return the flags of the given node for updating.
    pub fn node_mut(&mut self, id: usize) -> &mut NodeMarks {
        &mut self.nodes[id - 1]
    }

    /// Return the flags of the edge at the given position in the edge list.
    pub fn edge(&self, index: usize) -> &EdgeMarks {
        &self.edges[index]
    }

    /// Return the flags of the edge at the given position for updating.
    pub fn edge_mut(&mut self, index: usize) -> &mut EdgeMarks {
        &mut self.edges[index]
    }

    /// Clear every flag. The slots are kept.
    pub fn reset(&mut self) {
        for m in self.nodes.iter_mut() {
            *m = NodeMarks::default();
        }
        for m in self.edges.iter_mut() {
            *m = EdgeMarks::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_every_flag() {
        let mut marks: Marks = Marks::new();
        marks.push_node();
        marks.push_node();
        marks.push_edge();
        marks.node_mut(1).visited = true;
        marks.node_mut(2).selected = true;
        marks.edge_mut(0).player_selected = true;

        marks.reset();
        assert!(!marks.node(1).visited);
        assert!(!marks.node(2).selected);
        assert!(!marks.edge(0).player_selected);
    }
}
