/*
graph.rs

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

//! Nodes, edges, and the game graph.
//!
//! Nodes live in an arena owned by the [`Graph`] object and are identified by
//! a stable 1-based ID (the ID is the position of the node in generation
//! order). Edges are unordered ID pairs. Each node also keeps the list of its
//! adjacent node IDs in edge-insertion order; the breadth-first verifier
//! relies on that order being stable.
//!
//! Transient highlight flags are kept apart from the nodes and the edges, in
//! a [`crate::marks::Marks`] object. The [`Graph::reset`] method clears the
//! flags but never touches the topology.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::marks::Marks;
use crate::path::Path;

/// A node in the game graph.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Node {
    /// Node ID. IDs start at 1 and follow the generation order.
    pub id: usize,

    /// Horizontal position, used for distances during generation.
    pub x: f64,

    /// Vertical position, used for distances during generation.
    pub y: f64,

    /// Whether this node is the target that the player must reach.
    pub is_target: bool,

    /// IDs of the adjacent nodes, in edge-insertion order.
    pub neighbors: Vec<usize>,
}

impl Node {
    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// An undirected edge between two distinct nodes.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    /// ID of the first endpoint.
    pub node1: usize,

    /// ID of the second endpoint.
    pub node2: usize,
}

impl Edge {
    /// Whether the edge links the two given nodes, in either direction.
    pub fn links(&self, id1: usize, id2: usize) -> bool {
        (self.node1 == id1 && self.node2 == id2) || (self.node1 == id2 && self.node2 == id1)
    }
}

/// The game graph: a node arena, the edge list, and the start and target
/// node IDs.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Graph {
    /// Nodes in generation order. The node with ID `i` is at index `i - 1`.
    nodes: Vec<Node>,

    /// Edges in insertion order.
    edges: Vec<Edge>,

    /// ID of the start node, or 0 while the graph is under construction.
    start_node: usize,

    /// ID of the target node, or 0 while the graph is under construction.
    target_node: usize,

    /// Transient highlight flags for the nodes and the edges.
    marks: Marks,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty [`Graph`] object.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            start_node: 0,
            target_node: 0,
            marks: Marks::new(),
        }
    }

    /// Add a node at the given position and return its ID.
    ///
    /// The node flagged with `is_target` becomes the graph target.
    pub fn add_node(&mut self, x: f64, y: f64, is_target: bool) -> usize {
        let id: usize = self.nodes.len() + 1;
        self.nodes.push(Node {
            id,
            x,
            y,
            is_target,
            neighbors: Vec::new(),
        });
        self.marks.push_node();
        if is_target {
            self.target_node = id;
        }
        id
    }

    /// Add an undirected edge between the two given nodes.
    ///
    /// Both neighbor lists are updated so that adjacency stays symmetric.
    /// Callers must not add self-loops or duplicate edges.
    pub fn add_edge(&mut self, id1: usize, id2: usize) {
        debug_assert!(id1 != id2, "Bug: self-loop on node {id1}");
        debug_assert!(
            !self.are_adjacent(id1, id2),
            "Bug: duplicate edge {id1}-{id2}"
        );
        self.edges.push(Edge {
            node1: id1,
            node2: id2,
        });
        self.marks.push_edge();
        self.nodes[id1 - 1].neighbors.push(id2);
        self.nodes[id2 - 1].neighbors.push(id1);
    }

    /// Return the node with the given ID.
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id - 1]
    }

    /// Return all the nodes in generation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all the edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes in the graph.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// IDs of the nodes adjacent to the given node, in edge-insertion order.
    pub fn neighbors(&self, id: usize) -> &[usize] {
        &self.nodes[id - 1].neighbors
    }

    /// Whether an edge exists between the two given nodes.
    pub fn are_adjacent(&self, id1: usize, id2: usize) -> bool {
        self.nodes[id1 - 1].neighbors.contains(&id2)
    }

    /// Number of edges at the given node.
    pub fn degree(&self, id: usize) -> usize {
        self.nodes[id - 1].neighbors.len()
    }

    /// Position of the edge between the two given nodes in the edge list.
    pub fn edge_index(&self, id1: usize, id2: usize) -> Option<usize> {
        self.edges.iter().position(|e| e.links(id1, id2))
    }

    /// Declare the start node.
    pub fn set_start(&mut self, id: usize) {
        self.start_node = id;
    }

    /// ID of the start node.
    pub fn start(&self) -> usize {
        self.start_node
    }

    /// ID of the target node.
    pub fn target(&self) -> usize {
        self.target_node
    }

    /// Return the highlight flags.
    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    /// Return the highlight flags for updating.
    pub fn marks_mut(&mut self) -> &mut Marks {
        &mut self.marks
    }

    /// Clear the transient highlight flags. The topology is untouched.
    pub fn reset(&mut self) {
        self.marks.reset();
    }

    /// Flag the nodes and the edges of the given path so that the
    /// presentation layer can display it.
    pub fn highlight_path(&mut self, path: &Path) {
        for id in path.get() {
            self.marks.node_mut(*id).in_path = true;
        }
        for pair in path.get().windows(2) {
            if let Some(i) = self.edge_index(pair[0], pair[1]) {
                self.marks.edge_mut(i).player_selected = true;
            }
        }
    }

    /// Average node degree. The presentation layer grades the graph density
    /// with this value.
    pub fn average_degree(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        let total: usize = self.nodes.iter().map(|n| n.neighbors.len()).sum();
        total as f64 / self.nodes.len() as f64
    }

    /// Whether every node is reachable from the start node.
    pub fn is_connected(&self) -> bool {
        if self.nodes.is_empty() {
            return true;
        }
        let mut seen: HashSet<usize> = HashSet::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = vec![self.start_node];
        seen.insert(self.start_node);
        while let Some(id) = stack.pop() {
            for n in self.neighbors(id) {
                if seen.insert(*n) {
                    stack.push(*n);
                }
            }
        }
        seen.len() == self.nodes.len()
    }
}
