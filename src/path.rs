/*
path.rs

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

//! Path over the game graph.
//!
//! A path is an ordered list of node IDs without repetition. The same type
//! holds the path that the player builds click by click and the canonical
//! breadth-first path that the verifier computes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Path object.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of node IDs.
    path: Vec<usize>,

    /// Stores the visited status of the nodes.
    /// Instead of looking for the node in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<usize>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl fmt::Display for Path {
    /// Format the path the way the game displays it, such as `1 -> 5 -> 12`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ids: Vec<String> = self.path.iter().map(|id| id.to_string()).collect();
        write!(f, "{}", ids.join(" -> "))
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_nodes),
            visited: HashSet::with_capacity(num_nodes),
        }
    }

    /// Create a [`Path`] object from a list of node IDs.
    pub fn from_ids(ids: &[usize]) -> Self {
        let mut p: Self = Self::new(ids.len());
        for id in ids {
            p.push(*id);
        }
        p
    }

    /// Remove all the nodes from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a node to the path.
    pub fn push(&mut self, id: usize) {
        self.path.push(id);
        self.visited.insert(id);
    }

    /// Remove the last node from the path.
    pub fn pop(&mut self) {
        if let Some(id) = self.path.pop() {
            self.visited.remove(&id);
        }
    }

    /// Get the number of nodes in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no nodes.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the node is in the path or not.
    pub fn contains(&self, id: usize) -> bool {
        self.visited.contains(&id)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<usize> {
        &self.path
    }

    /// Return the first node in the path.
    pub fn first(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Return the last node in the path.
    pub fn last(&self) -> Option<usize> {
        self.path.last().copied()
    }
}
