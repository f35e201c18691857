/*
search.rs

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

//! Search algorithms over the game graph.
//!
//! The canonical breadth-first path is deterministic for a given graph: the
//! frontier is expanded first-in-first-out and the neighbors of a node are
//! visited in their stored insertion order. Two graphs with the same topology
//! but different edge-insertion orders can therefore have different canonical
//! paths, and the verifier documents that the player must match the one of
//! the graph being played.

use log::debug;
use std::collections::{HashSet, VecDeque};

use crate::graph::Graph;
use crate::path::Path;

/// Compute the canonical breadth-first path from the start node to the
/// target node.
///
/// Each node is visited at most once and remembers the node that discovered
/// it; the path is then rebuilt by walking the parent chain back from the
/// target.
///
/// # Panics
///
/// The graph generator only produces connected graphs, so an unreachable
/// target is a programming error and the function panics on it.
pub fn canonical_bfs_path(graph: &Graph) -> Path {
    let start: usize = graph.start();
    let target: usize = graph.target();
    let mut parent: Vec<Option<usize>> = vec![None; graph.num_nodes()];
    let mut visited: Vec<bool> = vec![false; graph.num_nodes()];
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(graph.num_nodes());

    visited[start - 1] = true;
    queue.push_back(start);

    let mut found: bool = false;
    while let Some(current) = queue.pop_front() {
        if current == target {
            found = true;
            break;
        }
        for n in graph.neighbors(current) {
            if !visited[*n - 1] {
                visited[*n - 1] = true;
                parent[*n - 1] = Some(current);
                queue.push_back(*n);
            }
        }
    }
    assert!(
        found,
        "Bug: the target node is not reachable from the start node"
    );

    let mut ids: Vec<usize> = Vec::with_capacity(graph.num_nodes());
    let mut current: usize = target;
    loop {
        ids.push(current);
        match parent[current - 1] {
            Some(p) => current = p,
            None => break,
        }
    }
    ids.reverse();

    let path: Path = Path::from_ids(&ids);
    debug!("Canonical breadth-first path: {path}");
    path
}

/// Count the distinct simple paths from the start node to the target node.
///
/// The count is only displayed as a hint to the player; it never grades a
/// path. The enumeration is exponential in the worst case, which is fine for
/// the graph sizes of this game (a dozen nodes).
pub fn count_simple_paths(graph: &Graph) -> usize {
    let mut visited: HashSet<usize> = HashSet::with_capacity(graph.num_nodes());
    let count: usize = count_from(graph, graph.start(), graph.target(), &mut visited);
    debug!("{count} simple path(s) from the start node to the target node");
    count
}

/// Recursively enumerate the simple paths from `current` to `target`.
fn count_from(graph: &Graph, current: usize, target: usize, visited: &mut HashSet<usize>) -> usize {
    if current == target {
        return 1;
    }
    visited.insert(current);
    let mut count: usize = 0;
    for n in graph.neighbors(current) {
        if !visited.contains(n) {
            count += count_from(graph, *n, target, visited);
        }
    }
    visited.remove(&current);
    count
}
