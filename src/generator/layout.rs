/*
layout.rs

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

//! Random node placement.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Number of positions sampled for a node before giving up on the minimum
/// separation and keeping the last sample.
const MAX_PLACEMENT_ATTEMPTS: usize = 50;

/// Rectangular area where the nodes are placed.
///
/// The defaults leave room around the play field for the title, the message
/// banner, and the control buttons of a 1920x1080 screen.
#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Bounds {
    /// Left limit.
    pub min_x: f64,

    /// Right limit.
    pub max_x: f64,

    /// Top limit.
    pub min_y: f64,

    /// Bottom limit.
    pub max_y: f64,

    /// Minimum distance between two nodes, so that the graph stays readable.
    pub min_separation: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: 250.0,
            max_x: 1670.0,
            min_y: 250.0,
            max_y: 750.0,
            min_separation: 120.0,
        }
    }
}

/// Place `node_count` nodes at random positions inside the bounds.
///
/// A candidate position closer than the minimum separation to an existing
/// node is resampled, up to [`MAX_PLACEMENT_ATTEMPTS`] times; after that the
/// last candidate is kept as is. The first node placed becomes the start and
/// the last one becomes the target.
pub fn place_nodes(graph: &mut Graph, node_count: usize, bounds: &Bounds) {
    let mut rng = rand::rng();

    for i in 0..node_count {
        let mut x: f64 = 0.0;
        let mut y: f64 = 0.0;
        for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            x = rng.random_range(bounds.min_x..=bounds.max_x);
            y = rng.random_range(bounds.min_y..=bounds.max_y);
            if !too_close(graph, x, y, bounds.min_separation) {
                break;
            }
            if attempt == MAX_PLACEMENT_ATTEMPTS - 1 {
                debug!("No well-separated position for node {}, keeping the last sample", i + 1);
            }
        }
        graph.add_node(x, y, i == node_count - 1);
    }
    graph.set_start(1);
}

/// Whether the candidate position is within the minimum separation of an
/// already-placed node.
fn too_close(graph: &Graph, x: f64, y: f64, min_separation: f64) -> bool {
    graph
        .nodes()
        .iter()
        .any(|n| ((n.x - x).powi(2) + (n.y - y).powi(2)).sqrt() < min_separation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_the_requested_nodes() {
        let bounds: Bounds = Bounds::default();
        let mut graph: Graph = Graph::new();
        place_nodes(&mut graph, 12, &bounds);

        assert_eq!(graph.num_nodes(), 12);
        assert_eq!(graph.start(), 1);
        assert_eq!(graph.target(), 12);
        assert!(!graph.node(1).is_target);
        assert!(graph.node(12).is_target);
        for node in graph.nodes() {
            assert!(node.x >= bounds.min_x && node.x <= bounds.max_x);
            assert!(node.y >= bounds.min_y && node.y <= bounds.max_y);
        }
    }

    #[test]
    fn separation_holds_when_there_is_room() {
        // Few nodes in a large area: the rejection sampling has no reason to
        // run out of attempts.
        let bounds: Bounds = Bounds::default();
        let mut graph: Graph = Graph::new();
        place_nodes(&mut graph, 4, &bounds);

        for a in graph.nodes() {
            for b in graph.nodes() {
                if a.id < b.id {
                    assert!(a.distance_to(b) >= bounds.min_separation);
                }
            }
        }
    }

    #[test]
    fn impossible_separation_still_places_every_node() {
        let bounds: Bounds = Bounds {
            min_x: 0.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 10.0,
            min_separation: 1000.0,
        };
        let mut graph: Graph = Graph::new();
        place_nodes(&mut graph, 8, &bounds);
        assert_eq!(graph.num_nodes(), 8);
    }
}
