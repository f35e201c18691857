/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The presentation layer owns the screens and the buttons; this module owns
//! everything the screens display: the current phase, the graph being
//! played, the path built so far, and the phase-completion flags that gate
//! the victory screen.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use crate::generator;
use crate::generator::layout::Bounds;
use crate::generator::tutorial;
use crate::graph::Graph;
use crate::path::Path;
use crate::player_input::{self, AppendResult};
use crate::search;
use crate::verify::{self, Outcome};

/// Game phase.
///
/// The tutorial plays on a fixed linear graph; the two random phases ask for
/// a breadth-first and then a depth-first demonstration.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, FromRepr, Default,
)]
#[repr(i32)]
pub enum Phase {
    #[default]
    Tutorial,
    BreadthFirst,
    DepthFirst,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phase::Tutorial => write!(f, "tutorial"),
            Phase::BreadthFirst => write!(f, "breadth-first"),
            Phase::DepthFirst => write!(f, "depth-first"),
        }
    }
}

impl Phase {
    /// Return the phase that follows this one, or [`None`] after the last
    /// phase.
    pub fn next(self) -> Option<Phase> {
        Phase::from_repr(self as i32 + 1)
    }
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug)]
pub struct Game {
    /// Graph being played.
    pub graph: Graph,

    /// Path built by the player, in click order.
    pub path: Path,

    /// Current phase.
    phase: Phase,

    /// ID of the last node that the player selected.
    selected_node: Option<usize>,

    /// Whether the player completed the breadth-first phase.
    bfs_completed: bool,

    /// Whether the player completed the depth-first phase.
    dfs_completed: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a [`Game`] object, starting at the tutorial.
    pub fn new() -> Self {
        Self {
            graph: tutorial::tutorial_graph(),
            path: Path::new(tutorial::TUTORIAL_NODE_COUNT),
            phase: Phase::Tutorial,
            selected_node: None,
            bfs_completed: false,
            dfs_completed: false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enter the given phase with a fresh graph.
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.new_graph();
    }

    /// Enter the next phase, or report `false` when every phase has been
    /// played and the victory screen can be shown.
    pub fn advance_phase(&mut self) -> bool {
        match self.phase.next() {
            Some(phase) => {
                self.set_phase(phase);
                true
            }
            None => false,
        }
    }

    /// Discard the current graph and play the current phase on a new one.
    ///
    /// The tutorial always gets the same fixed chain; the random phases get
    /// a newly generated graph.
    pub fn new_graph(&mut self) {
        self.graph = match self.phase {
            Phase::Tutorial => tutorial::tutorial_graph(),
            Phase::BreadthFirst | Phase::DepthFirst => {
                generator::generate(generator::DEFAULT_NODE_COUNT, &Bounds::default())
            }
        };
        self.path = Path::new(self.graph.num_nodes());
        self.selected_node = None;
    }

    /// Clear the player path and the highlight flags, keeping the graph so
    /// that the player can retry on the same topology.
    pub fn reset_path(&mut self) {
        self.graph.reset();
        self.path.clear();
        self.selected_node = None;
    }

    /// Process a click on the given node.
    pub fn click_node(&mut self, id: usize) -> AppendResult {
        let result: AppendResult = player_input::append(&mut self.graph, &mut self.path, id);
        if result.accepted() {
            if let Some(prev) = self.selected_node {
                self.graph.marks_mut().node_mut(prev).selected = false;
            }
            self.graph.marks_mut().node_mut(id).selected = true;
            self.selected_node = Some(id);
        }
        result
    }

    /// ID of the last node that the player selected.
    pub fn selected_node(&self) -> Option<usize> {
        self.selected_node
    }

    /// Judge the player path with the verifier of the current phase and
    /// record the phase completion on success.
    pub fn verify(&mut self) -> Outcome {
        let outcome: Outcome = match self.phase {
            Phase::Tutorial | Phase::BreadthFirst => verify::verify_bfs(&self.graph, &self.path),
            Phase::DepthFirst => verify::verify_dfs(&self.graph, &self.path),
        };
        if outcome == Outcome::Success {
            match self.phase {
                Phase::Tutorial => (),
                Phase::BreadthFirst => self.bfs_completed = true,
                Phase::DepthFirst => self.dfs_completed = true,
            }
        }
        outcome
    }

    /// Number of distinct simple paths to the target, displayed as a hint.
    pub fn path_hint(&self) -> usize {
        search::count_simple_paths(&self.graph)
    }

    /// Display the canonical breadth-first path on the graph and return it.
    ///
    /// The player path is cleared so that the player can replicate the
    /// displayed path.
    pub fn show_correct_path(&mut self) -> Path {
        let canonical: Path = search::canonical_bfs_path(&self.graph);
        self.graph.reset();
        self.graph.highlight_path(&canonical);
        self.path.clear();
        self.selected_node = None;
        canonical
    }

    /// Whether the player completed the breadth-first phase.
    pub fn bfs_completed(&self) -> bool {
        self.bfs_completed
    }

    /// Whether the player completed the depth-first phase.
    pub fn dfs_completed(&self) -> bool {
        self.dfs_completed
    }

    /// Whether both graded phases are completed and the victory screen can
    /// be shown.
    pub fn all_completed(&self) -> bool {
        self.bfs_completed && self.dfs_completed
    }
}
