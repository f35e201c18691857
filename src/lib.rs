/*
lib.rs

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

//! Core of the Cybernexus graph-search teaching game.
//!
//! The game teaches breadth-first and depth-first search by letting the
//! player click nodes to build a path across a random connected graph. This
//! crate holds everything below the screen: the graph model and its
//! generator, the path verifiers, and the session state. The rendering, the
//! buttons, and the screen sequence live in the presentation layer, which
//! only consumes the types exposed here.
//!
//! A game session revolves around a [`game::Game`] object:
//!
//! * entering a phase builds the phase graph ([`generator::generate`] for
//!   the random phases, [`generator::tutorial`] for the fixed chain);
//! * each node click goes through [`game::Game::click_node`], which accepts
//!   or refuses it with a [`player_input::AppendResult`];
//! * on request, [`game::Game::verify`] judges the path with the verifier of
//!   the current phase and reports a [`verify::Outcome`].

pub mod game;
pub mod generator;
pub mod graph;
pub mod marks;
pub mod path;
pub mod player_input;
pub mod search;
pub mod verify;
