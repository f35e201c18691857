/*
main.rs

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

mod cli_options;
mod config;

use std::process::ExitCode;

fn main() -> ExitCode {
    // The graphical game is driven by the presentation layer; this binary is
    // the developer front end for the graph generator.
    ExitCode::from(cli_options::parse())
}
