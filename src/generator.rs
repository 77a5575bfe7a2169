/*
generator.rs

Copyright 2025 Hervé Quatremain

This file is part of Pixel Master.

Pixel Master is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pixel Master is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pixel Master. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate the puzzle of a stage.
//!
//! A puzzle is built in two steps:
//!
//! * [`pattern::generate_pattern`] selects a shape from the [`shapes::SHAPES`] catalogue by
//!   using the stage number, and draws it into a grid of pattern codes.
//!   Code 0 is the background, and codes 1 to N refer to the first N palette colors.
//!
//! * [`target::build_target_grid`] converts the codes into colors.
//!   The resulting grid is the solution that the player must reproduce on their canvas.
//!
//! Both steps are pure functions of the grid size, the stage, and the level: there is no random
//! source and no state kept between calls, so a stage always produces the same puzzle.

pub mod pattern;
pub mod shapes;
pub mod target;

pub use pattern::generate_pattern;
pub use target::build_target_grid;
