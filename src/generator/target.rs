/*
target.rs

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

//! Build the target grid (the solution) of a stage.

use super::pattern;
use crate::grid::Grid;
use crate::palette::{self, Color};

/// Build the target grid for a stage by converting the pattern codes into palette colors.
pub fn build_target_grid(size: usize, stage: u32, level: u32) -> Grid<Color> {
    let colors: &[Color] = palette::active_palette(level);
    pattern::generate_pattern(size, stage, level).map(|code| palette::color_for_code(colors, code))
}
