/*
scoring.rs

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

//! Detect stage completion and compute the stage score.
//!
//! The perfect number of moves for a stage is the number of target cells that are not the
//! background. Every move above or below that number costs two points out of 100. The stage
//! number adds a bonus of five points per stage, whatever the efficiency.
//!
//! Every move counts, including repainting a cell with the color it already has.

use crate::grid::Grid;
use crate::palette::{BACKGROUND, Color};

/// Efficiency score of a perfect game.
const MAX_EFFICIENCY: i64 = 100;

/// Points lost for each move away from the perfect number of moves.
const MOVE_PENALTY: i64 = 2;

/// Bonus points per stage number.
const STAGE_BONUS: u32 = 5;

/// Whether the canvas is identical to the target.
///
/// # Panics
///
/// The function panics if the two grids do not have the same size. They are built for the same
/// stage and must always share their dimensions.
pub fn is_complete(canvas: &Grid<Color>, target: &Grid<Color>) -> bool {
    assert_eq!(
        canvas.size(),
        target.size(),
        "Bug: the canvas and the target grids have different sizes"
    );
    canvas.cells().eq(target.cells())
}

/// Return the number of target cells that the player must paint.
pub fn filled_cells(target: &Grid<Color>) -> usize {
    target.cells().filter(|c| **c != BACKGROUND).count()
}

/// Compute the score for a completed stage.
pub fn compute_score(moves: u32, stage: u32, target: &Grid<Color>) -> u32 {
    let perfect: i64 = filled_cells(target) as i64;
    let efficiency: i64 = (MAX_EFFICIENCY - MOVE_PENALTY * (moves as i64 - perfect).abs()).max(0);
    efficiency as u32 + stage * STAGE_BONUS
}
