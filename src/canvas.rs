/*
canvas.rs

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

//! The player's canvas.
//!
//! Painting does not modify the canvas in place: [`paint_cell`] returns a new grid. Counting
//! moves is a game rule and is done by [`crate::game::Game`].

use crate::grid::{Grid, GridError};
use crate::palette::{BACKGROUND, Color};

/// Create a canvas with all the cells set to the background color.
pub fn create_empty_canvas(size: usize) -> Grid<Color> {
    Grid::filled(size, BACKGROUND)
}

/// Return a copy of the canvas with the given cell painted.
///
/// # Errors
///
/// The function returns an error if the cell is outside of the canvas.
pub fn paint_cell(
    canvas: &Grid<Color>,
    row: usize,
    col: usize,
    color: Color,
) -> Result<Grid<Color>, GridError> {
    let mut painted: Grid<Color> = canvas.clone();
    painted.set(row, col, color)?;
    Ok(painted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::GAME_COLORS;

    #[test]
    fn test_empty_canvas() {
        let canvas: Grid<Color> = create_empty_canvas(7);
        assert_eq!(canvas.size(), 7);
        assert!(canvas.cells().all(|c| *c == BACKGROUND));
    }

    #[test]
    fn test_paint_leaves_input_unchanged() {
        let canvas: Grid<Color> = create_empty_canvas(7);
        let painted: Grid<Color> = paint_cell(&canvas, 0, 0, GAME_COLORS[0]).unwrap();
        assert_eq!(canvas.get(0, 0), Some(BACKGROUND));
        assert_eq!(painted.get(0, 0), Some(GAME_COLORS[0]));
        let differences: usize = canvas
            .cells()
            .zip(painted.cells())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(differences, 1);
    }

    #[test]
    fn test_repaint_same_color() {
        let canvas: Grid<Color> = create_empty_canvas(3);
        let once: Grid<Color> = paint_cell(&canvas, 1, 1, GAME_COLORS[1]).unwrap();
        let twice: Grid<Color> = paint_cell(&once, 1, 1, GAME_COLORS[1]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_paint_out_of_bounds() {
        let canvas: Grid<Color> = create_empty_canvas(7);
        assert_eq!(
            paint_cell(&canvas, 7, 0, GAME_COLORS[0]),
            Err(GridError::OutOfBounds {
                row: 7,
                col: 0,
                size: 7
            })
        );
    }
}
