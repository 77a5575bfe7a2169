/*
tiling.rs

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

//! Shapes built from integer arithmetic on the cell coordinates: blocks, stripes, and lattices.

use super::ShapeContext;
use crate::grid::Grid;

/// Checkerboard of square blocks. Only the even blocks are painted.
pub fn checkerboard(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let block: usize = (ctx.size / 6).max(1);
    ctx.fill(pattern, |i, j| {
        let b: usize = i / block + j / block;
        if b % 2 == 0 {
            Some(ctx.code(b as i64))
        } else {
            None
        }
    });
}

/// Diagonal lines in both directions, every four cells.
pub fn crosshatch(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let (i, j) = (i as i64, j as i64);
        if (i + j) % 4 == 0 || (i - j) % 4 == 0 {
            Some(ctx.code(i * j))
        } else {
            None
        }
    });
}

/// Staggered rows of blocks, with a one-cell gap between the blocks.
pub fn hexagons(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let hex: usize = (ctx.size / 8).max(2);
    let width: f64 = hex as f64;
    ctx.fill(pattern, |i, j| {
        let hex_i: usize = i / hex;
        let hex_j: usize = j / hex;
        // Odd rows are shifted by half a block. The remainder keeps its sign, so the first
        // cells of a shifted row are painted.
        let offset: f64 = if hex_i % 2 == 0 { 0.0 } else { width / 2.0 };
        if (j as f64 - offset) % width < width - 1.0 {
            Some(ctx.code((hex_i + hex_j) as i64))
        } else {
            None
        }
    });
}

/// Every cell is painted. The color depends on the distance to the nearest border.
pub fn pyramid(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let last: usize = ctx.size.saturating_sub(1);
    ctx.fill(pattern, |i, j| {
        let level: usize = i.min(j).min(last - i).min(last - j);
        Some(ctx.code(level as i64))
    });
}

pub fn maze(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let maze: usize = (i * 7 + j * 11) % 13;
        if maze > 5 {
            Some(ctx.code(maze as i64))
        } else {
            None
        }
    });
}

/// Two anti-diagonal stripes out of every five.
pub fn labyrinth(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| match (i + j) % 5 {
        0 | 2 => Some(ctx.code((i * j) as i64)),
        _ => None,
    });
}

/// The two diagonals, two cells wide.
pub fn origami(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let size: i64 = ctx.size as i64;
    ctx.fill(pattern, |i, j| {
        let (i, j) = (i as i64, j as i64);
        let fold1: i64 = (i - j).abs();
        let fold2: i64 = (i + j - size).abs();
        if fold1 < 2 || fold2 < 2 {
            Some(ctx.code(i + j))
        } else {
            None
        }
    });
}

/// Square tiles, a third of which are left empty.
pub fn mosaic(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let tile: usize = (ctx.size / 6).max(2);
    ctx.fill(pattern, |i, j| {
        let tile_i: usize = i / tile;
        let tile_j: usize = j / tile;
        if (tile_i * 7 + tile_j * 13) % 3 > 0 {
            Some(ctx.code((tile_i + tile_j) as i64))
        } else {
            None
        }
    });
}

/// Horizontal and vertical traces every four cells. The junctions get their own color sequence.
pub fn circuit_board(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let horizontal: bool = i % 4 == 0;
        let vertical: bool = j % 4 == 0;
        if horizontal && vertical {
            Some(ctx.code(((i + j) / 4) as i64))
        } else if horizontal || vertical {
            Some(ctx.code((i + j) as i64))
        } else {
            None
        }
    });
}
