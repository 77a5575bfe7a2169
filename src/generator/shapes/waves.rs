/*
waves.rs

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

//! Shapes built from sine and cosine curves, plus the spiral walk.

use super::{ShapeContext, put};
use crate::grid::Grid;

/// Square spiral walking outward from the center, cycling through the palette.
///
/// The walk takes exactly `size * size` steps. Steps that fall outside of the grid do not use a
/// color, and some cells are never reached.
pub fn spiral(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let size: i64 = ctx.size as i64;
    let colors: u8 = ctx.colors as u8;
    let (mut x, mut y) = (ctx.center(), ctx.center());
    let (mut dx, mut dy) = (0_i64, -1_i64);
    let mut steps: usize = 1;
    let mut step_count: usize = 0;
    let mut color: u8 = 1;

    for _ in 0..ctx.size * ctx.size {
        if (0..size).contains(&x) && (0..size).contains(&y) {
            put(pattern, y, x, color);
            color = color % colors + 1;
        }

        // Turn right, and lengthen the arm every other turn
        if step_count == steps {
            step_count = 0;
            (dx, dy) = (-dy, dx);
            if dy == 0 {
                steps += 1;
            }
        }

        x += dx;
        y += dy;
        step_count += 1;
    }
}

/// Horizontal dashes that follow a sine wave.
pub fn zigzag(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let wave: usize = ((j as f64 / 3.0).sin() * 5.0).abs().floor() as usize;
        if i % 4 == wave % 4 {
            Some(ctx.code(j as i64))
        } else {
            None
        }
    });
}

/// Sum of a horizontal and a vertical sine wave.
pub fn wave_interference(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let wave1: f64 = (i as f64 / 2.0).sin() * 3.0;
        let wave2: f64 = (j as f64 / 2.0).sin() * 3.0;
        let interference: i64 = (wave1 + wave2).abs().floor() as i64;
        if interference % 2 == 0 {
            Some(ctx.code(interference))
        } else {
            None
        }
    });
}

pub fn celtic_knot(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let knot: f64 = ((i as f64 / 2.0).sin() + (j as f64 / 2.0).cos()) * 3.0;
        let band: i64 = knot.abs().floor() as i64;
        if band % 2 == 0 {
            Some(ctx.code(band))
        } else {
            None
        }
    });
}

/// Only the crests and the troughs are painted.
pub fn tribal(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let wave: f64 = ((i as f64 / 3.0).sin() + (j as f64 / 3.0).cos()) * 5.0;
        let tribal: i64 = wave.floor() as i64;
        if tribal.abs() > 3 {
            Some(ctx.code(tribal.abs()))
        } else {
            None
        }
    });
}

/// Vertical bolt, three cells wide, swinging around the center column.
pub fn lightning_bolt(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let last: i64 = ctx.size as i64 - 1;
    for i in 0..ctx.size as i64 {
        let swing: f64 = (i as f64 / 2.0).sin() * (ctx.side() / 4.0);
        let zigzag: i64 = ctx.center() + swing.floor() as i64;
        for j in (zigzag - 1).max(0)..=(zigzag + 1).min(last) {
            put(pattern, i, j, ctx.code(i + j));
        }
    }
}

/// Two strands, one following a sine and the other a cosine. One color per row.
pub fn dna_helix(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let amplitude: f64 = ctx.side() / 6.0;
    for i in 0..ctx.size as i64 {
        let phase: f64 = i as f64 / 2.0;
        let helix1: i64 = ctx.center() + (phase.sin() * amplitude).floor() as i64;
        let helix2: i64 = ctx.center() + (phase.cos() * amplitude).floor() as i64;
        put(pattern, i, helix1, ctx.code(i));
        put(pattern, i, helix2, ctx.code(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(shape: fn(&ShapeContext, &mut Grid<u8>), size: usize, colors: usize) -> Grid<u8> {
        let mut pattern: Grid<u8> = Grid::filled(size, 0);
        shape(&ShapeContext::new(size, colors), &mut pattern);
        pattern
    }

    #[test]
    fn test_spiral_walk() {
        let pattern: Grid<u8> = draw(spiral, 7, 2);
        // The walk starts at the center, then goes up and turns right
        assert_eq!(pattern.get(3, 3), Some(1));
        assert_eq!(pattern.get(2, 3), Some(2));
        assert_eq!(pattern.get(2, 4), Some(1));
        assert_eq!(pattern.get(2, 5), Some(2));
        assert_eq!(pattern.get(3, 5), Some(1));
        // The arms grow one step too early, which leaves holes
        assert_eq!(pattern.get(3, 4), Some(0));
        assert_eq!(pattern.get(0, 0), Some(0));
        assert_eq!(pattern.get(6, 0), Some(2));
    }

    #[test]
    fn test_spiral_even_size() {
        let pattern: Grid<u8> = draw(spiral, 8, 3);
        assert!(pattern.cells().all(|v| *v <= 3));
        assert_eq!(pattern.get(4, 4), Some(1));
        assert_eq!(pattern.get(4, 5), Some(0));
    }

    #[test]
    fn test_lightning_bolt_width() {
        let pattern: Grid<u8> = draw(lightning_bolt, 9, 2);
        // First row: sin(0) = 0, so the bolt is centered on column 4
        assert_eq!(pattern.get(0, 3), Some(2));
        assert_eq!(pattern.get(0, 4), Some(1));
        assert_eq!(pattern.get(0, 5), Some(2));
        assert_eq!(pattern.get(0, 2), Some(0));
        for row in pattern.rows() {
            assert!(row.iter().filter(|v| **v != 0).count() <= 3);
        }
    }

    #[test]
    fn test_dna_helix() {
        let pattern: Grid<u8> = draw(dna_helix, 12, 4);
        // First row: sine strand on the center, cosine strand two cells to the right
        assert_eq!(pattern.get(0, 6), Some(1));
        assert_eq!(pattern.get(0, 8), Some(1));
        for row in pattern.rows() {
            assert!(row.iter().filter(|v| **v != 0).count() <= 2);
        }
    }
}
