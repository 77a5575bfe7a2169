/*
pattern.rs

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

//! Generate the pattern of a stage.
//!
//! A pattern is a square grid of codes: 0 for the background, and 1 to
//! [`crate::progression::palette_size`] for the palette colors.
//! The shape is selected by the stage number modulo [`SHAPE_CYCLE`], so that revisiting a stage
//! always produces the same puzzle.

use log::debug;

use super::shapes::{self, ShapeContext};
use crate::config::SHAPE_CYCLE;
use crate::grid::Grid;
use crate::progression;

/// Cells with a pseudo-random value below this threshold stay empty in the fallback pattern.
const DENSITY_THRESHOLD: f64 = 0.3;

/// Return the shape tag for the given stage.
pub fn shape_tag(stage: u32) -> usize {
    (stage % SHAPE_CYCLE) as usize
}

/// Return the name of the shape used by the given stage.
pub fn shape_name(stage: u32) -> &'static str {
    shapes::get(shape_tag(stage)).map_or("Random", |s| s.name)
}

/// Generate the pattern for a stage.
///
/// The result only depends on the three parameters.
pub fn generate_pattern(size: usize, stage: u32, level: u32) -> Grid<u8> {
    pattern_for_tag(size, stage, level, shape_tag(stage))
}

/// Generate a pattern with the shape registered for `tag`.
///
/// When no shape is registered for the tag, the pattern is a pseudo-random fill derived from
/// the stage number.
pub fn pattern_for_tag(size: usize, stage: u32, level: u32, tag: usize) -> Grid<u8> {
    let ctx: ShapeContext = ShapeContext::new(size, progression::palette_size(level));
    let mut pattern: Grid<u8> = Grid::filled(size, 0);

    match shapes::get(tag) {
        Some(shape) => {
            debug!(
                "Stage {stage}: shape {tag} ({}), size {size}, {} colors",
                shape.name, ctx.colors
            );
            (shape.draw)(&ctx, &mut pattern);
        }
        None => {
            debug!(
                "Stage {stage}: no shape for tag {tag}, random fill ({size}x{size}, {} colors)",
                ctx.colors
            );
            density_fill(&ctx, stage, &mut pattern);
        }
    }
    pattern
}

/// Seed of the pseudo-random fill.
fn stage_seed(stage: u32) -> f64 {
    let s: f64 = stage as f64;
    s * 12345.0 + s * s * 67890.0
}

/// Return a value in `[0, 1)` derived from the seed with a sine hash.
fn seeded_random(seed: f64) -> f64 {
    let x: f64 = seed.sin() * 10000.0;
    x - x.floor()
}

/// Fill about 70% of the cells with colors derived from the stage number.
fn density_fill(ctx: &ShapeContext, stage: u32, pattern: &mut Grid<u8>) {
    let seed: f64 = stage_seed(stage);
    let size: usize = ctx.size;
    ctx.fill(pattern, |i, j| {
        let value: f64 = seeded_random(seed + (i * size + j) as f64);
        if value > DENSITY_THRESHOLD {
            // `value` is below 1, so the code never exceeds the number of colors
            Some(((value * ctx.colors as f64).floor() as usize + 1).min(ctx.colors) as u8)
        } else {
            None
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_GRID_SIZE, TOTAL_STAGES};
    use proptest::prelude::*;

    #[test]
    fn test_shape_selection() {
        assert_eq!(shape_tag(1), 1);
        assert_eq!(shape_name(1), "Heart");
        assert_eq!(shape_tag(30), 0);
        assert_eq!(shape_name(30), "Spiral");
        assert_eq!(shape_tag(31), 1);
        assert_eq!(shape_name(59), "Circuit board");
    }

    #[test]
    fn test_stage_one_heart() {
        let level: u32 = progression::level(1);
        let size: usize = progression::grid_size(level);
        assert_eq!(size, 7);
        let pattern: Grid<u8> = generate_pattern(size, 1, level);
        assert_eq!(pattern.size(), 7);
        assert_eq!(pattern, generate_pattern(size, 1, level));
        assert!(pattern.cells().any(|v| *v != 0));
        assert!(pattern.cells().all(|v| *v <= 2));
    }

    #[test]
    fn test_every_shape_leaves_something_to_paint() {
        for stage in 1..=30 {
            let level: u32 = progression::level(stage);
            let size: usize = progression::grid_size(level);
            let pattern: Grid<u8> = generate_pattern(size, stage, level);
            assert!(
                pattern.cells().any(|v| *v != 0),
                "stage {stage} ({}) is empty",
                shape_name(stage)
            );
        }
    }

    #[test]
    fn test_fallback_fill() {
        let a: Grid<u8> = pattern_for_tag(10, 7, 3, 30);
        let b: Grid<u8> = pattern_for_tag(10, 7, 3, 30);
        let c: Grid<u8> = pattern_for_tag(10, 8, 3, 30);
        assert_eq!(a, b);
        assert_ne!(a, c);
        let filled: usize = a.cells().filter(|v| **v != 0).count();
        assert!(filled > 0 && filled < 100);
        assert!(a.cells().all(|v| *v <= 3));
    }

    #[test]
    fn test_seeded_random_range() {
        for seed in 0..1000 {
            let v: f64 = seeded_random(stage_seed(seed) + seed as f64);
            assert!((0.0..1.0).contains(&v));
        }
    }

    proptest! {
        #[test]
        fn generation_is_deterministic(
            size in 1usize..=MAX_GRID_SIZE,
            stage in 1u32..=TOTAL_STAGES,
            level in 1u32..=80,
        ) {
            prop_assert_eq!(
                generate_pattern(size, stage, level),
                generate_pattern(size, stage, level)
            );
        }

        #[test]
        fn codes_stay_in_palette(
            size in 1usize..=MAX_GRID_SIZE,
            stage in 1u32..=TOTAL_STAGES,
            level in 1u32..=80,
            tag in 0usize..=31,
        ) {
            let colors: usize = progression::palette_size(level);
            let pattern: Grid<u8> = pattern_for_tag(size, stage, level, tag);
            prop_assert_eq!(pattern.size(), size);
            prop_assert!(pattern.cells().all(|v| (*v as usize) <= colors));
        }
    }
}
