/*
progression.rs

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

//! Difficulty progression.
//!
//! Stages are grouped by five into levels. The level drives the grid size and the number of
//! palette colors. The functions in this module are the only place where these values are
//! computed: the generator, the target builder, and the game session all call them.
//!
//! Stage numbers start at 1. Passing stage 0 is a caller error.

use crate::config::{
    BASE_GRID_SIZE, BASE_PALETTE_SIZE, MAX_GRID_SIZE, MAX_PALETTE_SIZE, STAGES_PER_LEVEL,
};

/// Return the level of the given stage (levels start at 1).
pub fn level(stage: u32) -> u32 {
    debug_assert!(stage > 0, "stage numbers start at 1");
    (stage - 1) / STAGES_PER_LEVEL + 1
}

/// Return the position of the stage in its level, between 1 and 5.
pub fn position_in_level(stage: u32) -> u32 {
    debug_assert!(stage > 0, "stage numbers start at 1");
    (stage - 1) % STAGES_PER_LEVEL + 1
}

/// Return the side length of the square grid for the given level.
pub fn grid_size(level: u32) -> usize {
    (BASE_GRID_SIZE + level as usize).min(MAX_GRID_SIZE)
}

/// Return the number of active palette colors for the given level.
pub fn palette_size(level: u32) -> usize {
    (BASE_PALETTE_SIZE + (level / 2) as usize).min(MAX_PALETTE_SIZE)
}

/// Sizing parameters of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageInfo {
    pub stage: u32,
    pub level: u32,
    pub position: u32,
    pub grid_size: usize,
    pub palette_size: usize,
}

impl StageInfo {
    /// Compute the [`StageInfo`] object for the given stage.
    pub fn new(stage: u32) -> Self {
        let level: u32 = level(stage);
        Self {
            stage,
            level,
            position: position_in_level(stage),
            grid_size: grid_size(level),
            palette_size: palette_size(level),
        }
    }

    /// Whether the stage is the last one of its level.
    pub fn is_last_of_level(&self) -> bool {
        self.position == STAGES_PER_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_and_position() {
        assert_eq!((level(1), position_in_level(1)), (1, 1));
        assert_eq!((level(5), position_in_level(5)), (1, 5));
        assert_eq!((level(6), position_in_level(6)), (2, 1));
        assert_eq!((level(400), position_in_level(400)), (80, 5));
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(grid_size(1), 7);
        assert_eq!(grid_size(13), 19);
        assert_eq!(grid_size(14), 20);
        assert_eq!(grid_size(80), 20);
    }

    #[test]
    fn test_palette_size() {
        assert_eq!(palette_size(1), 2);
        assert_eq!(palette_size(2), 3);
        assert_eq!(palette_size(3), 3);
        assert_eq!(palette_size(12), 8);
        assert_eq!(palette_size(80), 8);
    }

    #[test]
    fn test_stage_info() {
        let info: StageInfo = StageInfo::new(10);
        assert_eq!(info.level, 2);
        assert_eq!(info.position, 5);
        assert_eq!(info.grid_size, 8);
        assert_eq!(info.palette_size, 3);
        assert!(info.is_last_of_level());
        assert!(!StageInfo::new(11).is_last_of_level());
    }

    proptest! {
        #[test]
        fn levels_are_blocks_of_five(stage in 1u32..100_000) {
            let l: u32 = level(stage);
            let p: u32 = position_in_level(stage);
            prop_assert!((1..=5).contains(&p));
            prop_assert_eq!((l - 1) * 5 + p, stage);
        }

        #[test]
        fn sizes_are_monotonic_and_capped(l in 0u32..1_000_000) {
            prop_assert!(grid_size(l) <= grid_size(l + 1));
            prop_assert!(palette_size(l) <= palette_size(l + 1));
            prop_assert!(grid_size(l) <= MAX_GRID_SIZE);
            prop_assert!(palette_size(l) <= MAX_PALETTE_SIZE);
        }
    }
}
