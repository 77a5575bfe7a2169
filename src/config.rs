/*
config.rs

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

//! Build-time configuration.
//!
//! The difficulty constants below are only read by the [`crate::progression`] module. Other
//! modules must go through the progression functions instead of using these values directly.

use std::path::PathBuf;

/// Name of the package, also used for the data directory.
pub const PACKAGE_NAME: &str = "pixel-master";

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

/// Number of stages in a complete run.
pub const TOTAL_STAGES: u32 = 400;

/// Number of consecutive stages that share the same level.
pub const STAGES_PER_LEVEL: u32 = 5;

/// Grid side length before the level is added.
pub const BASE_GRID_SIZE: usize = 6;

/// Largest grid side length.
pub const MAX_GRID_SIZE: usize = 20;

/// Number of palette colors before the level bonus is added.
pub const BASE_PALETTE_SIZE: usize = 2;

/// Largest number of active palette colors.
pub const MAX_PALETTE_SIZE: usize = 8;

/// Period of the shape selection. The shape for a stage is `stage % SHAPE_CYCLE`.
pub const SHAPE_CYCLE: u32 = 30;

/// Return the directory where the game, the settings, and the high scores are saved.
///
/// This is the `pixel-master` directory under the platform data directory
/// (`$XDG_DATA_HOME`, or `$HOME/.local/share` on Linux). The current directory is the last
/// resort.
pub fn user_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(PACKAGE_NAME),
        None => PathBuf::from("."),
    }
}
