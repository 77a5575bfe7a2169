/*
game.rs

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

//! Save and restore the game in progress.
//!
//! The game status is saved in the `savegame.json` file after every action. The next command
//! loads it, and the player continues where they stopped.
//!
//! The saved object is a [`SavedGame`] record in JSON format. Colors are `"#RRGGBB"` strings and
//! grids are arrays of rows, for example:
//!
//! ```json
//! {"stage":2,"totalStages":400,"score":105,"moves":3,
//!  "canvas":[["#FFFFFF","#FF6B6B",...],...],"target":[...],"scored":false,"started":{...}}
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::PathBuf;
use std::time::SystemTime;

use super::JsonFile;
use crate::grid::Grid;
use crate::palette::Color;

/// Saved representation of a [`crate::game::Game`] object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub stage: u32,
    pub total_stages: u32,
    pub score: u32,
    pub moves: u32,
    pub canvas: Grid<Color>,
    pub target: Grid<Color>,

    /// Whether the score of the stage was already added.
    #[serde(default)]
    pub scored: bool,

    /// Start of the run. Older records do not have it, and the load time is used instead.
    #[serde(default = "SystemTime::now")]
    pub started: SystemTime,
}

impl SavedGame {
    /// Whether the saved game is worth offering to the player.
    ///
    /// A game still at the first stage is not: starting again costs nothing.
    pub fn has_progress(&self) -> bool {
        self.stage > 1
    }
}

/// Object to save and restore the game in progress.
pub struct SaverGame {
    file: JsonFile,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game must be saved.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            file: JsonFile::new(data_dir, "savegame.json"),
        }
    }

    /// Retrieve the saved game.
    ///
    /// Return the [`SavedGame`] object or None if there is no saved game.
    pub fn get_game(&self) -> Result<Option<SavedGame>, Box<dyn Error>> {
        let saved: Option<SavedGame> = self.file.load()?;
        if let Some(s) = &saved {
            debug!("Saved game found at stage {}/{}", s.stage, s.total_stages);
        }
        Ok(saved)
    }

    /// Save the provided [`SavedGame`] object.
    pub fn save_game(&self, saved: &SavedGame) -> Result<(), Box<dyn Error>> {
        self.file.save(saved)
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        self.file.delete();
    }
}
