/*
highscores.rs

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

//! Save and restore the high scores.
//!
//! The saved object is a serialization of the [`HighScores`] object in JSON format by
//! using [`serde`].

use std::error::Error;
use std::path::PathBuf;

use super::JsonFile;
use crate::highscores::HighScores;

/// Object to save and restore the high scores.
pub struct SaverHighScores {
    file: JsonFile,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the high scores must be saved.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            file: JsonFile::new(data_dir, "highscores.json"),
        }
    }

    /// Retrieve the [`HighScores`] object from the high scores file.
    ///
    /// Return the [`HighScores`] object or None if the high scores file does not exist.
    pub fn get_highscores(&self) -> Result<Option<HighScores>, Box<dyn Error>> {
        self.file.load()
    }

    /// Save the provided [`HighScores`] object.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        self.file.save(highscores)
    }

    /// Delete the high scores file.
    pub fn delete_save(&self) {
        self.file.delete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_restore() {
        let dir: TempDir = TempDir::new().unwrap();
        let saver: SaverHighScores = SaverHighScores::new(dir.path().to_path_buf());
        assert!(saver.get_highscores().unwrap().is_none());

        let mut highscores: HighScores = HighScores::new();
        highscores.add_score(330, 3);
        highscores.add_score(105, 1);
        saver.save_highscores(&highscores).unwrap();

        let restored: HighScores = saver.get_highscores().unwrap().unwrap();
        assert_eq!(restored.best(), Some(330));
        assert_eq!(restored.get_scores(), highscores.get_scores());

        saver.delete_save();
        assert!(saver.get_highscores().unwrap().is_none());
    }
}
