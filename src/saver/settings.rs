/*
settings.rs

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

//! Save and restore the user preferences.

use log::warn;
use std::error::Error;
use std::path::PathBuf;

use super::JsonFile;
use crate::settings::Settings;

/// Object to save and restore the [`Settings`] object.
pub struct SaverSettings {
    file: JsonFile,
}

impl SaverSettings {
    /// Create a [`SaverSettings`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the settings must be saved.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            file: JsonFile::new(data_dir, "settings.json"),
        }
    }

    /// Retrieve the settings.
    ///
    /// The default settings are returned when the file does not exist or cannot be read.
    pub fn get_settings(&self) -> Settings {
        match self.file.load::<Settings>() {
            Ok(Some(s)) => s.sanitize(),
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!("Cannot read the settings, using the defaults: {e}");
                Settings::default()
            }
        }
    }

    /// Save the provided [`Settings`] object.
    pub fn save_settings(&self, settings: &Settings) -> Result<(), Box<dyn Error>> {
        self.file.save(settings)
    }

    /// Delete the settings file.
    pub fn delete_save(&self) {
        self.file.delete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let dir: TempDir = TempDir::new().unwrap();
        let saver: SaverSettings = SaverSettings::new(dir.path().to_path_buf());
        assert_eq!(saver.get_settings(), Settings::default());
    }

    #[test]
    fn test_save_and_restore() {
        let dir: TempDir = TempDir::new().unwrap();
        let saver: SaverSettings = SaverSettings::new(dir.path().to_path_buf());
        let mut settings: Settings = Settings::default();
        settings.toggle_dark_mode();
        settings.set_music_volume(75);
        saver.save_settings(&settings).unwrap();
        assert_eq!(saver.get_settings(), settings);
    }

    #[test]
    fn test_corrupted_file() {
        let dir: TempDir = TempDir::new().unwrap();
        fs::write(dir.path().join("settings.json"), "[1, 2").unwrap();
        let saver: SaverSettings = SaverSettings::new(dir.path().to_path_buf());
        assert_eq!(saver.get_settings(), Settings::default());
    }
}
