/*
saver.rs

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

//! Save and restore the player data.
//!
//! Every record is a JSON file in the data directory:
//!
//! * `savegame.json` for the game in progress ([`game`]).
//! * `highscores.json` for the scoreboard ([`highscores`]).
//! * `settings.json` for the user preferences ([`settings`]).

pub mod game;
pub mod highscores;
pub mod settings;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// JSON file that stores one record.
#[derive(Debug, Clone)]
pub struct JsonFile {
    /// Absolute path to the file.
    path: PathBuf,
}

impl JsonFile {
    /// Create a [`JsonFile`] object for the given file in the data directory.
    pub fn new(mut data_dir: PathBuf, file_name: &str) -> Self {
        data_dir.push(file_name);
        debug!("Data file: {data_dir:?}");
        Self { path: data_dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record from the file.
    ///
    /// Return None if the file does not exist.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, Box<dyn Error>> {
        let file: File = match File::open(&self.path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let record: T = serde_json::from_reader(reader)?;
        Ok(Some(record))
    }

    /// Write the record to the file. The data directory is created if needed.
    pub fn save<T: Serialize>(&self, record: &T) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.path)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, record)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the file.
    pub fn delete(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Deleted {:?}", self.path),
            Err(e) if e.kind() == ErrorKind::NotFound => (),
            Err(e) => log::warn!("Cannot delete {:?}: {e}", self.path),
        }
    }
}

/// Delete all the player data: saved game, high scores, and settings.
pub fn clear_all(data_dir: &Path) {
    debug!("Clearing all the data in {data_dir:?}");
    game::SaverGame::new(data_dir.to_path_buf()).delete_save();
    highscores::SaverHighScores::new(data_dir.to_path_buf()).delete_save();
    settings::SaverSettings::new(data_dir.to_path_buf()).delete_save();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file() {
        let dir: TempDir = TempDir::new().unwrap();
        let file: JsonFile = JsonFile::new(dir.path().to_path_buf(), "missing.json");
        let record: Option<HashMap<String, u32>> = file.load().unwrap();
        assert_eq!(record, None);
    }

    #[test]
    fn test_save_creates_directory() {
        let dir: TempDir = TempDir::new().unwrap();
        let data_dir: PathBuf = dir.path().join("a").join("b");
        let file: JsonFile = JsonFile::new(data_dir.clone(), "record.json");
        let record: HashMap<String, u32> = HashMap::from([("stage".to_string(), 12)]);
        file.save(&record).unwrap();
        assert!(data_dir.join("record.json").is_file());
        assert_eq!(file.load::<HashMap<String, u32>>().unwrap(), Some(record));
    }

    #[test]
    fn test_corrupted_file() {
        let dir: TempDir = TempDir::new().unwrap();
        let file: JsonFile = JsonFile::new(dir.path().to_path_buf(), "record.json");
        fs::write(file.path(), "{not json").unwrap();
        assert!(file.load::<HashMap<String, u32>>().is_err());
    }

    #[test]
    fn test_delete() {
        let dir: TempDir = TempDir::new().unwrap();
        let file: JsonFile = JsonFile::new(dir.path().to_path_buf(), "record.json");
        file.delete();
        file.save(&1u32).unwrap();
        file.delete();
        assert!(!file.path().exists());
    }

    #[test]
    fn test_clear_all() {
        let dir: TempDir = TempDir::new().unwrap();
        for name in ["savegame.json", "highscores.json", "settings.json", "other.json"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        clear_all(dir.path());
        assert!(!dir.path().join("savegame.json").exists());
        assert!(!dir.path().join("highscores.json").exists());
        assert!(!dir.path().join("settings.json").exists());
        assert!(dir.path().join("other.json").exists());
    }
}
