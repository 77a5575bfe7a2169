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

//! User preferences.
//!
//! See the [`crate::saver::settings`] module that saves and restores the [`Settings`] object.

use serde::{Deserialize, Serialize};

/// Highest volume value.
pub const MAX_VOLUME: u8 = 100;

/// User preferences.
///
/// Missing keys in a saved record take their default value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub sound_enabled: bool,
    pub music_enabled: bool,
    pub dark_mode: bool,

    /// Sound effects volume, between 0 and [`MAX_VOLUME`].
    pub sound_volume: u8,

    /// Background music volume, between 0 and [`MAX_VOLUME`].
    pub music_volume: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            dark_mode: false,
            sound_volume: 50,
            music_volume: 20,
        }
    }
}

impl Settings {
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.music_enabled
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Set the sound effects volume. Values above [`MAX_VOLUME`] are clamped.
    pub fn set_sound_volume(&mut self, volume: u8) {
        self.sound_volume = volume.min(MAX_VOLUME);
    }

    /// Set the music volume. Values above [`MAX_VOLUME`] are clamped.
    pub fn set_music_volume(&mut self, volume: u8) {
        self.music_volume = volume.min(MAX_VOLUME);
    }

    /// Clamp the volumes of a record that was edited by hand.
    pub fn sanitize(mut self) -> Self {
        self.set_sound_volume(self.sound_volume);
        self.set_music_volume(self.music_volume);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings: Settings = Settings::default();
        assert!(settings.sound_enabled);
        assert!(settings.music_enabled);
        assert!(!settings.dark_mode);
        assert_eq!(settings.sound_volume, 50);
        assert_eq!(settings.music_volume, 20);
    }

    #[test]
    fn test_toggles() {
        let mut settings: Settings = Settings::default();
        assert!(settings.toggle_dark_mode());
        assert!(!settings.toggle_sound());
        assert!(!settings.toggle_music());
        assert!(settings.toggle_music());
        assert!(settings.dark_mode);
        assert!(!settings.sound_enabled);
    }

    #[test]
    fn test_volume_clamp() {
        let mut settings: Settings = Settings::default();
        settings.set_sound_volume(150);
        settings.set_music_volume(0);
        assert_eq!(settings.sound_volume, MAX_VOLUME);
        assert_eq!(settings.music_volume, 0);
    }

    #[test]
    fn test_json_keys() {
        let json: String = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"soundEnabled":true,"musicEnabled":true,"darkMode":false,"#,
                r#""soundVolume":50,"musicVolume":20}"#
            )
        );
    }

    #[test]
    fn test_partial_record() {
        let settings: Settings = serde_json::from_str(r#"{"darkMode":true,"soundVolume":230}"#)
            .map(Settings::sanitize)
            .unwrap();
        assert!(settings.dark_mode);
        assert!(settings.music_enabled);
        assert_eq!(settings.sound_volume, MAX_VOLUME);
        assert_eq!(settings.music_volume, 20);
    }
}
