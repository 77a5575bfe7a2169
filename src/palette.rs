/*
palette.rs

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

//! Game colors.
//!
//! The palette is an ordered list: pattern code `n` (starting at 1) selects the palette entry at
//! index `n - 1`. For a given level, only the first [`crate::progression::palette_size`] entries
//! are available to the player.
//!
//! In saved games, a [`Color`] is serialized as a `#RRGGBB` string.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::config::MAX_PALETTE_SIZE;
use crate::progression;

/// RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a [`Color`] object from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color in the `#RRGGBB` format. The leading `#` is optional.
    ///
    /// Return None if the string is not a valid color.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex: &str = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r: u8 = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g: u8 = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b: u8 = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Serialize a [`Color`] object as a `#RRGGBB` string.
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deserialize a [`Color`] object from a `#RRGGBB` string.
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColorVisitor;

        impl Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a color in the `#RRGGBB` format")
            }

            fn visit_str<E>(self, value: &str) -> Result<Color, E>
            where
                E: de::Error,
            {
                Color::from_hex(value)
                    .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

/// Color of the cells that are not painted.
pub const BACKGROUND: Color = Color::rgb(0xFF, 0xFF, 0xFF);

/// Ordered list of the game colors.
pub const GAME_COLORS: [Color; 20] = [
    Color::rgb(0xFF, 0x6B, 0x6B),
    Color::rgb(0x4E, 0xCD, 0xC4),
    Color::rgb(0x45, 0xB7, 0xD1),
    Color::rgb(0xFF, 0xA0, 0x7A),
    Color::rgb(0x98, 0xD8, 0xC8),
    Color::rgb(0xF7, 0xDC, 0x6F),
    Color::rgb(0xBB, 0x8F, 0xCE),
    Color::rgb(0x85, 0xC1, 0xE2),
    Color::rgb(0xF8, 0xB1, 0x95),
    Color::rgb(0xC0, 0x6C, 0x84),
    Color::rgb(0x6C, 0x5B, 0x7B),
    Color::rgb(0x35, 0x5C, 0x7D),
    Color::rgb(0xE7, 0x4C, 0x3C),
    Color::rgb(0x34, 0x98, 0xDB),
    Color::rgb(0x2E, 0xCC, 0x71),
    Color::rgb(0xF3, 0x9C, 0x12),
    Color::rgb(0x9B, 0x59, 0xB6),
    Color::rgb(0x1A, 0xBC, 0x9C),
    Color::rgb(0xE6, 0x7E, 0x22),
    Color::rgb(0x95, 0xA5, 0xA6),
];

// Every level must find enough colors in the palette.
const _: () = assert!(GAME_COLORS.len() >= MAX_PALETTE_SIZE);

/// Return the colors that the player can use at the given level.
pub fn active_palette(level: u32) -> &'static [Color] {
    &GAME_COLORS[..progression::palette_size(level)]
}

/// Return the color for the given pattern code. Code 0 is the background.
///
/// # Panics
///
/// The function panics if the code is greater than the number of colors in `palette`.
pub fn color_for_code(palette: &[Color], code: u8) -> Color {
    match code {
        0 => BACKGROUND,
        c => palette[c as usize - 1],
    }
}
