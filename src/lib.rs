/*
lib.rs

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

//! Pixel Master is a grid-coloring puzzle game.
//!
//! Each stage shows a target picture on a square grid. The player reproduces it by painting the
//! cells of an empty canvas with the colors of a palette. Grids grow and the palette gets larger
//! every five stages.
//!
//! The puzzles are generated, not stored: [`generator`] draws one of 30 shapes for each stage,
//! and always draws the same picture for the same stage.

pub mod canvas;
pub mod config;
pub mod game;
pub mod generator;
pub mod grid;
pub mod highscores;
pub mod palette;
pub mod progression;
pub mod saver;
pub mod scoring;
pub mod settings;
