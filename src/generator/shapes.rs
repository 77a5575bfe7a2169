/*
shapes.rs

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

//! Catalogue of the shape algorithms.
//!
//! Each shape is a plain function that draws pattern codes into an empty (all zeros) pattern.
//! The shapes only read the [`ShapeContext`] object, so drawing the same shape twice with the same
//! context produces the same pattern.
//!
//! The shapes are grouped by technique:
//!
//! * [`polar`]: distances and angles from the grid center.
//! * [`tiling`]: integer arithmetic on the cell coordinates.
//! * [`waves`]: sine and cosine curves, and the spiral walk.
//!
//! For developers: to add a shape, write the function in one of these modules and append it to
//! [`SHAPES`]. Tags without an entry in [`SHAPES`] use the fallback density fill (see
//! [`super::pattern`]).

pub mod polar;
pub mod tiling;
pub mod waves;

use crate::grid::Grid;

/// Signature of the shape drawing functions.
pub type DrawFn = fn(&ShapeContext, &mut Grid<u8>);

/// Named shape algorithm.
#[derive(Clone, Copy)]
pub struct Shape {
    /// Name displayed by the command line interface.
    pub name: &'static str,

    /// Drawing function.
    pub draw: DrawFn,
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Shape").field("name", &self.name).finish()
    }
}

/// Shape catalogue, indexed by the shape tag.
pub static SHAPES: [Shape; 30] = [
    Shape { name: "Spiral", draw: waves::spiral },
    Shape { name: "Heart", draw: polar::heart },
    Shape { name: "Concentric circles", draw: polar::concentric_circles },
    Shape { name: "Checkerboard", draw: tiling::checkerboard },
    Shape { name: "Star", draw: polar::star },
    Shape { name: "Radial gradient", draw: polar::radial_gradient },
    Shape { name: "Zigzag", draw: waves::zigzag },
    Shape { name: "Mandala", draw: polar::mandala },
    Shape { name: "Diamond", draw: polar::diamond },
    Shape { name: "Crosshatch", draw: tiling::crosshatch },
    Shape { name: "Flower", draw: polar::flower },
    Shape { name: "Hexagons", draw: tiling::hexagons },
    Shape { name: "Wave interference", draw: waves::wave_interference },
    Shape { name: "Pyramid", draw: tiling::pyramid },
    Shape { name: "Sunburst", draw: polar::sunburst },
    Shape { name: "Celtic knot", draw: waves::celtic_knot },
    Shape { name: "Butterfly", draw: polar::butterfly },
    Shape { name: "Maze", draw: tiling::maze },
    Shape { name: "Target", draw: polar::target },
    Shape { name: "Lightning bolt", draw: waves::lightning_bolt },
    Shape { name: "Peacock feather", draw: polar::peacock_feather },
    Shape { name: "Tribal", draw: waves::tribal },
    Shape { name: "Snowflake", draw: polar::snowflake },
    Shape { name: "Labyrinth", draw: tiling::labyrinth },
    Shape { name: "Atom", draw: polar::atom },
    Shape { name: "Origami", draw: tiling::origami },
    Shape { name: "DNA helix", draw: waves::dna_helix },
    Shape { name: "Kaleidoscope", draw: polar::kaleidoscope },
    Shape { name: "Mosaic", draw: tiling::mosaic },
    Shape { name: "Circuit board", draw: tiling::circuit_board },
];

/// Return the shape registered for the given tag, or None if the tag has no dedicated
/// algorithm.
pub fn get(tag: usize) -> Option<&'static Shape> {
    SHAPES.get(tag)
}

/// Input parameters of the shape algorithms.
#[derive(Debug, Clone, Copy)]
pub struct ShapeContext {
    /// Side length of the pattern.
    pub size: usize,

    /// Number of active palette colors. Pattern codes are between 1 and this value.
    pub colors: usize,
}

impl ShapeContext {
    /// Create a [`ShapeContext`] object.
    pub fn new(size: usize, colors: usize) -> Self {
        debug_assert!(colors > 0, "at least one palette color is required");
        Self { size, colors }
    }

    /// Side length as a float.
    pub fn side(&self) -> f64 {
        self.size as f64
    }

    /// Row and column of the grid center.
    pub fn center(&self) -> i64 {
        (self.size / 2) as i64
    }

    /// Convert any integer into a pattern code between 1 and [`ShapeContext::colors`].
    ///
    /// Negative values wrap around.
    pub fn code(&self, value: i64) -> u8 {
        (value.rem_euclid(self.colors as i64) + 1) as u8
    }

    /// Offset of the cell from the center, as `(dx, dy)`.
    pub fn offset(&self, row: usize, col: usize) -> (f64, f64) {
        let c: i64 = self.center();
        ((col as i64 - c) as f64, (row as i64 - c) as f64)
    }

    /// Euclidean distance between the cell and the center.
    pub fn distance(&self, row: usize, col: usize) -> f64 {
        let (dx, dy) = self.offset(row, col);
        (dx * dx + dy * dy).sqrt()
    }

    /// Polar angle of the cell around the center, between -π and π.
    pub fn angle(&self, row: usize, col: usize) -> f64 {
        let (dx, dy) = self.offset(row, col);
        dy.atan2(dx)
    }

    /// Set the code returned by `f` for every cell. Cells for which `f` returns None keep their
    /// current value.
    pub fn fill(&self, pattern: &mut Grid<u8>, f: impl Fn(usize, usize) -> Option<u8>) {
        pattern.update(|row, col, current| f(row, col).unwrap_or(current));
    }
}

/// Set a single cell. Cells outside of the pattern are ignored.
pub(crate) fn put(pattern: &mut Grid<u8>, row: i64, col: i64, code: u8) {
    if row < 0 || col < 0 {
        return;
    }
    // The shapes that draw point by point may step outside of the grid.
    let _ = pattern.set(row as usize, col as usize, code);
}
