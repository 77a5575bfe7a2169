/*
grid.rs

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

//! Square grid storage.
//!
//! The same [`Grid`] type stores the pattern codes produced by the generator (`Grid<u8>`) and the
//! colors of the target and of the player canvas (`Grid<Color>`).
//!
//! Cells are stored row by row. When serialized, a grid is a list of rows, each row being a list
//! of cells, which is the layout used by saved games.

use std::error::Error;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Type of errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GridError {
    /// The cell coordinates are outside of the grid.
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col, size } => {
                write!(f, "cell ({row}, {col}) is outside of the {size}x{size} grid")
            }
        }
    }
}

impl Error for GridError {}

/// Square grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Side length.
    size: usize,

    /// Cells, row by row.
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a [`Grid`] object with all the cells set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Return the side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell coordinates are inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Return the value of a cell, or None if the coordinates are outside of the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.index(row, col).ok().map(|i| self.cells[i])
    }

    /// Change the value of a cell.
    ///
    /// # Errors
    ///
    /// The method returns an error if the coordinates are outside of the grid. The grid is not
    /// modified in that case.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        let i: usize = self.index(row, col)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Return an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `max(1)` keeps `chunks` happy with empty grids.
        self.cells.chunks(self.size.max(1))
    }

    /// Return an iterator over all the cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Return an iterator over the cells with their coordinates.
    pub fn enumerate(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let size: usize = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / size, i % size), v))
    }

    /// Replace every cell with the value returned by `f`, which receives the row, the column, and
    /// the current value of the cell.
    pub fn update(&mut self, mut f: impl FnMut(usize, usize, T) -> T) {
        let size: usize = self.size;
        for (i, v) in self.cells.iter_mut().enumerate() {
            *v = f(i / size, i % size, *v);
        }
    }

    /// Build a new grid by converting every cell.
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            size: self.size,
            cells: self.cells.iter().map(|v| f(*v)).collect(),
        }
    }

    /// Build a grid from a list of rows.
    ///
    /// Return None if the rows do not form a square.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let size: usize = rows.len();
        let mut cells: Vec<T> = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return None;
            }
            cells.extend(row);
        }
        Some(Self { size, cells })
    }
}

impl<T: Copy + Serialize> Serialize for Grid<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows().take(self.size) {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

impl<'de, T: Copy + Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<Vec<T>> = Vec::deserialize(deserializer)?;
        let height: usize = rows.len();
        Grid::from_rows(rows).ok_or_else(|| {
            de::Error::custom(format!("the {height} rows do not form a square grid"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut grid: Grid<u8> = Grid::filled(3, 0);
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.set(1, 2, 7), Ok(()));
        assert_eq!(grid.get(1, 2), Some(7));
        assert_eq!(grid.get(2, 1), Some(0));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(
            grid.set(0, 3, 1),
            Err(GridError::OutOfBounds {
                row: 0,
                col: 3,
                size: 3
            })
        );
    }

    #[test]
    fn test_rows_and_enumerate() {
        let grid: Grid<u8> = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
        let last: ((usize, usize), &u8) = grid.enumerate().last().unwrap();
        assert_eq!(last, ((1, 1), &4));
    }

    #[test]
    fn test_update() {
        let mut grid: Grid<u8> = Grid::filled(3, 1);
        grid.update(|row, col, v| if row == col { v + 1 } else { v });
        assert_eq!(grid.get(0, 0), Some(2));
        assert_eq!(grid.get(2, 2), Some(2));
        assert_eq!(grid.get(0, 2), Some(1));
        assert_eq!(grid.map(|v| v as u32 * 10).get(1, 1), Some(20));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        assert!(Grid::from_rows(vec![vec![1u8, 2], vec![3]]).is_none());
        assert!(Grid::from_rows(vec![vec![1u8, 2]]).is_none());
        assert_eq!(Grid::<u8>::from_rows(Vec::new()).unwrap().size(), 0);
    }

    #[test]
    fn test_serde_nested_rows() {
        let grid: Grid<u8> = Grid::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
        let json: String = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[0,1],[2,0]]");
        let back: Grid<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<Grid<u8>>("[[0,1],[2]]").is_err());
    }

    #[test]
    fn test_empty_grid_serializes_as_empty_list() {
        let grid: Grid<u8> = Grid::filled(0, 0);
        assert_eq!(serde_json::to_string(&grid).unwrap(), "[]");
    }

    #[test]
    fn test_error_message() {
        let e = GridError::OutOfBounds {
            row: 9,
            col: 1,
            size: 7,
        };
        assert_eq!(e.to_string(), "cell (9, 1) is outside of the 7x7 grid");
    }
}
