/*
polar.rs

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

//! Shapes built from the distance and the angle of the cells around the grid center.

use std::f64::consts::PI;

use super::ShapeContext;
use crate::grid::Grid;

/// Implicit heart curve `(x² + y² - 1)³ - x²y³ < 0`, colored by distance.
pub fn heart(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let scale: f64 = ctx.side() / 6.0;
    ctx.fill(pattern, |i, j| {
        let (dx, dy) = ctx.offset(i, j);
        let x: f64 = dx / scale;
        let y: f64 = dy / scale;
        let heart: f64 = (x * x + y * y - 1.0).powi(3) - x * x * y * y * y;
        if heart < 0.0 {
            Some(ctx.code((ctx.distance(i, j) * 3.0).floor() as i64))
        } else {
            None
        }
    });
}

/// One ring per palette color, the outer ring stops at the grid border.
pub fn concentric_circles(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let ring_width: f64 = ctx.side() / (ctx.colors * 2) as f64;
    ctx.fill(pattern, |i, j| {
        let ring: usize = (ctx.distance(i, j) / ring_width).floor() as usize;
        if ring < ctx.colors {
            Some(ring as u8 + 1)
        } else {
            None
        }
    });
}

/// Five-pointed star.
pub fn star(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let angle: f64 = ctx.angle(i, j);
        let star_radius: f64 = (ctx.side() / 3.0) * (1.0 + 0.5 * (5.0 * angle).sin());
        if ctx.distance(i, j) < star_radius {
            Some(ctx.code((angle * 10.0).floor() as i64))
        } else {
            None
        }
    });
}

/// Every cell is painted. The color index grows with the distance.
pub fn radial_gradient(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let colors: i64 = ctx.colors as i64;
    ctx.fill(pattern, |i, j| {
        let normalized: f64 = ctx.distance(i, j) / (ctx.side() / 2.0);
        let code: i64 = ((normalized * colors as f64).floor() as i64 + 1).min(colors);
        Some(code as u8)
    });
}

/// Eight-fold rosette inside the inscribed circle.
pub fn mandala(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let dist: f64 = ctx.distance(i, j);
        let mandala: i64 = ((ctx.angle(i, j) * 8.0).sin() * dist).abs().floor() as i64;
        if mandala % 3 == 0 && dist < ctx.side() / 2.0 {
            Some(ctx.code(mandala))
        } else {
            None
        }
    });
}

/// Manhattan distance bands.
pub fn diamond(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let c: i64 = ctx.center();
    ctx.fill(pattern, |i, j| {
        let dist: i64 = (i as i64 - c).abs() + (j as i64 - c).abs();
        if (dist as f64) < ctx.side() / 2.0 {
            Some(ctx.code(dist))
        } else {
            None
        }
    });
}

/// Six petals.
pub fn flower(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let radius: f64 = ctx.distance(i, j);
        let petal: f64 = (ctx.side() / 4.0) * (1.0 + (6.0 * ctx.angle(i, j)).sin() * 0.5);
        if radius < petal {
            Some(ctx.code((radius * 2.0).floor() as i64))
        } else {
            None
        }
    });
}

/// Twelve rays, every other ray is painted.
pub fn sunburst(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    const RAYS: f64 = 12.0;
    ctx.fill(pattern, |i, j| {
        let angle: f64 = ctx.angle(i, j) + PI;
        let ray: i64 = (angle / (2.0 * PI) * RAYS).floor() as i64;
        if ray % 2 == 0 {
            Some(ctx.code(ctx.distance(i, j).floor() as i64))
        } else {
            None
        }
    });
}

/// Four wings along the diagonals.
pub fn butterfly(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let angle: f64 = ctx.angle(i, j);
        let wing: f64 = (angle * 2.0).cos().abs() * (ctx.side() / 3.0);
        if ctx.distance(i, j) < wing {
            Some(ctx.code((angle * 5.0).floor() as i64))
        } else {
            None
        }
    });
}

/// Rings two cells wide, every other ring is painted.
pub fn target(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let dist: f64 = ctx.distance(i, j);
        let ring: i64 = (dist / 2.0).floor() as i64;
        if ring % 2 == 0 && dist < ctx.side() / 2.0 {
            Some(ctx.code(ring))
        } else {
            None
        }
    });
}

pub fn peacock_feather(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let dist: f64 = ctx.distance(i, j);
        let feather: f64 = ((ctx.angle(i, j) * 4.0).sin() * (ctx.side() / 4.0)).abs();
        if dist < feather + ctx.side() / 6.0 {
            Some(ctx.code((dist + feather).floor() as i64))
        } else {
            None
        }
    });
}

/// Six branches separated by π/3.
pub fn snowflake(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let dist: f64 = ctx.distance(i, j);
        let branch: i64 = ((ctx.angle(i, j) + PI) / (PI / 3.0)).floor() as i64;
        if ((branch as f64 * PI / 3.0).sin() * dist).abs() < 1.0 {
            Some(ctx.code(branch + dist.floor() as i64))
        } else {
            None
        }
    });
}

/// Three electron orbits. Where two orbits overlap, the outer one wins.
pub fn atom(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    let orbits: [f64; 3] = [ctx.side() / 6.0, ctx.side() / 4.0, ctx.side() / 3.0];
    ctx.fill(pattern, |i, j| {
        let dist: f64 = ctx.distance(i, j);
        orbits
            .iter()
            .rposition(|r| (dist - r).abs() < 1.5)
            .map(|r| ctx.code(r as i64))
    });
}

/// Mirror symmetric sectors of π/4.
pub fn kaleidoscope(ctx: &ShapeContext, pattern: &mut Grid<u8>) {
    ctx.fill(pattern, |i, j| {
        let (dx, dy) = ctx.offset(i, j);
        let angle: f64 = dy.abs().atan2(dx.abs());
        let sector: i64 = (angle / (PI / 4.0)).floor() as i64;
        let dist: f64 = ctx.distance(i, j);
        if sector % 2 == 0 && dist < ctx.side() / 2.0 {
            Some(ctx.code(dist.floor() as i64))
        } else {
            None
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(shape: fn(&ShapeContext, &mut Grid<u8>), size: usize, colors: usize) -> Grid<u8> {
        let mut pattern: Grid<u8> = Grid::filled(size, 0);
        shape(&ShapeContext::new(size, colors), &mut pattern);
        pattern
    }

    #[test]
    fn test_heart_is_symmetric() {
        let pattern: Grid<u8> = draw(heart, 7, 2);
        for i in 0..7 {
            for j in 1..3 {
                assert_eq!(pattern.get(i, 3 - j), pattern.get(i, 3 + j));
            }
        }
        assert_ne!(pattern.get(3, 3), Some(0));
        assert_eq!(pattern.get(0, 0), Some(0));
    }

    #[test]
    fn test_concentric_circles() {
        let pattern: Grid<u8> = draw(concentric_circles, 8, 2);
        // Ring width is 8 / 4 = 2
        assert_eq!(pattern.get(4, 4), Some(1));
        assert_eq!(pattern.get(4, 6), Some(2));
        assert_eq!(pattern.get(0, 0), Some(0));
    }

    #[test]
    fn test_radial_gradient_paints_every_cell() {
        let pattern: Grid<u8> = draw(radial_gradient, 9, 4);
        assert!(pattern.cells().all(|v| (1..=4).contains(v)));
        assert_eq!(pattern.get(4, 4), Some(1));
        assert_eq!(pattern.get(0, 0), Some(4));
    }

    #[test]
    fn test_diamond() {
        let pattern: Grid<u8> = draw(diamond, 7, 3);
        assert_eq!(pattern.get(3, 3), Some(1));
        assert_eq!(pattern.get(3, 4), Some(2));
        assert_eq!(pattern.get(2, 4), Some(3));
        assert_eq!(pattern.get(3, 6), Some(1));
        // Manhattan distance 4 is outside of the 3.5 radius
        assert_eq!(pattern.get(1, 1), Some(0));
    }

    #[test]
    fn test_star_wraps_negative_angles() {
        let pattern: Grid<u8> = draw(star, 11, 3);
        assert!(pattern.cells().all(|v| *v <= 3));
        // Cells above the center have negative angles
        assert!((0..5).any(|i| pattern.get(i, 5) != Some(0)));
    }

    #[test]
    fn test_atom_orbits() {
        let pattern: Grid<u8> = draw(atom, 12, 3);
        // Center is not on any orbit
        assert_eq!(pattern.get(6, 6), Some(0));
        // Distance 4 is on the second and third orbits (radius 3 and 4): the outer one wins
        assert_eq!(pattern.get(6, 10), Some(3));
    }
}
