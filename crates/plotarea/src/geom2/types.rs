//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes the degeneracy epsilon and the ear-clipping pass cap.
//! - `Point`: planar coordinate (pixels or real-world length, by context).
//! - `Triangle`: ordered vertex triple produced by the triangulator.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::primitives::{distance, signed_area};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Areas at or below this are treated as degenerate (collinear input).
    pub eps_degenerate: f64,
    /// Ear-clipping runs at most `max_pass_factor * n` passes.
    pub max_pass_factor: usize,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_degenerate: 1e-9,
            max_pass_factor: 2,
        }
    }
}

/// Planar point `{x, y}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Uniform scaling about the origin.
    #[inline]
    pub fn scaled(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Ordered vertex triple.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.0
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.0;
        0.5 * signed_area(a, b, c).abs()
    }

    /// Side lengths `(|ab|, |bc|, |ca|)`.
    pub fn side_lengths(&self) -> [f64; 3] {
        let [a, b, c] = self.0;
        [distance(a, b), distance(b, c), distance(c, a)]
    }
}
