//! Pixel → real-length scale and the traced-boundary pipeline.
//!
//! A boundary traced on an image is in pixels. A scale reference (two clicked
//! points plus the real distance between them) gives the factor
//! `real_length / pixel_length`. Triangles from the triangulator are turned into
//! SSS specs using their side lengths times that factor, then evaluated like any
//! hand-entered triangle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::area::{summarize, CalculationResult, Summary, TriangleInputs, TriangleSpec};
use crate::geom2::{distance, expected_triangle_count, triangulate, Point, Triangle};
use crate::units::{to_meters, Unit};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaleError {
    #[error("scale pixel length must be finite and > 0 (got {0})")]
    PixelLength(f64),
    #[error("scale real length must be finite and > 0 (got {0})")]
    RealLength(f64),
    #[error("no room for {count} triangle ids starting at {first_id}")]
    IdsExhausted { first_id: u64, count: usize },
}

/// Known real-world length spanning `pixel_length` image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleReference {
    pub pixel_length: f64,
    pub real_length: f64,
    pub unit: Unit,
}

impl ScaleReference {
    pub fn new(pixel_length: f64, real_length: f64, unit: Unit) -> Self {
        Self {
            pixel_length,
            real_length,
            unit,
        }
    }

    /// Scale from two clicked image points a known distance apart.
    pub fn from_points(p1: Point, p2: Point, real_length: f64, unit: Unit) -> Self {
        Self::new(distance(p1, p2), real_length, unit)
    }

    /// Real units per pixel.
    pub fn factor(&self) -> Result<f64, ScaleError> {
        if !(self.pixel_length.is_finite() && self.pixel_length > 0.0) {
            return Err(ScaleError::PixelLength(self.pixel_length));
        }
        if !(self.real_length.is_finite() && self.real_length > 0.0) {
            return Err(ScaleError::RealLength(self.real_length));
        }
        Ok(self.real_length / self.pixel_length)
    }

    /// Same reference with the real length expressed in `unit`.
    pub fn in_unit(self, unit: Unit) -> Self {
        if unit == self.unit {
            return self;
        }
        let real_length = to_meters(self.real_length, self.unit) / unit.factor();
        Self::new(self.pixel_length, real_length, unit)
    }
}

/// SSS specs (ids `first_id, first_id + 1, …`) from pixel-space triangles.
pub fn triangles_to_specs(
    triangles: &[Triangle],
    scale: &ScaleReference,
    first_id: u64,
) -> Result<Vec<TriangleSpec>, ScaleError> {
    let k = scale.factor()?;
    let last_offset = (triangles.len() as u64).saturating_sub(1);
    if first_id.checked_add(last_offset).is_none() {
        return Err(ScaleError::IdsExhausted {
            first_id,
            count: triangles.len(),
        });
    }
    let specs = triangles
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let id = first_id + i as u64;
            let [a, b, c] = t.side_lengths().map(|side| Some((side * k).to_string()));
            TriangleSpec::from_inputs(id, TriangleInputs::Sss { a, b, c })
        })
        .collect();
    Ok(specs)
}

/// Everything derived from one traced boundary.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryMeasurement {
    /// Pixel-space triangles.
    pub triangles: Vec<Triangle>,
    pub specs: Vec<TriangleSpec>,
    pub results: Vec<CalculationResult>,
    pub summary: Summary,
    /// `triangles.len() == n − 2`; false for self-intersecting boundaries.
    pub complete: bool,
}

/// Triangulate a pixel boundary and measure it in the scale's unit.
pub fn measure_boundary(
    points: &[Point],
    scale: &ScaleReference,
    first_id: u64,
) -> Result<BoundaryMeasurement, ScaleError> {
    let triangles = triangulate(points);
    let specs = triangles_to_specs(&triangles, scale, first_id)?;
    let (results, summary) = summarize(&specs, scale.unit);
    let complete = points.len() >= 3 && triangles.len() == expected_triangle_count(points.len());
    if !complete {
        tracing::warn!(
            vertices = points.len(),
            triangles = triangles.len(),
            "boundary triangulation incomplete"
        );
    }
    Ok(BoundaryMeasurement {
        triangles,
        specs,
        results,
        summary,
        complete,
    })
}
