//! Evaluate a list of specs and summarize the valid ones.

use serde::Serialize;

use super::calculator::{evaluate_with, CalculationResult};
use super::inputs::TriangleSpec;
use crate::geom2::GeomCfg;
use crate::units::{acres_from_square_meters, Unit};

/// Totals over the valid results of one evaluation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub unit: Unit,
    pub count: usize,
    pub valid_count: usize,
    pub total_area: f64,
    pub total_area_in_meters: f64,
    pub total_acres: f64,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    /// Non-empty and every triangle valid.
    pub all_valid: bool,
}

impl Summary {
    pub fn from_results(results: &[CalculationResult], unit: Unit) -> Self {
        let valid: Vec<&CalculationResult> = results.iter().filter(|r| r.is_valid).collect();
        let total_area: f64 = valid.iter().map(|r| r.area).sum();
        let total_area_in_meters: f64 = valid.iter().map(|r| r.area_in_meters).sum();
        let min_area = valid.iter().map(|r| r.area).min_by(f64::total_cmp);
        let max_area = valid.iter().map(|r| r.area).max_by(f64::total_cmp);
        Self {
            unit,
            count: results.len(),
            valid_count: valid.len(),
            total_area,
            total_area_in_meters,
            total_acres: acres_from_square_meters(total_area_in_meters),
            min_area,
            max_area,
            all_valid: !results.is_empty() && valid.len() == results.len(),
        }
    }
}

/// Evaluate every spec in order; `index` is the position in `specs`.
pub fn evaluate_all(specs: &[TriangleSpec], unit: Unit) -> Vec<CalculationResult> {
    evaluate_all_with(specs, unit, &GeomCfg::default())
}

pub fn evaluate_all_with(
    specs: &[TriangleSpec],
    unit: Unit,
    cfg: &GeomCfg,
) -> Vec<CalculationResult> {
    specs
        .iter()
        .enumerate()
        .map(|(i, s)| evaluate_with(s, unit, i, cfg))
        .collect()
}

/// `evaluate_all` plus its summary.
pub fn summarize(specs: &[TriangleSpec], unit: Unit) -> (Vec<CalculationResult>, Summary) {
    let results = evaluate_all(specs, unit);
    let summary = Summary::from_results(&results, unit);
    tracing::debug!(
        count = summary.count,
        valid = summary.valid_count,
        total = summary.total_area,
        %unit,
        "evaluated triangles"
    );
    (results, summary)
}
