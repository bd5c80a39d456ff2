//! Triangle area evaluation.
//!
//! Purpose
//! - Hold what the user typed per triangle (`TriangleSpec`), one of five methods.
//! - Turn each spec into an area in the active unit and in m², with a validity
//!   flag instead of errors.
//! - Aggregate per-triangle results into totals for reports.

mod aggregate;
mod calculator;
mod inputs;

pub use aggregate::{evaluate_all, evaluate_all_with, summarize, Summary};
pub use calculator::{area_of, evaluate, evaluate_with, is_valid, CalculationResult};
pub use inputs::{parse_entry, Entry, Measurements, Method, SpecError, TriangleInputs, TriangleSpec};
