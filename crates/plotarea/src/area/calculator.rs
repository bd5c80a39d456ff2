//! Per-triangle area evaluation for the five calculation methods.
//!
//! - SSS: a, b, c > 0 with the strict triangle inequality; Heron's formula.
//! - SAS: both sides > 0 and 0 < C < 180°; `½·a·b·sin C`.
//! - ASA: A, B > 0, c > 0 and A + B < 180°; C = 180° − A − B,
//!   `a = c·sin A / sin C`, area `½·a·c·sin B`.
//! - BaseHeight: base, height > 0; `½·b·h`.
//! - Coordinates: shoelace area above `GeomCfg::eps_degenerate` (rejects collinear points).
//!
//! Incomplete input is the normal state while a user types, so evaluation never
//! fails: invalid specs come back with `is_valid = false` and zero areas.
//!
//! Area in m²: SSS and Coordinates re-evaluate the formula on inputs converted
//! to meters. SAS, ASA and BaseHeight multiply the area by `factor²`, since only
//! some of their inputs are lengths. Both paths rely on every formula being
//! homogeneous of degree 2 in lengths.

use serde::Serialize;

use super::inputs::{Measurements, Method, TriangleInputs, TriangleSpec};
use crate::geom2::{signed_area, GeomCfg};
use crate::units::Unit;

/// Outcome of evaluating one spec in one unit.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub id: u64,
    /// Ordinal position in the evaluated sequence.
    pub index: usize,
    pub method: Method,
    pub inputs: TriangleInputs,
    /// Square `unit`s.
    pub area: f64,
    pub is_valid: bool,
    pub area_in_meters: f64,
}

/// Evaluate with default tolerances. See [`evaluate_with`].
pub fn evaluate(spec: &TriangleSpec, unit: Unit, index: usize) -> CalculationResult {
    evaluate_with(spec, unit, index, &GeomCfg::default())
}

pub fn evaluate_with(
    spec: &TriangleSpec,
    unit: Unit,
    index: usize,
    cfg: &GeomCfg,
) -> CalculationResult {
    let m = spec.inputs().measurements();
    let (is_valid, area, area_in_meters) = match area_of(&m, cfg) {
        Some(area) => {
            let f = unit.factor();
            let in_meters = if spec.method().rescales_area_by_factor_squared() {
                area * f * f
            } else {
                formula(&m.scale_lengths(f))
            };
            (true, area, in_meters)
        }
        None => (false, 0.0, 0.0),
    };
    CalculationResult {
        id: spec.id,
        index,
        method: spec.method(),
        inputs: spec.inputs().clone(),
        area,
        is_valid,
        area_in_meters,
    }
}

/// Area when the measurements describe a real triangle, `None` otherwise.
pub fn area_of(m: &Measurements, cfg: &GeomCfg) -> Option<f64> {
    if !is_valid(m, cfg) {
        return None;
    }
    Some(formula(m)).filter(|a| a.is_finite())
}

/// Validity predicate per method.
pub fn is_valid(m: &Measurements, cfg: &GeomCfg) -> bool {
    match *m {
        Measurements::Sss { a, b, c } => {
            a > 0.0 && b > 0.0 && c > 0.0 && a < b + c && b < a + c && c < a + b
        }
        Measurements::Sas {
            side_a,
            side_b,
            angle_c,
        } => side_a > 0.0 && side_b > 0.0 && angle_c > 0.0 && angle_c < 180.0,
        Measurements::Asa {
            angle_a,
            angle_b,
            side_c,
        } => angle_a > 0.0 && angle_b > 0.0 && side_c > 0.0 && angle_a + angle_b < 180.0,
        Measurements::BaseHeight { base, height } => base > 0.0 && height > 0.0,
        Measurements::Coordinates { .. } => formula(m) > cfg.eps_degenerate,
    }
}

/// Unchecked area formula per method (angles in degrees).
fn formula(m: &Measurements) -> f64 {
    match *m {
        Measurements::Sss { a, b, c } => {
            let s = (a + b + c) / 2.0;
            (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
        }
        Measurements::Sas {
            side_a,
            side_b,
            angle_c,
        } => 0.5 * side_a * side_b * angle_c.to_radians().sin(),
        Measurements::Asa {
            angle_a,
            angle_b,
            side_c,
        } => {
            let angle_c = 180.0 - angle_a - angle_b;
            let side_a = side_c * angle_a.to_radians().sin() / angle_c.to_radians().sin();
            0.5 * side_a * side_c * angle_b.to_radians().sin()
        }
        Measurements::BaseHeight { base, height } => 0.5 * base * height,
        Measurements::Coordinates { p1, p2, p3 } => 0.5 * signed_area(p1, p2, p3).abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(method: Method, pairs: &[(&str, &str)]) -> TriangleSpec {
        TriangleSpec::from_pairs(1, method, pairs.iter().copied()).unwrap()
    }

    #[test]
    fn heron_right_triangle() {
        let r = evaluate(&spec(Method::Sss, &[("a", "3"), ("b", "4"), ("c", "5")]), Unit::Meters, 0);
        assert!(r.is_valid);
        assert!((r.area - 6.0).abs() < 1e-6);
        assert_eq!(r.area, r.area_in_meters);
    }

    #[test]
    fn triangle_inequality_is_strict() {
        let r = evaluate(&spec(Method::Sss, &[("a", "1"), ("b", "1"), ("c", "3")]), Unit::Meters, 0);
        assert!(!r.is_valid);
        assert_eq!((r.area, r.area_in_meters), (0.0, 0.0));
        let flat = evaluate(&spec(Method::Sss, &[("a", "1"), ("b", "1"), ("c", "2")]), Unit::Meters, 0);
        assert!(!flat.is_valid);
    }

    #[test]
    fn sas_matches_sss() {
        let sss = evaluate(&spec(Method::Sss, &[("a", "3"), ("b", "4"), ("c", "5")]), Unit::Meters, 0);
        let sas = evaluate(
            &spec(Method::Sas, &[("sideA", "3"), ("sideB", "4"), ("angleC", "90")]),
            Unit::Meters,
            0,
        );
        assert!(sas.is_valid);
        assert!((sas.area - sss.area).abs() < 1e-6);
    }

    #[test]
    fn asa_matches_sss() {
        // 3-4-5 triangle: A opposite 3, B opposite 4, c = 5.
        let a = (3.0f64 / 4.0).atan().to_degrees().to_string();
        let b = (4.0f64 / 3.0).atan().to_degrees().to_string();
        let asa = evaluate(
            &spec(Method::Asa, &[("angleA", a.as_str()), ("angleB", b.as_str()), ("sideC", "5")]),
            Unit::Meters,
            0,
        );
        assert!(asa.is_valid);
        assert!((asa.area - 6.0).abs() < 1e-6);
    }

    #[test]
    fn angle_ranges() {
        let straight = spec(Method::Sas, &[("sideA", "3"), ("sideB", "4"), ("angleC", "180")]);
        assert!(!evaluate(&straight, Unit::Meters, 0).is_valid);
        let too_wide = spec(Method::Asa, &[("angleA", "90"), ("angleB", "90"), ("sideC", "2")]);
        assert!(!evaluate(&too_wide, Unit::Meters, 0).is_valid);
        let negative = spec(Method::Asa, &[("angleA", "-10"), ("angleB", "90"), ("sideC", "2")]);
        assert!(!evaluate(&negative, Unit::Meters, 0).is_valid);
    }

    #[test]
    fn base_height() {
        let r = evaluate(&spec(Method::BaseHeight, &[("base", "10"), ("height", "3")]), Unit::Feet, 4);
        assert!(r.is_valid);
        assert_eq!(r.index, 4);
        assert!((r.area - 15.0).abs() < 1e-12);
        assert!((r.area_in_meters - 15.0 * 0.3048 * 0.3048).abs() < 1e-12);
        let zero = evaluate(&spec(Method::BaseHeight, &[("base", "10"), ("height", "0")]), Unit::Feet, 0);
        assert!(!zero.is_valid);
    }

    #[test]
    fn collinear_coordinates_are_degenerate() {
        let line = spec(
            Method::Coordinates,
            &[("p1x", "0"), ("p1y", "0"), ("p2x", "1"), ("p2y", "1"), ("p3x", "2"), ("p3y", "2")],
        );
        let r = evaluate(&line, Unit::Meters, 0);
        assert!(!r.is_valid);
        assert_eq!(r.area, 0.0);

        let tri = spec(
            Method::Coordinates,
            &[("p1x", "0"), ("p1y", "0"), ("p2x", "4"), ("p2y", "0"), ("p3x", "0"), ("p3y", "3")],
        );
        let r = evaluate(&tri, Unit::Inches, 0);
        assert!(r.is_valid);
        assert!((r.area - 6.0).abs() < 1e-12);
        assert!((r.area_in_meters - 6.0 * 0.0254 * 0.0254).abs() < 1e-15);
    }

    #[test]
    fn unset_entries_are_invalid() {
        for method in Method::ALL {
            let r = evaluate(&TriangleSpec::new(9, method), Unit::Meters, 0);
            assert!(!r.is_valid, "{method}");
            assert_eq!(r.area, 0.0);
            assert_eq!(r.area_in_meters, 0.0);
        }
        let partial = spec(Method::Sss, &[("a", "3"), ("b", "x"), ("c", "5")]);
        assert!(!evaluate(&partial, Unit::Meters, 0).is_valid);
    }

    #[test]
    fn feet_scale_by_factor_squared() {
        let r = evaluate(&spec(Method::Sss, &[("a", "3"), ("b", "4"), ("c", "5")]), Unit::Feet, 0);
        assert!((r.area_in_meters - r.area * 0.3048 * 0.3048).abs() < 1e-9);
    }

    #[test]
    fn every_method_is_degree_two_in_lengths() {
        let specs = [
            spec(Method::Sss, &[("a", "7"), ("b", "8"), ("c", "9")]),
            spec(Method::Sas, &[("sideA", "7"), ("sideB", "8"), ("angleC", "35")]),
            spec(Method::Asa, &[("angleA", "40"), ("angleB", "75"), ("sideC", "9")]),
            spec(Method::BaseHeight, &[("base", "7"), ("height", "8")]),
            spec(
                Method::Coordinates,
                &[("p1x", "1"), ("p1y", "1"), ("p2x", "8"), ("p2y", "2"), ("p3x", "3"), ("p3y", "9")],
            ),
        ];
        let cfg = GeomCfg::default();
        for s in &specs {
            let m = s.inputs().measurements();
            for unit in Unit::ALL {
                let f = unit.factor();
                let direct = area_of(&m.scale_lengths(f), &cfg).unwrap();
                let r = evaluate(s, unit, 0);
                assert!(r.is_valid);
                assert!(
                    (r.area_in_meters - direct).abs() <= 1e-12 * direct.max(1.0),
                    "{} in {unit}",
                    s.method()
                );
                assert!((r.area_in_meters - r.area * f * f).abs() <= 1e-12 * direct.max(1.0));
            }
        }
    }
}
