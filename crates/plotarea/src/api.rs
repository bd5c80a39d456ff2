//! Curated surface for collaborators (rendering, export, persistence).
//!
//! Re-exports only; the modules own the logic.

pub use crate::area::{
    evaluate, evaluate_all, summarize, CalculationResult, Method, SpecError, Summary,
    TriangleInputs, TriangleSpec,
};
pub use crate::geom2::{expected_triangle_count, is_complete, triangulate, Point, Triangle};
pub use crate::project::{Project, ProjectError, ProjectReport};
pub use crate::scale::{
    measure_boundary, triangles_to_specs, BoundaryMeasurement, ScaleError, ScaleReference,
};
pub use crate::units::{
    acres_from_square_meters, convert_area, to_meters, Unit, UnitParseError,
    SQUARE_METERS_PER_ACRE,
};

/// Area of one triangle given by its three vertices, in square units of the
/// coordinates. Used by overlays that label each triangle.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    Triangle::new(a, b, c).area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::rand::{draw_boundary_radial, RadialCfg, ReplayToken};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn triangle_area_axis_aligned() {
        let a = triangle_area(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.5));
        assert!((a - 2.5).abs() < 1e-12);
    }

    #[test]
    fn triangle_area_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut p = || Point::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        let (a, b, c) = (p(), p(), p());
        let expected = 0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs();
        assert!((triangle_area(a, b, c) - expected).abs() < 1e-12);
    }

    #[test]
    fn traced_boundary_through_the_whole_pipeline() {
        let boundary = draw_boundary_radial(RadialCfg::default(), ReplayToken { seed: 9, index: 0 });
        let scale = ScaleReference::new(20.0, 1.0, Unit::Meters);
        let m = measure_boundary(&boundary, &scale, 1).unwrap();
        assert!(m.complete);
        assert_eq!(m.triangles.len(), expected_triangle_count(boundary.len()));
        let px_area = crate::geom2::polygon_area(&boundary);
        let expected = px_area / 400.0;
        assert!((m.summary.total_area - expected).abs() <= 1e-9 * expected);
        assert!(m.summary.all_valid);
    }
}
