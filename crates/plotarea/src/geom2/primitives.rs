//! Geometry primitives: distance, orientation determinant, containment, shoelace.
//!
//! Sign convention: `signed_area(a, b, c) > 0` iff `a→b→c` turns counterclockwise
//! (standard x-right, y-up axes). `polygon_signed_area` follows the same rule.

use nalgebra::Matrix2;

use super::types::Point;

/// Euclidean distance.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1.vec() - p2.vec()).norm()
}

/// Twice the signed area of `(p1, p2, p3)`: `det[p2 - p1, p3 - p1]`.
#[inline]
pub fn signed_area(p1: Point, p2: Point, p3: Point) -> f64 {
    let m = Matrix2::from_columns(&[p2.vec() - p1.vec(), p3.vec() - p1.vec()]);
    m.determinant()
}

/// Closed containment: `p` lies in `(a, b, c)` when the three sub-triangle
/// orientations never disagree in sign. Edges and vertices count as inside.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = signed_area(p, a, b);
    let d2 = signed_area(p, b, c);
    let d3 = signed_area(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Shoelace area of a closed polygon (no repeated closing vertex). Positive for CCW.
pub fn polygon_signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

/// Unsigned shoelace area.
#[inline]
pub fn polygon_area(points: &[Point]) -> f64 {
    polygon_signed_area(points).abs()
}
