//! Ear-clipping triangulation of simple polygons.
//!
//! Model
//! - Vertices live in an arena (`Vec<Point>`, normalized to CCW); the working
//!   polygon is a list of arena indices from which clipped ears are removed.
//! - Each pass scans the working list front to back and clips the first ear,
//!   then the next pass restarts from the front. Clipping order matters: it
//!   decides which of the remaining vertices are reflex.
//! - Cost is O(n³) in the worst case (n ears × n candidates × n containment
//!   checks). Boundaries are hand-traced, so n is small.
//!
//! Degradation
//! - A pass without an ear means the input is not simple (self-intersecting,
//!   repeated edges). The loop stops, a warning is logged, and the first three
//!   remaining vertices are still emitted as a best-effort final triangle. That
//!   triangle may be geometrically meaningless. Callers detect the failure by
//!   comparing the triangle count against `expected_triangle_count`.

use tracing::{debug, warn};

use super::primitives::{point_in_triangle, polygon_signed_area, signed_area};
use super::types::{GeomCfg, Point, Triangle};

/// `n − 2` for a polygon with `n ≥ 3` vertices, else 0.
#[inline]
pub fn expected_triangle_count(n: usize) -> usize {
    n.saturating_sub(2)
}

/// True when `triangles` fully decomposes a polygon with `n` vertices.
#[inline]
pub fn is_complete(n: usize, triangles: &[Triangle]) -> bool {
    n >= 3 && triangles.len() == expected_triangle_count(n)
}

/// Triangulate with default tolerances. See [`triangulate_with`].
pub fn triangulate(polygon: &[Point]) -> Vec<Triangle> {
    triangulate_with(polygon, &GeomCfg::default())
}

/// Decompose a simple polygon (no closing duplicate vertex) into triangles.
///
/// Returns an empty list for fewer than 3 points. For simple input the result
/// has exactly `n − 2` triangles whose areas sum to the polygon area.
pub fn triangulate_with(polygon: &[Point], cfg: &GeomCfg) -> Vec<Triangle> {
    let n = polygon.len();
    if n < 3 {
        return Vec::new();
    }

    let mut arena = polygon.to_vec();
    if polygon_signed_area(&arena) < 0.0 {
        // clockwise: the convexity test below assumes CCW
        arena.reverse();
    }

    let mut working: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(expected_triangle_count(n));
    let max_passes = cfg.max_pass_factor.saturating_mul(n);
    let mut passes = 0usize;

    while working.len() > 3 && passes < max_passes {
        passes += 1;
        let Some(k) = find_ear(&arena, &working) else {
            warn!(
                vertices = n,
                remaining = working.len(),
                clipped = triangles.len(),
                "no ear found; polygon is not simple, triangulation is partial"
            );
            break;
        };
        let m = working.len();
        let prev = working[(k + m - 1) % m];
        let next = working[(k + 1) % m];
        triangles.push(Triangle::new(arena[prev], arena[working[k]], arena[next]));
        working.remove(k);
    }
    if working.len() > 3 && passes >= max_passes {
        warn!(vertices = n, passes, "pass cap reached; triangulation is partial");
    }

    triangles.push(Triangle::new(
        arena[working[0]],
        arena[working[1]],
        arena[working[2]],
    ));
    debug!(
        vertices = n,
        triangles = triangles.len(),
        passes,
        "triangulated"
    );
    triangles
}

/// Position (in `working`) of the first ear in scan order.
fn find_ear(arena: &[Point], working: &[usize]) -> Option<usize> {
    let m = working.len();
    (0..m).find(|&k| {
        let ia = working[(k + m - 1) % m];
        let ib = working[k];
        let ic = working[(k + 1) % m];
        let (a, b, c) = (arena[ia], arena[ib], arena[ic]);
        // reflex vertices are never ears
        if signed_area(a, b, c) < 0.0 {
            return false;
        }
        !working
            .iter()
            .filter(|&&j| j != ia && j != ib && j != ic)
            .any(|&j| point_in_triangle(arena[j], a, b, c))
    })
}
