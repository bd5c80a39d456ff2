//! Planar geometry for plot boundaries.
//!
//! Purpose
//! - Points, triangles and the primitives the kernel is built on (distance,
//!   orientation determinant, containment, shoelace area).
//! - Ear-clipping decomposition of a traced boundary into triangles.
//!
//! Conventions
//! - Coordinates are `f64`; orientation is positive for counterclockwise turns.
//! - Tolerances live in `GeomCfg`.

pub mod rand;
mod primitives;
mod triangulate;
mod types;

pub use primitives::{distance, point_in_triangle, polygon_area, polygon_signed_area, signed_area};
pub use triangulate::{expected_triangle_count, is_complete, triangulate, triangulate_with};
pub use types::{GeomCfg, Point, Triangle};
