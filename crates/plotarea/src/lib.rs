//! Land-plot area kernel.
//!
//! Two ways to an area:
//! - Triangles entered by hand with one of five methods (`area`).
//! - A boundary traced on an image, split into triangles by ear clipping
//!   (`geom2`) and measured through a pixel scale (`scale`).
//!
//! Everything here is a pure function of its inputs; callers may evaluate
//! independent triangles or polygons in parallel.

pub mod api;
pub mod area;
pub mod geom2;
pub mod project;
pub mod scale;
pub mod units;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{evaluate, evaluate_all, summarize, CalculationResult, Method, Summary, TriangleSpec};
    pub use crate::geom2::{triangulate, Point, Triangle};
    pub use crate::project::Project;
    pub use crate::scale::{measure_boundary, ScaleReference};
    pub use crate::units::{convert_area, to_meters, Unit};
}
