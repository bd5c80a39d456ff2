//! Saved project: details, active unit, entered triangles, traced boundary, scale.
//!
//! Import is strict: anything that does not match the shape (unknown method,
//! field not belonging to a method, non-string entry, duplicate triangle id)
//! rejects the whole file. Export writes the same shape back, with entered
//! numbers untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::area::{summarize, CalculationResult, Summary, TriangleSpec};
use crate::geom2::Point;
use crate::scale::{measure_boundary, BoundaryMeasurement, ScaleError, ScaleReference};
use crate::units::Unit;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("malformed project file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate triangle id {0}")]
    DuplicateId(u64),
    #[error("triangle id {0} leaves no id free for new triangles")]
    IdsExhausted(u64),
    #[error(transparent)]
    Scale(#[from] ScaleError),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    /// Free-form details (name, owner, survey number, …), kept verbatim.
    #[serde(default)]
    pub project_details: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub triangles: Vec<TriangleSpec>,
    #[serde(default)]
    pub boundary_points: Vec<Point>,
    #[serde(default)]
    pub scale: Option<ScaleReference>,
}

/// Evaluated view of a project. Both summaries are in the project unit.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub results: Vec<CalculationResult>,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<BoundaryMeasurement>,
}

impl Project {
    pub fn from_json(text: &str) -> Result<Self, ProjectError> {
        let project: Project = serde_json::from_str(text)?;
        project.check_ids()?;
        Ok(project)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn check_ids(&self) -> Result<(), ProjectError> {
        let mut seen = HashSet::with_capacity(self.triangles.len());
        for t in &self.triangles {
            if !seen.insert(t.id) {
                return Err(ProjectError::DuplicateId(t.id));
            }
        }
        Ok(())
    }

    /// Smallest id strictly above every entered triangle id.
    pub fn next_id(&self) -> Result<u64, ProjectError> {
        match self.triangles.iter().map(|t| t.id).max() {
            None => Ok(1),
            Some(top) => top.checked_add(1).ok_or(ProjectError::IdsExhausted(top)),
        }
    }

    /// Entered triangles evaluated in the project unit.
    pub fn evaluate(&self) -> (Vec<CalculationResult>, Summary) {
        summarize(&self.triangles, self.unit)
    }

    /// Traced boundary measured with the project scale and reported in the
    /// project unit; `None` without a scale or with fewer than three points.
    pub fn measure_boundary(&self) -> Result<Option<BoundaryMeasurement>, ProjectError> {
        let Some(scale) = self.scale else {
            return Ok(None);
        };
        if self.boundary_points.len() < 3 {
            return Ok(None);
        }
        Ok(Some(measure_boundary(
            &self.boundary_points,
            &scale.in_unit(self.unit),
            self.next_id()?,
        )?))
    }

    pub fn report(&self) -> Result<ProjectReport, ProjectError> {
        let (results, summary) = self.evaluate();
        Ok(ProjectReport {
            results,
            summary,
            boundary: self.measure_boundary()?,
        })
    }
}
