//! Provenance sidecars for written results.
//!
//! `results.json` gets `results.provenance.json` next to it, recording which
//! command produced it, with what arguments, and what it measured.

use anyhow::{Context, Result};
use plotarea::area::Summary;
use plotarea::scale::BoundaryMeasurement;
use plotarea::units::Unit;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What one written artifact measured.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measured {
    /// Absent for unscaled (pixel-space) triangulations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    pub triangles: usize,
    pub valid: usize,
    /// Only set when a traced boundary was triangulated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_acres: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_area: Option<f64>,
}

impl Measured {
    pub fn from_summary(s: &Summary) -> Self {
        Self {
            unit: Some(s.unit),
            triangles: s.count,
            valid: s.valid_count,
            total_area: Some(s.total_area),
            total_acres: Some(s.total_acres),
            ..Self::default()
        }
    }

    pub fn from_boundary(m: &BoundaryMeasurement) -> Self {
        Self {
            complete: Some(m.complete),
            ..Self::from_summary(&m.summary)
        }
    }

    /// Add a boundary measured in the same unit (project reports).
    pub fn with_boundary(self, m: &BoundaryMeasurement) -> Self {
        let b = Self::from_boundary(m);
        let sum = |x: Option<f64>, y: Option<f64>| Some(x.unwrap_or(0.0) + y.unwrap_or(0.0));
        Self {
            unit: self.unit.or(b.unit),
            triangles: self.triangles + b.triangles,
            valid: self.valid + b.valid,
            complete: b.complete,
            total_area: sum(self.total_area, b.total_area),
            total_acres: sum(self.total_acres, b.total_acres),
            pixel_area: self.pixel_area,
        }
    }
}

/// Sidecar contents besides the code revision.
#[derive(Debug, Serialize)]
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub tags: Vec<String>,
    pub measured: Measured,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    kernel_version: &'static str,
    artifact: String,
    #[serde(flatten)]
    payload: &'a Payload,
}

pub fn write_sidecar(artifact: &Path, payload: &Payload) -> Result<PathBuf> {
    let path = provenance_path(artifact);
    let doc = Sidecar {
        code_rev: current_git_rev(),
        kernel_version: plotarea::VERSION,
        artifact: artifact.to_string_lossy().into_owned(),
        payload,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(
        command = payload.command,
        triangles = payload.measured.triangles,
        sidecar = %path.display(),
        "provenance"
    );
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "results".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
