use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use plotarea::area::{summarize, TriangleSpec};
use plotarea::geom2::{is_complete, polygon_area, triangulate, Point};
use plotarea::project::Project;
use plotarea::scale::{measure_boundary, ScaleReference};
use plotarea::units::Unit;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{Measured, Payload};

#[derive(Parser)]
#[command(name = "plotarea")]
#[command(about = "Land-plot areas from entered triangles or traced boundaries")]
struct Cmd {
    /// Optional job/ticket tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate triangle specs from a JSON list or a CSV table
    Evaluate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "meters")]
        unit: Unit,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Triangulate a traced boundary (JSON list of {x, y}); measure it when a scale is given
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        /// Pixel length of the scale bar
        #[arg(long, requires = "scale_real")]
        scale_px: Option<f64>,
        /// Real length of the scale bar, in --unit
        #[arg(long, requires = "scale_px")]
        scale_real: Option<f64>,
        #[arg(long, default_value = "meters")]
        unit: Unit,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import a saved project and evaluate everything in it
    Project {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Evaluate { input, unit, out } => {
            let (value, measured) = evaluate(&input, unit)?;
            let payload = Payload {
                command: "evaluate",
                params: json!({ "input": input, "unit": unit }),
                tags: cmd.tag.into_iter().collect(),
                measured,
            };
            emit(&value, out.as_deref(), &payload)
        }
        Action::Triangulate {
            input,
            scale_px,
            scale_real,
            unit,
            out,
        } => {
            let (value, measured) = triangulate_boundary(&input, scale_px, scale_real, unit)?;
            let payload = Payload {
                command: "triangulate",
                params: json!({
                    "input": input,
                    "scale_px": scale_px,
                    "scale_real": scale_real,
                    "unit": unit
                }),
                tags: cmd.tag.into_iter().collect(),
                measured,
            };
            emit(&value, out.as_deref(), &payload)
        }
        Action::Project { input, out } => {
            let (value, measured) = project(&input)?;
            let payload = Payload {
                command: "project",
                params: json!({ "input": input }),
                tags: cmd.tag.into_iter().collect(),
                measured,
            };
            emit(&value, out.as_deref(), &payload)
        }
        Action::Report => report(cmd.tag),
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_specs(path: &Path) -> Result<Vec<TriangleSpec>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => table::read_specs_csv(path),
        _ => serde_json::from_str(&read_text(path)?)
            .with_context(|| format!("parsing triangle specs in {}", path.display())),
    }
}

fn evaluate(input: &Path, unit: Unit) -> Result<(Value, Measured)> {
    let specs = load_specs(input)?;
    let (results, summary) = summarize(&specs, unit);
    tracing::info!(
        triangles = summary.count,
        valid = summary.valid_count,
        total_area = summary.total_area,
        %unit,
        "evaluate"
    );
    let measured = Measured::from_summary(&summary);
    Ok((json!({ "results": results, "summary": summary }), measured))
}

fn triangulate_boundary(
    input: &Path,
    scale_px: Option<f64>,
    scale_real: Option<f64>,
    unit: Unit,
) -> Result<(Value, Measured)> {
    let points: Vec<Point> = serde_json::from_str(&read_text(input)?)
        .with_context(|| format!("parsing boundary points in {}", input.display()))?;
    match (scale_px, scale_real) {
        (Some(px), Some(real)) => {
            let scale = ScaleReference::new(px, real, unit);
            let m = measure_boundary(&points, &scale, 1)?;
            tracing::info!(
                vertices = points.len(),
                triangles = m.triangles.len(),
                complete = m.complete,
                total_area = m.summary.total_area,
                %unit,
                "triangulate"
            );
            Ok((serde_json::to_value(&m)?, Measured::from_boundary(&m)))
        }
        (None, None) => {
            let triangles = triangulate(&points);
            let complete = is_complete(points.len(), &triangles);
            tracing::info!(
                vertices = points.len(),
                triangles = triangles.len(),
                complete,
                "triangulate"
            );
            let pixel_area = polygon_area(&points);
            let measured = Measured {
                triangles: triangles.len(),
                complete: Some(complete),
                pixel_area: Some(pixel_area),
                ..Measured::default()
            };
            let value = json!({
                "triangles": triangles,
                "complete": complete,
                "pixelArea": pixel_area
            });
            Ok((value, measured))
        }
        _ => bail!("--scale-px and --scale-real must be given together"),
    }
}

fn project(input: &Path) -> Result<(Value, Measured)> {
    let p = Project::from_json(&read_text(input)?)
        .with_context(|| format!("importing project {}", input.display()))?;
    let report = p.report()?;
    tracing::info!(
        triangles = report.summary.count,
        valid = report.summary.valid_count,
        boundary = report.boundary.is_some(),
        unit = %p.unit,
        "project"
    );
    let mut measured = Measured::from_summary(&report.summary);
    if let Some(b) = &report.boundary {
        measured = measured.with_boundary(b);
    }
    Ok((serde_json::to_value(&report)?, measured))
}

/// Write `value` to `out` (plus provenance sidecar), or print it.
fn emit(value: &Value, out: Option<&Path>, payload: &Payload) -> Result<()> {
    let Some(path) = out else {
        println!("{}", serde_json::to_string_pretty(value)?);
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    let prov = provenance::write_sidecar(path, payload)?;
    tracing::info!(out = %path.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "kernel_version": plotarea::VERSION,
        "tags": tag.into_iter().collect::<Vec<_>>()
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
