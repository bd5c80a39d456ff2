//! Triangle specs from CSV tables.
//!
//! Layout: an `id` column, a `method` column, and one column per input field
//! (`a`, `sideA`, `p1x`, …). Every column is read as text so entered numbers
//! survive unchanged; empty cells are unset entries.

use anyhow::{Context, Result};
use plotarea::area::{Method, TriangleSpec};
use polars::prelude::*;
use std::path::Path;

pub fn read_specs_csv(path: &Path) -> Result<Vec<TriangleSpec>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(0))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    specs_from_frame(&df)
}

pub fn specs_from_frame(df: &DataFrame) -> Result<Vec<TriangleSpec>> {
    let ids = df.column("id").context("missing `id` column")?.str()?;
    let methods = df.column("method").context("missing `method` column")?.str()?;
    let mut fields = Vec::new();
    for col in df.get_columns() {
        let name = col.name().to_string();
        if name != "id" && name != "method" {
            fields.push((name, col.str()?));
        }
    }

    let mut specs = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let id: u64 = ids
            .get(row)
            .with_context(|| format!("row {row}: missing id"))?
            .trim()
            .parse()
            .with_context(|| format!("row {row}: id is not an unsigned integer"))?;
        let method: Method = methods
            .get(row)
            .with_context(|| format!("row {row}: missing method"))?
            .parse()?;
        let mut spec = TriangleSpec::new(id, method);
        for (name, col) in &fields {
            if let Some(value) = col.get(row) {
                spec.set_input(name, Some(value.to_string()))
                    .with_context(|| format!("row {row}"))?;
            }
        }
        specs.push(spec);
    }
    Ok(specs)
}
