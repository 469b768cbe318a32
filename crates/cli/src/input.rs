//! Recorded stroke tables: CSV via polars, JSON via serde.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use serde::Deserialize;
use sketchrec::geometry::TimedPoint;
use std::path::Path;

#[derive(Deserialize)]
struct Sample {
    x: i32,
    y: i32,
    t: u64,
}

/// Load strokes from `path`; the extension picks the format.
pub fn load_strokes(path: &Path) -> Result<Vec<Vec<TimedPoint>>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        _ => bail!("unsupported input {} (expected .csv or .json)", path.display()),
    }
}

fn load_json(path: &Path) -> Result<Vec<Vec<TimedPoint>>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<Vec<Sample>> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(raw
        .into_iter()
        .map(|s| s.into_iter().map(|p| TimedPoint::new(p.x, p.y, p.t)).collect())
        .collect())
}

/// Rows with the same `stroke` id that follow each other form one stroke.
fn load_csv(path: &Path) -> Result<Vec<Vec<TimedPoint>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("stroke").cast(DataType::Int64),
            col("x").cast(DataType::Int64),
            col("y").cast(DataType::Int64),
            col("t").cast(DataType::Int64),
        ])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;

    let column = |name: &str| -> Result<Vec<Option<i64>>> {
        Ok(df.column(name)?.i64()?.into_iter().collect())
    };
    let (ids, xs, ys, ts) = (column("stroke")?, column("x")?, column("y")?, column("t")?);

    let mut strokes: Vec<Vec<TimedPoint>> = Vec::new();
    let mut current: Option<i64> = None;
    for row in 0..df.height() {
        let missing = || anyhow!("row {row}: missing value");
        let id = ids[row].ok_or_else(missing)?;
        let x = i32::try_from(xs[row].ok_or_else(missing)?).with_context(|| format!("row {row}: x"))?;
        let y = i32::try_from(ys[row].ok_or_else(missing)?).with_context(|| format!("row {row}: y"))?;
        let t = u64::try_from(ts[row].ok_or_else(missing)?).with_context(|| format!("row {row}: t"))?;
        if current != Some(id) {
            strokes.push(Vec::new());
            current = Some(id);
        }
        if let Some(s) = strokes.last_mut() {
            s.push(TimedPoint::new(x, y, t));
        }
    }
    Ok(strokes)
}
