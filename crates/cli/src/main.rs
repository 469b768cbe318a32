use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sketchrec::geometry::{Point, TimedPoint};
use sketchrec::synth::{cross_samples, polygon_samples, ReplayToken, StrokeCfg};
use sketchrec::{PassReport, Sketch, SketchCfg};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;
mod report;

use report::Summary;

#[derive(Parser)]
#[command(name = "sketchrec-cli")]
#[command(about = "Replay recorded pointer strokes through the recognizer")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Feed recorded strokes (CSV `stroke,x,y,t` or JSON `[[{x,y,t}]]`) and summarize
    Replay {
        #[arg(long)]
        input: PathBuf,
        /// Write the summary here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Override how many recent pending shapes item recognizers see
        #[arg(long)]
        max_pending: Option<usize>,
    },
    /// Draw a synthetic square with an X inside and summarize
    Demo {
        #[arg(long, default_value_t = 2025)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Replay {
            input,
            out,
            max_pending,
        } => replay(input, out, max_pending),
        Action::Demo { seed } => demo(seed),
    }
}

fn replay(input: PathBuf, out: Option<PathBuf>, max_pending: Option<usize>) -> Result<()> {
    let strokes = input::load_strokes(&input)?;
    tracing::info!(input = %input.display(), strokes = strokes.len(), "replay");
    let mut cfg = SketchCfg::default();
    if let Some(n) = max_pending {
        cfg.max_pending_shapes = n;
    }
    let mut sketch = Sketch::with_defaults(cfg);
    let mut passes = Vec::with_capacity(strokes.len());
    for (i, samples) in strokes.iter().enumerate() {
        let pass = feed(&mut sketch, samples).with_context(|| format!("stroke {i}"))?;
        passes.extend(pass);
    }
    let summary = Summary::new(&sketch, &passes);
    match out {
        Some(path) => {
            report::write_json(&path, &summary)?;
            tracing::info!(out = %path.display(), "summary written");
        }
        None => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn demo(seed: u64) -> Result<()> {
    tracing::info!(seed, "demo");
    let cfg = StrokeCfg {
        jitter_px: 1.0,
        ..Default::default()
    };
    let corners = [
        Point::new(100, 100),
        Point::new(300, 100),
        Point::new(300, 300),
        Point::new(100, 300),
    ];
    let mut strokes = polygon_samples(&corners, cfg, ReplayToken { seed, index: 0 });
    strokes.extend(cross_samples(
        Point::new(200, 200),
        40,
        cfg,
        ReplayToken { seed, index: 1 },
    ));
    let mut sketch = Sketch::default();
    let mut passes = Vec::new();
    for samples in &strokes {
        passes.extend(feed(&mut sketch, samples)?);
    }
    let summary = Summary::new(&sketch, &passes);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Press on the first sample, drag through the middle, release on the last.
fn feed(sketch: &mut Sketch, samples: &[TimedPoint]) -> Result<Option<PassReport>> {
    let Some((first, rest)) = samples.split_first() else {
        tracing::warn!("empty stroke skipped");
        return Ok(None);
    };
    sketch.start_stroke(first.point.x, first.point.y, first.t)?;
    let report = match rest.split_last() {
        Some((last, middle)) => {
            for s in middle {
                sketch.continue_stroke(s.point.x, s.point.y, s.t)?;
            }
            sketch.end_stroke(last.point.x, last.point.y, last.t)?
        }
        // Single sample: release where it was pressed.
        None => sketch.end_stroke(first.point.x, first.point.y, first.t)?,
    };
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_single_sample_is_a_dot() {
        let mut sketch = Sketch::default();
        let r = feed(&mut sketch, &[TimedPoint::new(3, 4, 0)]).unwrap().unwrap();
        assert_eq!(r.shape, Some(sketchrec::shape::ShapeKind::Dot));
        assert!(feed(&mut sketch, &[]).unwrap().is_none());
    }
}
