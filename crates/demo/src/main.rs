// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y[,series] CSV, renders it as a labelled line chart, and writes an HTML page.

mod page;

use anyhow::{Context, Result};
use linegraph_core::{AxisLabelSet, ChartSpec, Normalization, Offset, Series};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Series longer than this are reduced with LTTB before rendering.
const MAX_POINTS: usize = 1500;
/// Number of tick labels generated per axis.
const TICKS: usize = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(
        args.next()
            .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.csv").to_string()),
    );
    let title = args.next().unwrap_or_else(|| "Look at This Graph".to_string());

    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let series = load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if series.is_empty() {
        anyhow::bail!("no rows loaded; expected columns x,y[,series]");
    }
    let rows: usize = series.iter().map(|s| s.points.len()).sum();
    println!("Loaded {} rows across {} series", rows, series.len());

    let (x_min, x_max, y_min, y_max) = extent(&series);
    let mut spec = ChartSpec::new(title)
        .with_size(700, 480)
        .with_offset(Offset::new(60, 40))
        .with_normalization(Normalization::Shared)
        .with_gridlines(true)
        .with_x_labels(AxisLabelSet::new("x", ticks(x_min, x_max)))
        .with_y_labels(AxisLabelSet::new("y", ticks(y_min, y_max)).with_origin_suppressed(true));
    for s in series {
        let reduced = s.downsample(MAX_POINTS);
        debug!(series = s.name.as_deref().unwrap_or("-"), points = s.points.len(), kept = reduced.points.len(), "series");
        spec.add_series(reduced);
    }

    let markup = spec.render().context("rendering chart")?;
    let out = out_name(&path);
    std::fs::write(&out, page::wrap(&markup)).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Read `x,y[,series]` rows; rows without a series column go into one unnamed series.
/// Series keep the order in which their names first appear.
fn load_xy_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |want: &str| headers.iter().position(|h| h == want);
    let i_x = idx("x").context("missing `x` column")?;
    let i_y = idx("y").context("missing `y` column")?;
    let i_series = idx("series");

    let mut out: Vec<Series> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| -> Result<f64> {
            let raw = rec.get(i).unwrap_or_default();
            raw.parse::<f64>().with_context(|| format!("row {}: `{raw}` is not a number", row + 1))
        };
        let point = (num(i_x)?, num(i_y)?);
        let name = i_series.and_then(|i| rec.get(i)).filter(|s| !s.is_empty());

        match out.iter_mut().find(|s| s.name.as_deref() == name) {
            Some(s) => s.points.push(point.into()),
            None => {
                let mut s = Series::new([point]);
                if let Some(name) = name {
                    s = s.with_name(name);
                }
                out.push(s);
            }
        }
    }
    Ok(out)
}

fn extent(series: &[Series]) -> (f64, f64, f64, f64) {
    let mut e = (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
    for p in series.iter().flat_map(|s| &s.points) {
        e.0 = e.0.min(p.x);
        e.1 = e.1.max(p.x);
        e.2 = e.2.min(p.y);
        e.3 = e.3.max(p.y);
    }
    e
}

/// Evenly spaced tick values between `lo` and `hi`, formatted compactly.
fn ticks(lo: f64, hi: f64) -> Vec<String> {
    (0..TICKS)
        .map(|i| {
            let v = lo + (hi - lo) * i as f64 / (TICKS - 1) as f64;
            if v.fract() == 0.0 { format!("{v}") } else { format!("{v:.2}") }
        })
        .collect()
}

/// Produce output file name like target/out/<stem>.html
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}.html"));
    out
}
