// File: crates/linegraph-examples/src/bin/lines.rs
// Summary: Minimal example that renders a two-series line chart and prints the markup.

use anyhow::Result;
use linegraph_core::{AxisLabelSet, ChartSpec, Normalization, Series};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let price = vec![(0.0, 0.0), (1.0, 1.2), (2.0, 0.8), (3.0, 1.8), (4.0, 1.4), (5.0, 2.0)];
    let trend = vec![(0.0, 0.2), (5.0, 1.9)];

    let spec = ChartSpec::new("Example lines")
        .with_size(600, 400)
        .with_normalization(Normalization::Shared)
        .with_x_labels(AxisLabelSet::new("X", [0, 1, 2, 3, 4, 5]))
        .with_y_labels(AxisLabelSet::new("Y", ["0", "0.5", "1.0", "1.5", "2.0"]).with_origin_suppressed(true))
        .with_series(Series::new(price).with_name("price"))
        .with_series(Series::new(trend).with_name("trend").with_color("#999"));

    println!("{}", spec.render()?);
    Ok(())
}
