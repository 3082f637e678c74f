// File: crates/linegraph-core/src/lib.rs
// Summary: Core library entry point; exports the public API for building and rendering line charts.

pub mod axis;
pub mod chart;
pub mod document;
pub mod downsample;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod labels;
pub mod markup;
pub mod series;
pub mod theme;
pub mod types;

pub use axis::{AxisKind, AxisLabelSet, Label};
pub use chart::ChartSpec;
pub use document::Document;
pub use downsample::lttb;
pub use error::{ChartError, ErrorKind, Result};
pub use geometry::{normalize, Bounds};
pub use labels::label_positions;
pub use series::{render_polyline, Polyline, Series};
pub use theme::Theme;
pub use types::{Normalization, Offset, Point};

/// Render `spec` to a `<style>` block followed by an `<svg>` element.
pub fn render(spec: &ChartSpec) -> Result<String> {
    spec.render()
}
