// File: crates/linegraph-core/src/series.rs
// Summary: Series model and polyline rendering (vertical flip, offset, point-list text).
// Notes:
// - Series points are data space until the assembler normalizes them; the renderer only
//   ever sees plot-space points.

use crate::types::{fmt_coord, Offset, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub points: Vec<Point>,
    /// CSS stroke color. `None` takes the theme palette color at the series index.
    pub color: Option<String>,
    pub name: Option<String>,
}

impl Series {
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self { points: points.into_iter().map(Into::into).collect(), color: None, name: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Fewer than two points still render, as an empty or single-vertex polyline.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Reduce to at most `max_points` with LTTB, keeping the overall shape.
    pub fn downsample(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        let points = if self.points.len() > max_points && max_points >= 2 {
            lttb(&self.points, max_points)
        } else {
            self.points.clone()
        };
        Series { points, color: self.color.clone(), name: self.name.clone() }
    }
}

/// One polyline primitive: formatted `(horizontal, vertical)` pairs plus its stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub coords: Vec<(String, String)>,
    pub stroke: String,
}

impl Polyline {
    /// The `points` attribute text: one `h, v` pair per line, wrapped in newlines.
    pub fn points_attr(&self) -> String {
        let mut out = String::from("\n");
        for (h, v) in &self.coords {
            out.push_str(h);
            out.push_str(", ");
            out.push_str(v);
            out.push('\n');
        }
        out
    }
}

/// Flip plot-space points into SVG coordinates: `h = x - right`, `v = (height - down) - y`.
pub fn render_polyline(points: &[Point], stroke: &str, height: u32, offset: Offset) -> Polyline {
    let right = offset.right as f64;
    let base = height as f64 - offset.down as f64;
    let coords = points
        .iter()
        .map(|p| (fmt_coord(p.x - right), fmt_coord(base - p.y)))
        .collect();
    Polyline { coords, stroke: stroke.to_string() }
}
