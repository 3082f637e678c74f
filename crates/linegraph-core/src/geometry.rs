// File: crates/linegraph-core/src/geometry.rs
// Summary: Data-space extents and normalization of points into plot-space pixels.

use tracing::trace;

use crate::axis::AxisKind;
use crate::error::{ChartError, Result};
use crate::types::Point;

/// Data-space extent of a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Extent of `points`, or `None` when there are no points.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Self { x_min: first.x, x_max: first.x, y_min: first.y, y_max: first.y };
        for p in &points[1..] {
            b.x_min = b.x_min.min(p.x);
            b.x_max = b.x_max.max(p.x);
            b.y_min = b.y_min.min(p.y);
            b.y_max = b.y_max.max(p.y);
        }
        Some(b)
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Fails when either axis collapses to a single value.
    pub fn check_range(&self) -> Result<()> {
        if self.x_max == self.x_min {
            return Err(ChartError::DegenerateRange { axis: AxisKind::X, value: self.x_min });
        }
        if self.y_max == self.y_min {
            return Err(ChartError::DegenerateRange { axis: AxisKind::Y, value: self.y_min });
        }
        Ok(())
    }

    /// Map one point into `[0, width] x [0, height]`, truncating to whole pixels.
    /// Callers must have checked the range first.
    pub fn project(&self, p: Point, width: u32, height: u32) -> Point {
        let x_mul = 1.0 - (self.x_max - p.x) / (self.x_max - self.x_min);
        let y_mul = 1.0 - (self.y_max - p.y) / (self.y_max - self.y_min);
        Point::new(to_pixel(x_mul, width), to_pixel(y_mul, height))
    }
}

fn to_pixel(mul: f64, extent: u32) -> f64 {
    let extent = extent as f64;
    // truncation can land on -0 or drift past the edge by an ulp
    clamp((mul * extent).trunc(), 0.0, extent) + 0.0
}

/// Normalize one series by its own extent.
pub fn normalize(points: &[Point], width: u32, height: u32) -> Result<Vec<Point>> {
    match Bounds::of(points) {
        Some(bounds) => normalize_within(points, &bounds, width, height),
        None => Ok(Vec::new()),
    }
}

/// Normalize `points` against a caller-chosen extent, e.g. the union over all series.
pub fn normalize_within(points: &[Point], bounds: &Bounds, width: u32, height: u32) -> Result<Vec<Point>> {
    bounds.check_range()?;
    trace!(
        x_min = bounds.x_min,
        x_max = bounds.x_max,
        y_min = bounds.y_min,
        y_max = bounds.y_max,
        n = points.len(),
        "normalize"
    );
    Ok(points.iter().map(|&p| bounds.project(p, width, height)).collect())
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
