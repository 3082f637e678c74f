// File: crates/linegraph-core/src/grid.rs
// Summary: Axis reference lines and optional tick-aligned gridlines.

use crate::axis::AxisLabelSet;
use crate::error::Result;
use crate::labels::tick_positions;
use crate::types::Offset;

/// A straight segment in plot coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// The fixed frame: `[vertical, horizontal]`.
///
/// Both lines meet at the origin, `(-offset.right, height - offset.down)`, which is where the
/// series renderer puts data point `(0, 0)`.
pub fn axis_lines(width: u32, height: u32, offset: Offset) -> [Line; 2] {
    let left = -(offset.right as f64);
    let right = width as f64 - offset.right as f64;
    let bottom = height as f64 - offset.down as f64;
    [
        Line::new(left, 0.0, left, bottom),
        Line::new(left, bottom, right, bottom),
    ]
}

/// One vertical line per x slot and one horizontal line per y slot.
pub fn gridlines(
    x: Option<&AxisLabelSet>,
    y: Option<&AxisLabelSet>,
    width: u32,
    height: u32,
    offset: Offset,
) -> Result<Vec<Line>> {
    let [vertical, horizontal] = axis_lines(width, height, offset);
    let mut lines = Vec::new();
    if let Some(set) = x {
        for pos in tick_positions(set, width)? {
            let px = pos as f64 + vertical.x1;
            lines.push(Line::new(px, vertical.y1, px, vertical.y2));
        }
    }
    if let Some(set) = y {
        for pos in tick_positions(set, height.saturating_sub(offset.down))? {
            let py = pos as f64;
            lines.push(Line::new(horizontal.x1, py, horizontal.x2, py));
        }
    }
    Ok(lines)
}
