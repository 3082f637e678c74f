// File: crates/linegraph-core/src/types.rs
// Summary: Shared types and constants (points, sizes, offsets).

/// Default chart width in pixels.
pub const DEFAULT_WIDTH: u32 = 600;
/// Default chart height in pixels.
pub const DEFAULT_HEIGHT: u32 = 400;

/// A pair of coordinates, either in data space or (after normalization) in plot space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x: x as f64, y: y as f64 }
    }
}

/// Space reserved around the plot, in pixels.
/// `right` shifts the origin horizontally, `down` shrinks the height used for the vertical flip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub right: u32,
    pub down: u32,
}

impl Offset {
    pub const fn new(right: u32, down: u32) -> Self {
        Self { right, down }
    }

    pub const fn is_zero(&self) -> bool {
        self.right == 0 && self.down == 0
    }
}

/// How data-space points are mapped into plot space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Normalization {
    /// Points are already in plot space.
    Off,
    /// Each series is scaled to its own extent.
    #[default]
    PerSeries,
    /// All series are scaled by the extent of the whole data set.
    Shared,
}

/// Format a coordinate for markup output. Whole numbers print without a fraction.
pub fn fmt_coord(v: f64) -> String {
    if v == 0.0 {
        // folds -0 into 0
        return "0".to_string();
    }
    format!("{v}")
}
