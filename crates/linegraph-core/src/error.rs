// File: crates/linegraph-core/src/error.rs
// Summary: Error type shared by every render stage.

use std::fmt;

use crate::axis::AxisKind;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Coarse error class, used by callers that only care which stage rejected the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    DegenerateRange,
    Serialization,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("invalid chart size {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("chart has no series; at least one is required")]
    NoSeries,

    #[error("label set `{name}` has {count} label(s); at least 2 are required")]
    InvalidLabelSet { name: String, count: usize },

    #[error("series {series} has a non-finite coordinate at point {index}")]
    InvalidPoint { series: usize, index: usize },

    #[error("degenerate {axis} range: every point has {axis} = {value}")]
    DegenerateRange { axis: AxisKind, value: f64 },

    #[error("cannot serialize <{element}>: {reason}")]
    Serialization { element: String, reason: String },
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChartError::InvalidDimensions { .. }
            | ChartError::NoSeries
            | ChartError::InvalidLabelSet { .. }
            | ChartError::InvalidPoint { .. } => ErrorKind::Configuration,
            ChartError::DegenerateRange { .. } => ErrorKind::DegenerateRange,
            ChartError::Serialization { .. } => ErrorKind::Serialization,
        }
    }

    pub(crate) fn serialization(element: &str, reason: impl fmt::Display) -> Self {
        ChartError::Serialization { element: element.to_string(), reason: reason.to_string() }
    }
}
