// File: crates/linegraph-core/src/axis.rs
// Summary: Axis label sets: title, tick labels, padding and origin suppression.

use std::fmt;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// Horizontal axis; labels run left to right.
    X,
    /// Vertical axis; labels are given bottom to top and laid out top to bottom.
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => f.write_str("x"),
            AxisKind::Y => f.write_str("y"),
        }
    }
}

/// One tick label. `Blank` keeps its slot in the spacing but renders nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    Text(String),
    Blank,
}

impl Label {
    pub fn text(&self) -> Option<&str> {
        match self {
            Label::Text(s) => Some(s),
            Label::Blank => None,
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Text(s)
    }
}

impl From<i32> for Label {
    fn from(v: i32) -> Self {
        Label::Text(v.to_string())
    }
}

impl From<f64> for Label {
    fn from(v: f64) -> Self {
        Label::Text(v.to_string())
    }
}

impl<T: Into<Label>> From<Option<T>> for Label {
    fn from(v: Option<T>) -> Self {
        v.map_or(Label::Blank, Into::into)
    }
}

/// Default distance between an axis line and its tick labels, in pixels.
pub const DEFAULT_LABEL_PADDING: u32 = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabelSet {
    /// Axis title, drawn at the midpoint of the span.
    pub name: String,
    /// Labels in logical order (left to right for x, bottom to top for y).
    pub labels: Vec<Label>,
    pub padding: u32,
    /// Skip the label nearest the origin.
    pub suppress_origin: bool,
}

impl AxisLabelSet {
    pub fn new<I, L>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        Self {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            padding: DEFAULT_LABEL_PADDING,
            suppress_origin: false,
        }
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_origin_suppressed(mut self, suppress: bool) -> Self {
        self.suppress_origin = suppress;
        self
    }

    /// Spacing is `span / (len - 1)`, so fewer than two labels cannot be laid out.
    pub fn validate(&self) -> Result<()> {
        if self.labels.len() < 2 {
            return Err(ChartError::InvalidLabelSet { name: self.name.clone(), count: self.labels.len() });
        }
        Ok(())
    }
}
