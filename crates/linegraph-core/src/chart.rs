// File: crates/linegraph-core/src/chart.rs
// Summary: ChartSpec, the root render input, plus validation and normalization of its series.

use tracing::debug;

use crate::axis::AxisLabelSet;
use crate::document::{self, Document};
use crate::error::{ChartError, Result};
use crate::geometry::{self, Bounds};
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Normalization, Offset, Point, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_labels: Option<AxisLabelSet>,
    pub y_labels: Option<AxisLabelSet>,
    pub series: Vec<Series>,
    pub normalization: Normalization,
    pub offset: Offset,
    pub gridlines: bool,
    pub theme: Theme,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            x_labels: None,
            y_labels: None,
            series: Vec::new(),
            normalization: Normalization::default(),
            offset: Offset::default(),
            gridlines: false,
            theme: Theme::default(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_x_labels(mut self, labels: AxisLabelSet) -> Self {
        self.x_labels = Some(labels);
        self
    }

    pub fn with_y_labels(mut self, labels: AxisLabelSet) -> Self {
        self.y_labels = Some(labels);
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Shorthand for `Normalization::PerSeries` (true) or `Normalization::Off` (false).
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.normalization = if enabled { Normalization::PerSeries } else { Normalization::Off };
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_gridlines(mut self, enabled: bool) -> Self {
        self.gridlines = enabled;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Reject configurations that cannot be laid out.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.series.is_empty() {
            return Err(ChartError::NoSeries);
        }
        for set in self.x_labels.iter().chain(self.y_labels.iter()) {
            set.validate()?;
        }
        for (si, s) in self.series.iter().enumerate() {
            if let Some(index) = s.points.iter().position(|p| !p.is_finite()) {
                return Err(ChartError::InvalidPoint { series: si, index });
            }
        }
        Ok(())
    }

    /// Height the data is scaled into: the bottom offset is reserved below the plot.
    pub fn plot_height(&self) -> u32 {
        self.height.saturating_sub(self.offset.down)
    }

    /// Every series mapped into plot space, in input order.
    pub fn plot_points(&self) -> Result<Vec<Vec<Point>>> {
        let plot_height = self.plot_height();
        match self.normalization {
            Normalization::Off => Ok(self.series.iter().map(|s| s.points.clone()).collect()),
            Normalization::PerSeries => self
                .series
                .iter()
                .map(|s| geometry::normalize(&s.points, self.width, plot_height))
                .collect(),
            Normalization::Shared => {
                let shared = self
                    .series
                    .iter()
                    .filter_map(|s| Bounds::of(&s.points))
                    .reduce(Bounds::union);
                let Some(bounds) = shared else {
                    return Ok(vec![Vec::new(); self.series.len()]);
                };
                self.series
                    .iter()
                    .map(|s| geometry::normalize_within(&s.points, &bounds, self.width, plot_height))
                    .collect()
            }
        }
    }

    /// Build the markup tree without serializing it.
    pub fn to_document(&self) -> Result<Document> {
        self.validate()?;
        debug!(
            title = %self.title,
            width = self.width,
            height = self.height,
            series = self.series.len(),
            normalization = ?self.normalization,
            "assembling chart"
        );
        let plotted = self.plot_points()?;
        document::assemble(self, &plotted)
    }

    /// Render to markup: a `<style>` block followed by the `<svg>` element.
    pub fn render(&self) -> Result<String> {
        let text = self.to_document()?.serialize()?;
        debug!(bytes = text.len(), "chart rendered");
        Ok(text)
    }
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self::new("")
    }
}
