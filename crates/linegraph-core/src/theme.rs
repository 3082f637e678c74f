// File: crates/linegraph-core/src/theme.rs
// Summary: CSS theming for the embedded style block and the default series palette.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub axis_stroke: &'static str,
    pub axis_width: f64,
    pub axis_dasharray: &'static str,
    pub grid_stroke: &'static str,
    pub label_fill: &'static str,
    pub label_font_size: u32,
    pub font_family: &'static str,
    pub line_width: f64,
    /// Stroke colors handed out to series that do not set their own, in order.
    pub palette: &'static [&'static str],
}

const DEFAULT_PALETTE: &[&str] = &["#0074d9", "#ff4136", "#2ecc40", "#ff851b", "#b10dc9", "#39cccc"];

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            axis_stroke: "#ccc",
            axis_width: 1.0,
            axis_dasharray: "0",
            grid_stroke: "#eee",
            label_fill: "#333",
            label_font_size: 12,
            font_family: "sans-serif",
            line_width: 2.0,
            palette: DEFAULT_PALETTE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            axis_stroke: "#b4b4be",
            axis_width: 1.5,
            axis_dasharray: "0",
            grid_stroke: "#28282d",
            label_fill: "#ebebf5",
            label_font_size: 12,
            font_family: "sans-serif",
            line_width: 2.0,
            palette: &["#40a0ff", "#28c878", "#dc5050", "#ffe646", "#c080ff", "#60d0d0"],
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            axis_stroke: "#000",
            axis_width: 2.0,
            axis_dasharray: "0",
            grid_stroke: "#999",
            label_fill: "#000",
            label_font_size: 14,
            font_family: "sans-serif",
            line_width: 3.0,
            palette: &["#0000ff", "#ff0000", "#008000", "#000000"],
        }
    }

    /// Palette color for the series at `index`, cycling when there are more series than colors.
    pub fn series_color(&self, index: usize) -> &'static str {
        if self.palette.is_empty() {
            return "#000";
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
