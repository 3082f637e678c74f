// File: crates/linegraph-core/src/document.rs
// Summary: Assembles style, axes, labels and series into one markup tree and serializes it.

use tracing::trace;

use crate::axis::{AxisKind, AxisLabelSet};
use crate::chart::ChartSpec;
use crate::error::Result;
use crate::grid::{axis_lines, gridlines, Line};
use crate::labels::label_positions;
use crate::markup::Element;
use crate::series::render_polyline;
use crate::theme::Theme;
use crate::types::{fmt_coord, Offset, Point};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const TITLE_ID: &str = "title";

/// The assembled tree: an embedded stylesheet and the chart's `<svg>` root.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub style: Element,
    pub svg: Element,
}

impl Document {
    /// Serialize style then svg, with literal newlines restored inside polyline point lists.
    pub fn serialize(&self) -> Result<String> {
        let mut text = self.style.serialize()?;
        text.push_str(&self.svg.serialize()?);
        Ok(restore_point_newlines(&text))
    }
}

pub(crate) fn assemble(spec: &ChartSpec, plotted: &[Vec<Point>]) -> Result<Document> {
    let (width, height, offset) = (spec.width, spec.height, spec.offset);
    let theme = &spec.theme;

    let mut svg = Element::new("svg")
        .attr("version", "1.2")
        .attr("xmlns", SVG_NS)
        .attr("xmlns:xlink", XLINK_NS)
        .attr("class", "graph")
        .attr("role", "img")
        .attr("aria-labelledby", TITLE_ID)
        .child(Element::new("title").attr("id", TITLE_ID).text(spec.title.as_str()));

    if spec.gridlines {
        let mut g = Element::new("g").attr("class", "grid main");
        for line in gridlines(spec.x_labels.as_ref(), spec.y_labels.as_ref(), width, height, offset)? {
            g.push(line_element(&line));
        }
        svg.push(g);
    }

    // vertical first, then horizontal
    for line in axis_lines(width, height, offset) {
        svg.push(Element::new("g").attr("class", "axis main").child(line_element(&line)));
    }

    if let Some(set) = &spec.x_labels {
        svg.push(label_group(set, AxisKind::X, width, height, offset, theme)?);
    }
    if let Some(set) = &spec.y_labels {
        svg.push(label_group(set, AxisKind::Y, width, height, offset, theme)?);
    }

    for (index, (series, points)) in spec.series.iter().zip(plotted).enumerate() {
        let stroke = series.color.as_deref().unwrap_or_else(|| theme.series_color(index));
        trace!(index, points = points.len(), stroke, "series");
        let polyline = render_polyline(points, stroke, height, offset);

        let mut line = Element::new("polyline")
            .attr("class", "data")
            .attr("fill", "none")
            .attr("stroke", polyline.stroke.as_str())
            .attr("stroke-width", fmt_coord(theme.line_width))
            .attr("points", polyline.points_attr());
        let mut g = Element::new("g").attr("class", "main");
        if let Some(name) = &series.name {
            g = g.attr("data-series", name.as_str());
            line = line.child(Element::new("title").text(name.as_str()));
        }
        svg.push(g.child(line));
    }

    Ok(Document { style: style_block(width, height, offset, theme), svg })
}

fn line_element(line: &Line) -> Element {
    Element::new("line")
        .attr("x1", fmt_coord(line.x1))
        .attr("y1", fmt_coord(line.y1))
        .attr("x2", fmt_coord(line.x2))
        .attr("y2", fmt_coord(line.y2))
}

/// Tick labels sit `padding` beyond the axis line; the axis title sits past them at the
/// midpoint of the span.
fn label_group(
    set: &AxisLabelSet,
    kind: AxisKind,
    width: u32,
    height: u32,
    offset: Offset,
    theme: &Theme,
) -> Result<Element> {
    let left = -(offset.right as f64);
    let base = height.saturating_sub(offset.down);
    let padding = set.padding as f64;
    let font = theme.label_font_size as f64;

    let mut g = Element::new("g").attr("class", format!("label main {kind}-labels"));
    match kind {
        AxisKind::X => {
            let y = base as f64 + padding;
            for (pos, text) in label_positions(set, kind, width)? {
                g.push(
                    Element::new("text")
                        .attr("x", fmt_coord(pos as f64 + left))
                        .attr("y", fmt_coord(y))
                        .attr("text-anchor", "middle")
                        .attr("dominant-baseline", "hanging")
                        .text(text),
                );
            }
            g.push(
                Element::new("text")
                    .attr("class", "axis-title")
                    .attr("x", fmt_coord(left + width as f64 / 2.0))
                    .attr("y", fmt_coord(y + padding + 2.0 * font))
                    .attr("text-anchor", "middle")
                    .text(set.name.as_str()),
            );
        }
        AxisKind::Y => {
            let x = left - padding;
            for (pos, text) in label_positions(set, kind, base)? {
                g.push(
                    Element::new("text")
                        .attr("x", fmt_coord(x))
                        .attr("y", fmt_coord(pos as f64))
                        .attr("text-anchor", "end")
                        .attr("dominant-baseline", "middle")
                        .text(text),
                );
            }
            let (tx, ty) = (x - padding - 3.0 * font, base as f64 / 2.0);
            g.push(
                Element::new("text")
                    .attr("class", "axis-title")
                    .attr("x", fmt_coord(tx))
                    .attr("y", fmt_coord(ty))
                    .attr("text-anchor", "middle")
                    .attr("transform", format!("rotate(-90 {} {})", fmt_coord(tx), fmt_coord(ty)))
                    .text(set.name.as_str()),
            );
        }
    }
    Ok(g)
}

/// Embedded stylesheet. Inline `<style>` inside the body requires HTML 5.2.
fn style_block(width: u32, height: u32, offset: Offset, theme: &Theme) -> Element {
    let css = format!(
        r#"
.graph {{
    height: {graph_h}px;
    width: {graph_w}px;
    overflow: visible;
}}
.main {{
    transform: translate({right}px, {down}px);
}}
.axis {{
    stroke: {axis_stroke};
    stroke-dasharray: {dash};
    stroke-width: {axis_w};
}}
.grid {{
    stroke: {grid};
    stroke-width: 1;
}}
.label {{
    fill: {label};
    font-family: {font};
    font-size: {font_size}px;
}}
.axis-title {{
    font-weight: bold;
}}
.data {{
    fill: none;
    stroke-width: {line_w};
}}
"#,
        graph_h = height as u64 + offset.down as u64,
        graph_w = width as u64 + offset.right as u64,
        right = offset.right,
        down = offset.down,
        axis_stroke = theme.axis_stroke,
        dash = theme.axis_dasharray,
        axis_w = fmt_coord(theme.axis_width),
        grid = theme.grid_stroke,
        label = theme.label_fill,
        font = theme.font_family,
        font_size = theme.label_font_size,
        line_w = fmt_coord(theme.line_width),
    );
    Element::new("style").text(css)
}

/// Undo the writer's `&#10;` escaping inside every `points="..."` attribute.
pub fn restore_point_newlines(markup: &str) -> String {
    const NEEDLE: &str = " points=\"";
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(start) = rest.find(NEEDLE) {
        let value_start = start + NEEDLE.len();
        out.push_str(&rest[..value_start]);
        rest = &rest[value_start..];
        // escaped values never contain a raw quote, so the next one closes the attribute
        let end = rest.find('"').unwrap_or(rest.len());
        out.push_str(&rest[..end].replace("&#10;", "\n"));
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_only_point_lists() {
        let src = r#"<g data-note="a&#10;b"><polyline points="&#10;0, 1&#10;2, 3&#10;" /></g>"#;
        assert_eq!(
            restore_point_newlines(src),
            "<g data-note=\"a&#10;b\"><polyline points=\"\n0, 1\n2, 3\n\" /></g>"
        );
    }

    #[test]
    fn style_grows_by_offset() {
        let css = style_block(600, 400, Offset::new(40, 30), &Theme::light()).serialize().unwrap();
        assert!(css.contains("height: 430px;"));
        assert!(css.contains("width: 640px;"));
        assert!(css.contains("translate(40px, 30px)"));
    }
}
