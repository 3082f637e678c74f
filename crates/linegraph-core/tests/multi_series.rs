// File: crates/linegraph-core/tests/multi_series.rs
// Purpose: Several series render as separate polylines, in order, each with its own stroke.

use linegraph_core::markup::Node;
use linegraph_core::{AxisLabelSet, ChartSpec, Normalization, Offset, Series, Theme};

fn polylines(markup: &str) -> Vec<(String, String)> {
    let wrapped = format!("<root>{markup}</root>");
    let doc = roxmltree::Document::parse(&wrapped).expect("well-formed");
    doc.descendants()
        .filter(|n| n.tag_name().name() == "polyline")
        .map(|n| {
            // attribute-value normalization turns the literal newlines into spaces
            let points = n.attribute("points").unwrap_or_default().split_whitespace().collect::<Vec<_>>().join(" ");
            (n.attribute("stroke").unwrap_or_default().to_string(), points)
        })
        .collect()
}

#[test]
fn two_series_keep_order_and_color() {
    let markup = ChartSpec::new("Two")
        .with_size(100, 100)
        .with_series(Series::new([(0, 0), (10, 10)]).with_color("red"))
        .with_series(Series::new([(0, 10), (10, 0)]).with_color("blue"))
        .render()
        .unwrap();

    let lines = polylines(&markup);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, "red");
    assert_eq!(lines[1].0, "blue");
    assert_eq!(lines[0].1, "0, 100 100, 0");
    assert_eq!(lines[1].1, "0, 0 100, 100");
    // the raw markup keeps one pair per line
    assert!(markup.contains("points=\"\n0, 100\n100, 0\n\""));
    assert!(markup.contains("points=\"\n0, 0\n100, 100\n\""));
}

#[test]
fn uncolored_series_take_palette_colors() {
    let theme = Theme::light();
    let mut spec = ChartSpec::new("Palette").with_theme(theme);
    for i in 0..3 {
        spec.add_series(Series::new([(0, i), (1, i + 1)]));
    }
    spec.add_series(Series::new([(0, 0), (1, 1)]).with_color("black"));

    let strokes: Vec<String> = polylines(&spec.render().unwrap()).into_iter().map(|(s, _)| s).collect();
    assert_eq!(strokes, vec![theme.series_color(0), theme.series_color(1), theme.series_color(2), "black"]);
}

#[test]
fn named_series_are_tagged() {
    let spec = ChartSpec::new("Named").with_series(Series::new([(0, 0), (1, 1)]).with_name("close"));
    let doc = spec.to_document().unwrap();
    let group = doc.svg.find_all("g").into_iter().find(|g| g.get_attr("data-series").is_some()).expect("series group");
    assert_eq!(group.get_attr("data-series"), Some("close"));
    let polyline = group.elements().next().expect("polyline");
    assert_eq!(polyline.find_all("title").len(), 1);
}

#[test]
fn labels_and_axes_are_laid_out() {
    let spec = ChartSpec::new("Look at This Graph")
        .with_size(700, 480)
        .with_x_labels(AxisLabelSet::new("Year", [2008, 2009, 2010, 2011, 2012]))
        .with_y_labels(AxisLabelSet::new("Price", [None, Some(5), Some(10), Some(14)]))
        .with_series(Series::new([(0, 0), (2, 3), (53, 87), (99, 200), (444, 50), (600, 300)]));
    let doc = spec.to_document().unwrap();

    let lines = doc.svg.find_all("line");
    assert_eq!(lines.len(), 2, "two axis lines without gridlines");
    assert_eq!(lines[0].get_attr("x2"), Some("0"));
    assert_eq!(lines[0].get_attr("y2"), Some("480"));
    assert_eq!(lines[1].get_attr("x2"), Some("700"));
    assert_eq!(lines[1].get_attr("y1"), Some("480"));

    let texts = doc.svg.find_all("text");
    // 5 x labels + title, 3 y labels (one blank) + title
    assert_eq!(texts.len(), 10);
    let y_ticks: Vec<&str> = texts
        .iter()
        .filter(|t| t.get_attr("text-anchor") == Some("end"))
        .filter_map(|t| t.get_attr("y"))
        .collect();
    assert_eq!(y_ticks, vec!["0", "160", "320"]);

    let titles: Vec<_> = texts.iter().filter(|t| t.get_attr("class") == Some("axis-title")).collect();
    assert_eq!(titles[0].get_attr("x"), Some("350"));
    assert_eq!(titles[1].get_attr("y"), Some("240"));
}

#[test]
fn gridlines_reuse_tick_positions() {
    let spec = ChartSpec::new("Grid")
        .with_size(100, 60)
        .with_gridlines(true)
        .with_x_labels(AxisLabelSet::new("x", ["a", "b", "c", "d", "e"]))
        .with_y_labels(AxisLabelSet::new("y", ["lo", "mid", "hi"]))
        .with_series(Series::new([(0, 0), (1, 1)]));
    let doc = spec.to_document().unwrap();
    let grid = doc.svg.find_all("g").into_iter().find(|g| g.get_attr("class") == Some("grid main")).expect("grid group");
    let xs: Vec<_> = grid.elements().filter(|l| l.get_attr("x1") == l.get_attr("x2")).map(|l| l.get_attr("x1").unwrap()).collect();
    let ys: Vec<_> = grid.elements().filter(|l| l.get_attr("y1") == l.get_attr("y2")).map(|l| l.get_attr("y1").unwrap()).collect();
    assert_eq!(xs, vec!["0", "25", "50", "75", "100"]);
    assert_eq!(ys, vec!["0", "30", "60"]);
}

#[test]
fn offset_moves_series_and_axes_together() {
    let spec = ChartSpec::new("Offset")
        .with_size(100, 100)
        .with_offset(Offset::new(10, 20))
        .with_normalization(Normalization::PerSeries)
        .with_series(Series::new([(0, 0), (10, 10)]));
    let doc = spec.to_document().unwrap();
    let horizontal = doc.svg.find_all("line")[1];
    assert_eq!(horizontal.get_attr("x1"), Some("-10"));
    assert_eq!(horizontal.get_attr("y1"), Some("80"));
    let points = doc.svg.find_all("polyline")[0].get_attr("points").unwrap();
    // data origin lands on the axis origin, data maximum on the top of the vertical axis
    assert_eq!(points, "\n-10, 80\n90, 0\n");
}

#[test]
fn bottom_offset_keeps_data_within_the_labelled_span() {
    let spec = ChartSpec::new("Offset")
        .with_size(100, 100)
        .with_offset(Offset::new(0, 40))
        .with_y_labels(AxisLabelSet::new("y", ["0", "10"]))
        .with_series(Series::new([(0, 0), (10, 10)]));
    let doc = spec.to_document().unwrap();

    let vertical = doc.svg.find_all("line")[0];
    assert_eq!(vertical.get_attr("y1"), Some("0"));
    assert_eq!(vertical.get_attr("y2"), Some("60"));

    let labels = doc.svg.find_all("text");
    let top = labels
        .iter()
        .find(|t| t.get_attr("text-anchor") == Some("end") && t.get_attr("y") == Some("0"))
        .expect("top y label");
    assert_eq!(top.children, vec![Node::Text("10".into())]);

    let points = doc.svg.find_all("polyline")[0].get_attr("points").unwrap();
    assert_eq!(points, "\n0, 60\n100, 0\n");
}
