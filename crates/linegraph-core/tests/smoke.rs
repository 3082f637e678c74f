// File: crates/linegraph-core/tests/smoke.rs
// Purpose: Basic end-to-end render: one series in a 100x100 box.

use linegraph_core::{ChartSpec, Series};

#[test]
fn render_smoke_svg() {
    let spec = ChartSpec::new("T")
        .with_size(100, 100)
        .with_series(Series::new([(0, 0), (10, 10)]).with_color("#000"));

    let markup = spec.render().expect("render should succeed");
    assert!(markup.starts_with("<style>"), "style block comes first");
    assert_eq!(markup.matches("<polyline").count(), 1);
    assert!(markup.contains("points=\"\n0, 100\n100, 0\n\""), "got: {markup}");
    assert!(!markup.contains("&#10;"));
    assert!(markup.contains(r##"stroke="#000""##));
    assert!(markup.contains(r#"<title id="title">T</title>"#));
}

#[test]
fn output_is_well_formed_xml() {
    let spec = ChartSpec::new("Look at This Graph & <friends>")
        .with_size(700, 480)
        .with_series(Series::new([(0, 0), (2, 3), (53, 87), (99, 200), (444, 50), (600, 300)]));
    let markup = linegraph_core::render(&spec).expect("render");

    // style and svg are siblings; wrap them so the parser sees one root
    let wrapped = format!("<root>{markup}</root>");
    let doc = roxmltree::Document::parse(&wrapped).expect("well-formed markup");
    let svg = doc
        .descendants()
        .find(|n| n.has_tag_name(("http://www.w3.org/2000/svg", "svg")))
        .expect("svg root");
    assert_eq!(svg.attribute("role"), Some("img"));
    assert_eq!(svg.attribute("aria-labelledby"), Some("title"));
    let title = svg.first_element_child().expect("title");
    assert_eq!(title.text(), Some("Look at This Graph & <friends>"));
}
