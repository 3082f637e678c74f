// File: crates/demo/src/page.rs
// Summary: Minimal HTML page wrapper for embedding rendered chart markup.

const TOP: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>linegraph demo</title>
</head>
<body>
"#;

const BOTTOM: &str = r#"
</body>
</html>
"#;

/// Wrap a `<style>` + `<svg>` fragment in a standalone HTML document.
pub fn wrap(chart_markup: &str) -> String {
    let mut page = String::with_capacity(TOP.len() + chart_markup.len() + BOTTOM.len());
    page.push_str(TOP);
    page.push_str(chart_markup);
    page.push_str(BOTTOM);
    page
}
