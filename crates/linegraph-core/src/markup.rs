// File: crates/linegraph-core/src/markup.rs
// Summary: Minimal XML element tree and serializer used to emit the chart markup.
// Notes:
// - Attribute values escape tab/newline/carriage return as numeric references, the same way
//   common XML writers do. The document assembler undoes this for polyline point lists.

use crate::error::{ChartError, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attrs: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search for every descendant element named `name`.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        collect(self, name, &mut out);
        out
    }

    pub fn serialize(&self) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    fn write_to(&self, out: &mut String) -> Result<()> {
        check_name(&self.name, &self.name)?;
        out.push('<');
        out.push_str(&self.name);
        for (k, v) in &self.attrs {
            check_name(&self.name, k)?;
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            escape_attr(&self.name, v, out)?;
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str(" />");
            return Ok(());
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_to(out)?,
                Node::Text(t) => escape_text(&self.name, t, out)?,
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
        Ok(())
    }
}

fn collect<'a>(el: &'a Element, name: &str, out: &mut Vec<&'a Element>) {
    for child in el.elements() {
        if child.name == name {
            out.push(child);
        }
        collect(child, name, out);
    }
}

/// XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn check_name(element: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let ok = match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
        }
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(ChartError::serialization(element, format!("invalid XML name {name:?}")))
    }
}

fn check_char(element: &str, c: char) -> Result<()> {
    if is_xml_char(c) {
        Ok(())
    } else {
        Err(ChartError::serialization(element, format!("character U+{:04X} is not allowed in XML", c as u32)))
    }
}

fn escape_text(element: &str, text: &str, out: &mut String) -> Result<()> {
    for c in text.chars() {
        check_char(element, c)?;
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Ok(())
}

fn escape_attr(element: &str, value: &str, out: &mut String) -> Result<()> {
    for c in value.chars() {
        check_char(element, c)?;
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    Ok(())
}
