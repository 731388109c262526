// File: crates/scatter-core/src/svg.rs
// Summary: Minimal SVG element tree with deterministic serialization, plus the page container it is inserted into.

use std::fmt;

use crate::geometry::fmt_coord;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with attributes kept in insertion order, so output is stable.
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

    /// Set an attribute, replacing an earlier value of the same name.
    pub fn attr(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Numeric attribute formatted as an SVG coordinate.
    pub fn num(self, name: &str, value: f64) -> Self {
        self.attr(name, fmt_coord(value))
    }

    pub fn set_attr(&mut self, name: &str, value: impl fmt::Display) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn child(mut self, el: Element) -> Self {
        self.children.push(Node::Element(el));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, el: Element) {
        self.children.push(Node::Element(el));
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Depth-first search for descendants (self included) with the given tag.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect(name, &mut out);
        out
    }

    fn collect<'a>(&'a self, name: &str, out: &mut Vec<&'a Element>) {
        if self.name == name {
            out.push(self);
        }
        for e in self.elements() {
            e.collect(name, out);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class").is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Number of nodes in this subtree, text nodes and self included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|n| match n {
                Node::Element(e) => e.node_count(),
                Node::Text(_) => 1,
            })
            .sum::<usize>()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (k, v) in &self.attrs {
            write!(f, " {}=\"{}\"", k, escape_xml(v))?;
        }
        if self.children.is_empty() {
            return write!(f, "/>");
        }
        write!(f, ">")?;
        for c in &self.children {
            match c {
                Node::Element(e) => write!(f, "{}", e)?,
                Node::Text(t) => write!(f, "{}", escape_xml(t))?,
            }
        }
        write!(f, "</{}>", self.name)
    }
}

pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The page element a chart is inserted into, addressed by an id selector.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub selector: String,
    pub children: Vec<Element>,
}

impl Container {
    pub fn new(selector: impl Into<String>) -> Self {
        Self { selector: selector.into(), children: Vec::new() }
    }

    pub fn append(&mut self, el: Element) {
        self.children.push(el);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes inserted under the container (the container itself excluded).
    pub fn node_count(&self) -> usize {
        self.children.iter().map(Element::node_count).sum()
    }

    /// The element id the selector points at (`#scatter` → `scatter`).
    pub fn id(&self) -> &str {
        self.selector.strip_prefix('#').unwrap_or(&self.selector)
    }

    pub fn to_element(&self) -> Element {
        let mut div = Element::new("div").attr("id", self.id());
        for c in &self.children {
            div.push(c.clone());
        }
        div
    }
}
