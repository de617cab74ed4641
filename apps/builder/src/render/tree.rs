//! The structured visual tree produced by the Template Renderer.
//!
//! Consumers: the preview display (via `to_html`) and the Export Adapter.
//! Trees compare structurally (`PartialEq`), which is what the renderer's
//! determinism guarantee is stated in terms of.

#![allow(dead_code)]

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "node")]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub style: Option<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Builder entry point: `el("div").class("cv-section")…`.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        ..Element::default()
    }
}

impl Element {
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends a child only when present — the field-omission idiom.
    pub fn child_if(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(Node::Element(child));
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&self.classes.join(" "));
            out.push('"');
        }
        if let Some(style) = &self.style {
            out.push_str(" style=\"");
            out.push_str(style);
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        if self.children.is_empty() && matches!(self.tag, "img" | "br" | "hr") {
            out.push_str(">");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                // User text is inserted verbatim, matching the source
                // renderer (see DESIGN.md, unescaped-text decision).
                Node::Text(text) => out.push_str(text),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualTree {
    pub root: Element,
}

impl VisualTree {
    pub fn new(root: Element) -> Self {
        VisualTree { root }
    }

    /// Serializes the tree to markup for display or export.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.root.write_html(&mut out);
        out
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        fn walk<'a>(element: &'a Element, class: &str) -> Option<&'a Element> {
            if element.has_class(class) {
                return Some(element);
            }
            element.children.iter().find_map(|child| match child {
                Node::Element(e) => walk(e, class),
                Node::Text(_) => None,
            })
        }
        walk(&self.root, class)
    }

    /// All elements carrying `class`, in document order.
    pub fn find_all_class(&self, class: &str) -> Vec<&Element> {
        fn walk<'a>(element: &'a Element, class: &str, hits: &mut Vec<&'a Element>) {
            if element.has_class(class) {
                hits.push(element);
            }
            for child in &element.children {
                if let Node::Element(e) = child {
                    walk(e, class, hits);
                }
            }
        }
        let mut hits = Vec::new();
        walk(&self.root, class, &mut hits);
        hits
    }

    /// Concatenated text content, document order.
    pub fn text_content(&self) -> String {
        fn walk(element: &Element, out: &mut String) {
            for child in &element.children {
                match child {
                    Node::Element(e) => walk(e, out),
                    Node::Text(text) => out.push_str(text),
                }
            }
        }
        let mut out = String::new();
        walk(&self.root, &mut out);
        out
    }
}
