//! In-memory SVG document.

use log::warn;

use super::{NodeId, RenderTarget};
use crate::element::escape_xml;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// One element of an [`SvgDocument`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in the order they were first set.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// SVG rendering target that keeps the element tree in memory.
///
/// Elements can be inspected after rendering, and [`SvgDocument::render`]
/// serializes the tree to SVG text.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    nodes: Vec<Element>,
    roots: Vec<NodeId>,
    /// Whether to include XML declaration
    include_declaration: bool,
}

impl SvgDocument {
    pub fn new() -> Self {
        SvgDocument {
            nodes: Vec::new(),
            roots: Vec::new(),
            include_declaration: true,
        }
    }

    /// Set whether to include XML declaration.
    pub fn include_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    /// Elements created without a parent.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All elements of the given kind in document order.
    pub fn find_all(&self, kind: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        for &root in &self.roots {
            self.collect(root, kind, &mut found);
        }
        found
    }

    fn collect(&self, id: NodeId, kind: &str, found: &mut Vec<NodeId>) {
        if let Some(element) = self.element(id) {
            if element.kind == kind {
                found.push(id);
            }
            for &child in &element.children {
                self.collect(child, kind, found);
            }
        }
    }

    /// Render the document to an SVG string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.include_declaration {
            out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        }
        for &root in &self.roots {
            self.write_element(&mut out, root, 0);
        }
        out
    }

    fn write_element(&self, out: &mut String, id: NodeId, depth: usize) {
        let Some(element) = self.element(id) else {
            return;
        };
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&element.kind);
        if element.kind == "svg" && element.attribute("xmlns").is_none() {
            out.push_str(&format!(" xmlns=\"{}\"", SVG_NAMESPACE));
        }
        for (name, value) in &element.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape_xml(value)));
        }

        match (&element.text, element.children.is_empty()) {
            (None, true) => out.push_str("/>\n"),
            (Some(text), true) => {
                out.push_str(&format!(">{}</{}>\n", escape_xml(text), element.kind));
            }
            (text, false) => {
                out.push_str(">\n");
                if let Some(text) = text {
                    out.push_str(&format!("{}  {}\n", indent, escape_xml(text)));
                }
                for &child in &element.children {
                    self.write_element(out, child, depth + 1);
                }
                out.push_str(&format!("{}</{}>\n", indent, element.kind));
            }
        }
    }
}

impl Default for SvgDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for SvgDocument {
    fn create_element(&mut self, kind: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element {
            kind: kind.to_string(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        });
        match parent.and_then(|p| self.nodes.get_mut(p.0)) {
            Some(parent) => parent.children.push(id),
            None => {
                if parent.is_some() {
                    warn!("unknown parent for <{}>, attaching at document root", kind);
                }
                self.roots.push(id);
            }
        }
        id
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(element) = self.nodes.get_mut(node.0) else {
            warn!("attribute {} set on unknown node {:?}", name, node);
            return;
        };
        match element.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => element
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        match self.nodes.get_mut(node.0) {
            Some(element) => element.text = Some(text.to_string()),
            None => warn!("text set on unknown node {:?}", node),
        }
    }
}
