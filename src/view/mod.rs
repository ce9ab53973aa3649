//! HTML view layer.
//!
//! The view tree is the markup-shaped counterpart of the document model:
//! elements with tags and attributes, text leaves. `parse` turns an HTML
//! string into view nodes, `render` turns view nodes back into HTML. The
//! demo-link converters translate between this tree and the model.

mod parse;
mod render;

pub use parse::parse_fragment;
pub use render::{escape_attribute, escape_text, render_fragment};

// ─────────────────────────────────────────────────────────────────────────────
// View Tree
// ─────────────────────────────────────────────────────────────────────────────

/// One node of the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Element(ViewElement),
    Text(String),
}

/// A markup element: tag, attributes in source order, children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<ViewNode>,
}

impl ViewElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute, replacing an existing one of the same name.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
    }

    /// Value of an attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the `class` attribute contains `class_name` as one of its
    /// whitespace-separated entries.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class_name))
            .unwrap_or(false)
    }

    /// Concatenated text content of this element's subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut out);
        }
        out
    }
}

fn collect_text(node: &ViewNode, out: &mut String) {
    match node {
        ViewNode::Text(text) => out.push_str(text),
        ViewNode::Element(el) => {
            for child in &el.children {
                collect_text(child, out);
            }
        }
    }
}

/// Tags that never carry children and render without a closing tag.
pub(crate) fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
