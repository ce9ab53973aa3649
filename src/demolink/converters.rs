//! Converters between the document model and the HTML view tree.
//!
//! Downcast (model → view) renders a `demoLink` element as an anchor carrying
//! the marker class; upcast (view → model) converts an anchor back only when
//! the marker class is present — link markup without it falls through to the
//! generic conversion untouched. Everything that is not demo-link vocabulary
//! maps generically: element name ↔ tag, attributes copied verbatim.

use crate::demolink::schema::{ChildKind, ATTR_CLASS, ATTR_URL, DEMO_LINK, MARKER_CLASS};
use crate::error::Result;
use crate::model::{Document, NodeId, Transaction};
use crate::view::{parse_fragment, render_fragment, ViewElement, ViewNode};

// ─────────────────────────────────────────────────────────────────────────────
// Downcast: model → view
// ─────────────────────────────────────────────────────────────────────────────

/// Convert one model node (and its subtree) to a view node.
pub fn downcast_node(doc: &Document, id: NodeId) -> Option<ViewNode> {
    if let Some(text) = doc.text_data(id) {
        return Some(ViewNode::Text(text.to_string()));
    }

    let name = doc.name(id)?;
    let mut element = if name == DEMO_LINK {
        let mut el = ViewElement::new("a").with_attribute("class", MARKER_CLASS);
        // Reflect whatever URL is present, including the empty string; a
        // widget with no URL attribute at all renders without href.
        if let Some(url) = doc.attribute(id, ATTR_URL) {
            el.set_attribute("href", url);
        }
        el
    } else if let Some(kind) = ChildKind::from_element_name(name) {
        ViewElement::new(kind.view_tag()).with_attribute("class", kind.view_class())
    } else {
        // Generic element: model name is the tag, attributes pass through.
        let mut el = ViewElement::new(name);
        for (attr_name, attr_value) in doc.attributes(id) {
            el.set_attribute(attr_name, attr_value);
        }
        el
    };

    for &child in doc.children(id) {
        if let Some(converted) = downcast_node(doc, child) {
            element.children.push(converted);
        }
    }
    Some(ViewNode::Element(element))
}

/// Render the whole document as an HTML fragment.
pub fn document_to_html(doc: &Document) -> String {
    let nodes: Vec<ViewNode> = doc
        .children(doc.root())
        .iter()
        .filter_map(|&child| downcast_node(doc, child))
        .collect();
    render_fragment(&nodes)
}

// ─────────────────────────────────────────────────────────────────────────────
// Upcast: view → model
// ─────────────────────────────────────────────────────────────────────────────

/// Build a fresh document from parsed view nodes.
pub fn upcast_nodes(nodes: &[ViewNode]) -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    let mut txn = doc.transaction();
    for node in nodes {
        upcast_node(&mut txn, node, root);
    }
    txn.commit();
    doc
}

/// Parse an HTML fragment and upcast it into a document.
pub fn document_from_html(html: &str) -> Result<Document> {
    let nodes = parse_fragment(html);
    Ok(upcast_nodes(&nodes))
}

fn upcast_node(txn: &mut Transaction<'_>, node: &ViewNode, parent: NodeId) {
    match node {
        ViewNode::Text(text) => {
            let id = txn.create_text(text);
            txn.append(id, parent);
        }
        ViewNode::Element(el) if el.tag == "a" && el.has_class(MARKER_CLASS) => {
            let link = txn.create_element(DEMO_LINK);
            // Missing attributes are accepted as-is: the model reflects
            // whatever string is present, possibly empty.
            txn.set_attribute(link, ATTR_URL, el.attribute("href").unwrap_or(""));
            if let Some(class) = el.attribute("class") {
                txn.set_attribute(link, ATTR_CLASS, class);
            }
            txn.append(link, parent);
            for child in &el.children {
                upcast_link_child(txn, child, link);
            }
        }
        ViewNode::Element(el) => {
            let element = txn.create_element(&el.tag);
            for (name, value) in &el.attributes {
                txn.set_attribute(element, name, value);
            }
            txn.append(element, parent);
            for child in &el.children {
                upcast_node(txn, child, element);
            }
        }
    }
}

/// Convert one child of a marker-gated anchor.
///
/// Only the two slot shapes are demo-link vocabulary; the widget's schema
/// allows nothing else inside it, so other content is dropped rather than
/// converted. The first slot of each kind wins; duplicates are ignored.
fn upcast_link_child(txn: &mut Transaction<'_>, node: &ViewNode, link: NodeId) {
    let ViewNode::Element(el) = node else {
        return;
    };
    let Some(kind) = slot_kind(el) else {
        return;
    };

    let already_present = txn
        .doc()
        .children(link)
        .iter()
        .any(|&child| txn.doc().name(child) == Some(kind.element_name()));
    if already_present {
        return;
    }

    let slot = txn.create_element(kind.element_name());
    txn.append(slot, link);
    let text = el.text_content();
    if !text.is_empty() {
        let payload = txn.create_text(&text);
        txn.append(payload, slot);
    }
}

fn slot_kind(el: &ViewElement) -> Option<ChildKind> {
    ChildKind::CANONICAL_ORDER
        .into_iter()
        .find(|&kind| el.tag == kind.view_tag() && el.has_class(kind.view_class()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
