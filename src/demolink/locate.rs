//! Selection locator: find the nearest enclosing element of a given name.

use crate::model::{Document, NodeId};

/// Find the closest element named `name` for the document's selection.
///
/// If the selection directly designates a single element of that name, it is
/// returned. Otherwise the selection's common ancestor is taken and its
/// proper ancestors are walked upward until one matches. Returns `None` when
/// nothing on that path matches — which is the ordinary "no widget in
/// context" case, not an error.
pub fn find_element(doc: &Document, name: &str) -> Option<NodeId> {
    let selection = doc.selection();

    if let Some(selected) = selection.selected_element() {
        if doc.name(selected) == Some(name) {
            return Some(selected);
        }
    }

    let ancestor = selection.common_ancestor(doc)?;
    doc.ancestors(ancestor)
        .find(|&id| doc.name(id) == Some(name))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
