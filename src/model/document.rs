//! Arena document tree and the transaction type that mutates it.
//!
//! Nodes live in a slot arena addressed by `NodeId`; ids stay stable for the
//! lifetime of a node, so callers can hold an id across reads without holding
//! a borrow. All mutation goes through `Transaction`, which holds the one
//! `&mut Document` for its whole lifetime and prunes unreachable nodes when
//! committed.

use std::collections::BTreeMap;

use crate::model::Selection;

/// ID used to address nodes in the document arena.
pub type NodeId = usize;

/// Name of the synthetic root element every document starts with.
pub const ROOT_NAME: &str = "$root";

// ─────────────────────────────────────────────────────────────────────────────
// Node Data
// ─────────────────────────────────────────────────────────────────────────────

/// Payload of a single node: a named element with attributes, or a text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Named element with string-keyed attributes and ordered children.
    Element {
        name: String,
        attributes: BTreeMap<String, String>,
    },
    /// Plain-text leaf.
    Text { data: String },
}

#[derive(Debug, Clone)]
struct NodeSlot {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────────────────────────────────────

/// The document tree plus its current selection.
///
/// Reading is available on `&Document`; every mutation goes through
/// [`Document::transaction`]. The `version` counter bumps on each committed
/// transaction and is what the UI watches to know when to re-render and
/// refresh command state.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Option<NodeSlot>>,
    root: NodeId,
    selection: Selection,
    version: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root element.
    pub fn new() -> Self {
        let root_slot = NodeSlot {
            data: NodeData::Element {
                name: ROOT_NAME.to_string(),
                attributes: BTreeMap::new(),
            },
            parent: None,
            children: Vec::new(),
        };
        Self {
            slots: vec![Some(root_slot)],
            root: 0,
            selection: Selection::None,
            version: 0,
        }
    }

    /// Root element id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Monotonic counter bumped on every committed transaction.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the id refers to a live (not pruned) node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.slots.get(id).map(|s| s.is_some()).unwrap_or(false)
    }

    fn slot(&self, id: NodeId) -> Option<&NodeSlot> {
        self.slots.get(id).and_then(|s| s.as_ref())
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut NodeSlot> {
        self.slots.get_mut(id).and_then(|s| s.as_mut())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Node inspection
    // ─────────────────────────────────────────────────────────────────────────

    /// Element name, or `None` for text nodes and dead ids.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        match self.slot(id)?.data {
            NodeData::Element { ref name, .. } => Some(name),
            NodeData::Text { .. } => None,
        }
    }

    /// Whether the node is a text leaf.
    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.slot(id).map(|s| &s.data), Some(NodeData::Text { .. }))
    }

    /// Payload of a text node, or `None` for elements and dead ids.
    pub fn text_data(&self, id: NodeId) -> Option<&str> {
        match self.slot(id)?.data {
            NodeData::Text { ref data } => Some(data),
            NodeData::Element { .. } => None,
        }
    }

    /// Value of a single attribute on an element.
    pub fn attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        match self.slot(id)?.data {
            NodeData::Element { ref attributes, .. } => attributes.get(key).map(String::as_str),
            NodeData::Text { .. } => None,
        }
    }

    /// All attributes of an element, in key order.
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> {
        let attrs = match self.slot(id).map(|s| &s.data) {
            Some(NodeData::Element { attributes, .. }) => Some(attributes),
            _ => None,
        };
        attrs
            .into_iter()
            .flat_map(|a| a.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Traversal
    // ─────────────────────────────────────────────────────────────────────────

    /// Children of a node, in document order. Empty for text nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id).map(|s| s.children.as_slice()).unwrap_or(&[])
    }

    /// Parent of a node, if attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id)?.parent
    }

    /// Proper ancestors of a node, nearest first, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.parent(id);
        std::iter::from_fn(move || {
            let next = current?;
            current = self.parent(next);
            Some(next)
        })
    }

    /// Index of a node within its parent's children.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// Payload of the first text child of an element, if any.
    pub fn child_text(&self, id: NodeId) -> Option<&str> {
        self.children(id)
            .iter()
            .find_map(|&child| self.text_data(child))
    }

    /// Concatenated text content of a node and its descendants.
    pub fn deep_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(data) = self.text_data(id) {
            out.push_str(data);
        }
        for &child in self.children(id) {
            self.collect_text(child, out);
        }
    }

    /// Start a mutation transaction. The transaction borrows the document
    /// exclusively until committed or dropped.
    pub fn transaction(&mut self) -> Transaction<'_> {
        Transaction { doc: self }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transaction
// ─────────────────────────────────────────────────────────────────────────────

/// A single atomic edit of the document.
///
/// Operations apply immediately — callers that edit in several steps (the
/// child reconciler in particular) re-read the tree between steps and must
/// observe their own changes. Nothing outside the transaction can run while
/// it is alive, because it holds the only `&mut Document`.
///
/// [`Transaction::commit`] prunes nodes left detached by the edit and bumps
/// the document version. Dropping a transaction without committing leaves the
/// applied operations in place but does not bump the version; rollback is the
/// host application's undo concern, not the model's.
pub struct Transaction<'a> {
    doc: &'a mut Document,
}

impl<'a> Transaction<'a> {
    /// Read access to the document mid-edit.
    pub fn doc(&self) -> &Document {
        self.doc
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push_slot(NodeData::Element {
            name: name.to_string(),
            attributes: BTreeMap::new(),
        })
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, data: &str) -> NodeId {
        self.push_slot(NodeData::Text {
            data: data.to_string(),
        })
    }

    fn push_slot(&mut self, data: NodeData) -> NodeId {
        let id = self.doc.slots.len();
        self.doc.slots.push(Some(NodeSlot {
            data,
            parent: None,
            children: Vec::new(),
        }));
        id
    }

    /// Append a node as the last child of `parent`. A node attached elsewhere
    /// is detached first.
    pub fn append(&mut self, child: NodeId, parent: NodeId) {
        let index = self.doc.children(parent).len();
        self.insert_at(parent, index, child);
    }

    /// Insert a node at `index` among `parent`'s children. A node attached
    /// elsewhere is detached first.
    pub fn insert_at(&mut self, parent: NodeId, index: usize, child: NodeId) {
        if !self.doc.is_alive(child) || !self.doc.is_alive(parent) {
            return;
        }
        self.detach(child);
        let index = index.min(self.doc.children(parent).len());
        if let Some(slot) = self.doc.slot_mut(parent) {
            slot.children.insert(index, child);
        }
        if let Some(slot) = self.doc.slot_mut(child) {
            slot.parent = Some(parent);
        }
    }

    /// Remove a node from its parent. The node stays alive until commit, so
    /// it can be re-appended within the same transaction.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.doc.parent(node) else {
            return;
        };
        if let Some(slot) = self.doc.slot_mut(parent) {
            slot.children.retain(|&c| c != node);
        }
        if let Some(slot) = self.doc.slot_mut(node) {
            slot.parent = None;
        }
    }

    /// Set one attribute on an element. No-op on text nodes.
    pub fn set_attribute(&mut self, node: NodeId, key: &str, value: &str) {
        if let Some(NodeData::Element { attributes, .. }) = self.doc.slot_mut(node).map(|s| &mut s.data)
        {
            attributes.insert(key.to_string(), value.to_string());
        }
    }

    /// Set several attributes on an element.
    pub fn set_attributes<I>(&mut self, node: NodeId, attrs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in attrs {
            self.set_attribute(node, &key, &value);
        }
    }

    /// Remove every attribute from an element.
    pub fn clear_attributes(&mut self, node: NodeId) {
        if let Some(NodeData::Element { attributes, .. }) = self.doc.slot_mut(node).map(|s| &mut s.data)
        {
            attributes.clear();
        }
    }

    /// Replace the document selection.
    pub fn set_selection(&mut self, selection: Selection) {
        self.doc.selection = selection;
    }

    /// Insert a node at the current selection point and select it.
    ///
    /// With a caret the node lands next to the caret's position; with an
    /// element selected it lands right after that element; with no selection
    /// it is appended to the root.
    pub fn insert_at_selection(&mut self, node: NodeId) {
        match self.doc.selection.clone() {
            Selection::Caret(pos) => {
                if self.doc.is_text(pos.parent) {
                    // Carets inside a text leaf insert after that leaf.
                    let text = pos.parent;
                    if let (Some(parent), Some(index)) =
                        (self.doc.parent(text), self.doc.index_in_parent(text))
                    {
                        self.insert_at(parent, index + 1, node);
                    } else {
                        let root = self.doc.root;
                        self.append(node, root);
                    }
                } else {
                    self.insert_at(pos.parent, pos.offset, node);
                }
            }
            Selection::On(selected) => {
                if let (Some(parent), Some(index)) = (
                    self.doc.parent(selected),
                    self.doc.index_in_parent(selected),
                ) {
                    self.insert_at(parent, index + 1, node);
                } else {
                    let root = self.doc.root;
                    self.append(node, root);
                }
            }
            Selection::None => {
                let root = self.doc.root;
                self.append(node, root);
            }
        }
        self.doc.selection = Selection::On(node);
    }

    /// Finish the edit: prune nodes no longer reachable from the root, clear
    /// a selection that points at pruned nodes, and bump the version.
    pub fn commit(self) -> u64 {
        let mut reachable = vec![false; self.doc.slots.len()];
        let mut stack = vec![self.doc.root];
        while let Some(id) = stack.pop() {
            if reachable[id] {
                continue;
            }
            reachable[id] = true;
            stack.extend_from_slice(self.doc.children(id));
        }
        for (id, slot) in self.doc.slots.iter_mut().enumerate() {
            if !reachable[id] {
                *slot = None;
            }
        }
        let selection_alive = match &self.doc.selection {
            Selection::None => true,
            Selection::Caret(pos) => reachable.get(pos.parent).copied().unwrap_or(false),
            Selection::On(id) => reachable.get(*id).copied().unwrap_or(false),
        };
        if !selection_alive {
            self.doc.selection = Selection::None;
        }
        self.doc.version += 1;
        self.doc.version
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_root() {
        let doc = Document::new();
        assert_eq!(doc.name(doc.root()), Some(ROOT_NAME));
        assert!(doc.children(doc.root()).is_empty());
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn test_create_and_append() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let para = txn.create_element("p");
        let text = txn.create_text("hello");
        txn.append(text, para);
        txn.append(para, root);
        txn.commit();

        assert_eq!(doc.children(root), &[para]);
        assert_eq!(doc.children(para), &[text]);
        assert_eq!(doc.parent(text), Some(para));
        assert_eq!(doc.text_data(text), Some("hello"));
        assert_eq!(doc.version(), 1);
    }

    #[test]
    fn test_append_moves_attached_node() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let a = txn.create_element("a");
        let b = txn.create_element("b");
        let child = txn.create_text("x");
        txn.append(a, root);
        txn.append(b, root);
        txn.append(child, a);
        txn.append(child, b);
        txn.commit();

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn test_insert_at_preserves_order() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let first = txn.create_element("first");
        let second = txn.create_element("second");
        let between = txn.create_element("between");
        txn.append(first, root);
        txn.append(second, root);
        txn.insert_at(root, 1, between);
        txn.commit();

        assert_eq!(doc.children(root), &[first, between, second]);
        assert_eq!(doc.index_in_parent(between), Some(1));
    }

    #[test]
    fn test_detach_keeps_node_alive_until_commit() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let el = txn.create_element("p");
        txn.append(el, root);
        txn.detach(el);
        assert!(txn.doc().is_alive(el));
        assert!(txn.doc().parent(el).is_none());
        // Re-append within the same transaction.
        txn.append(el, root);
        txn.commit();
        assert!(doc.is_alive(el));
        assert_eq!(doc.children(root), &[el]);
    }

    #[test]
    fn test_commit_prunes_detached_nodes() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let kept = txn.create_element("kept");
        let dropped = txn.create_element("dropped");
        let dropped_child = txn.create_text("gone");
        txn.append(dropped_child, dropped);
        txn.append(kept, root);
        txn.append(dropped, root);
        txn.detach(dropped);
        txn.commit();

        assert!(doc.is_alive(kept));
        assert!(!doc.is_alive(dropped));
        assert!(!doc.is_alive(dropped_child));
    }

    #[test]
    fn test_commit_clears_selection_on_pruned_node() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let el = txn.create_element("p");
        txn.append(el, root);
        txn.set_selection(Selection::On(el));
        txn.detach(el);
        txn.commit();

        assert!(matches!(doc.selection(), Selection::None));
    }

    #[test]
    fn test_attributes_set_and_clear() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let el = txn.create_element("p");
        txn.append(el, root);
        txn.set_attribute(el, "class", "note");
        txn.set_attributes(
            el,
            vec![("id".to_string(), "p1".to_string())],
        );
        txn.commit();

        assert_eq!(doc.attribute(el, "class"), Some("note"));
        assert_eq!(doc.attribute(el, "id"), Some("p1"));
        assert_eq!(doc.attributes(el).count(), 2);

        let mut txn = doc.transaction();
        txn.clear_attributes(el);
        txn.commit();
        assert_eq!(doc.attributes(el).count(), 0);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let outer = txn.create_element("outer");
        let inner = txn.create_element("inner");
        let text = txn.create_text("x");
        txn.append(outer, root);
        txn.append(inner, outer);
        txn.append(text, inner);
        txn.commit();

        let chain: Vec<NodeId> = doc.ancestors(text).collect();
        assert_eq!(chain, vec![inner, outer, root]);
    }

    #[test]
    fn test_child_text_and_deep_text() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let el = txn.create_element("p");
        let inner = txn.create_element("em");
        let lead = txn.create_text("hello ");
        let emphasized = txn.create_text("world");
        txn.append(el, root);
        txn.append(lead, el);
        txn.append(inner, el);
        txn.append(emphasized, inner);
        txn.commit();

        assert_eq!(doc.child_text(el), Some("hello "));
        assert_eq!(doc.deep_text(el), "hello world");
        assert_eq!(doc.child_text(inner), Some("world"));
    }

    #[test]
    fn test_insert_at_selection_with_caret_in_element() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let first = txn.create_element("p");
        txn.append(first, root);
        txn.set_selection(Selection::Caret(crate::model::Position {
            parent: root,
            offset: 1,
        }));
        let inserted = txn.create_element("widget");
        txn.insert_at_selection(inserted);
        txn.commit();

        assert_eq!(doc.children(root), &[first, inserted]);
        assert!(matches!(doc.selection(), Selection::On(id) if *id == inserted));
    }

    #[test]
    fn test_insert_at_selection_with_no_selection_appends_to_root() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let node = txn.create_element("widget");
        txn.insert_at_selection(node);
        txn.commit();

        assert_eq!(doc.children(root), &[node]);
    }
}
