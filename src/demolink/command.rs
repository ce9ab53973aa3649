//! The demo-link editing command: read state out of the document, apply form
//! values back into it.

use std::collections::BTreeMap;

use log::debug;

use crate::demolink::locate::find_element;
use crate::demolink::reconcile::reconcile_child;
use crate::demolink::schema::{ChildKind, Field, ATTR_CLASS, DEMO_LINK, MARKER_CLASS};
use crate::model::{Document, NodeId, Transaction};

/// Flat mapping of field to current string value, merged from the widget's
/// attributes and child payloads.
pub type FieldMap = BTreeMap<Field, String>;

/// Command state exposed to the toolbar and the popover form.
///
/// `refresh` is invoked on every selection or document change; `execute`
/// applies one submitted form as a single transaction.
#[derive(Debug, Clone)]
pub struct DemoLinkCommand {
    /// Whether the action is available. Always true: inserting a fresh
    /// widget is legal anywhere.
    pub is_enabled: bool,
    /// Current field values of the widget in context, or `None` when the
    /// selection is outside any demo link.
    pub value: Option<FieldMap>,
}

impl DemoLinkCommand {
    pub fn new() -> Self {
        Self {
            is_enabled: true,
            value: None,
        }
    }

    /// Recompute `is_enabled` and `value` from the document.
    pub fn refresh(&mut self, doc: &Document) {
        self.is_enabled = true;
        self.value = None;

        let Some(link) = find_element(doc, DEMO_LINK) else {
            return;
        };

        let mut value = FieldMap::new();

        // Recognized attributes; anything outside the closed field set is
        // dropped at this boundary.
        for (name, attr_value) in doc.attributes(link) {
            if let Some(field) = Field::from_attribute_name(name) {
                value.insert(field, attr_value.to_string());
            }
        }

        // Child slots; a slot without a payload reads as the empty string.
        for &child in doc.children(link) {
            let Some(kind) = doc.name(child).and_then(ChildKind::from_element_name) else {
                continue;
            };
            let text = doc.child_text(child).unwrap_or_default().to_string();
            value.insert(kind.field(), text);
        }

        self.value = Some(value);
    }

    /// Apply submitted field values to the widget in context, creating one
    /// at the selection point when none exists. One transaction; no state in
    /// between is observable.
    pub fn execute(&mut self, doc: &mut Document, values: &FieldMap) {
        let existing = find_element(doc, DEMO_LINK);

        let mut txn = doc.transaction();
        let (link, is_new) = match existing {
            Some(link) => (link, false),
            None => (txn.create_element(DEMO_LINK), true),
        };

        edit_element(&mut txn, link, values);

        // A new widget is inserted only after it is fully populated.
        if is_new {
            txn.insert_at_selection(link);
        }
        let version = txn.commit();
        debug!(
            "demo link {} at version {}",
            if is_new { "inserted" } else { "updated" },
            version
        );

        self.refresh(doc);
    }
}

/// Rewrite `link`'s attributes and children to match `values`.
fn edit_element(txn: &mut Transaction<'_>, link: NodeId, values: &FieldMap) {
    // Attributes: allow-listed fields only, class tag forced to the marker.
    let mut attrs: Vec<(String, String)> = Vec::new();
    for field in Field::ATTRIBUTE_ALLOW_LIST {
        let (Some(name), Some(value)) = (field.attribute_name(), values.get(&field)) else {
            continue;
        };
        attrs.push((name.to_string(), value.clone()));
    }
    attrs.push((ATTR_CLASS.to_string(), MARKER_CLASS.to_string()));

    txn.clear_attributes(link);
    txn.set_attributes(link, attrs);

    // Children: reconcile each kind, then append the survivors in canonical
    // order. The append pass, not the reconcile order, is what guarantees
    // [Text, FileExtension] placement.
    let mut kept: Vec<NodeId> = Vec::new();
    for kind in ChildKind::CANONICAL_ORDER {
        let desired = values.get(&kind.field()).map(String::as_str).unwrap_or("");
        if let Some(slot) = reconcile_child(txn, link, desired, kind) {
            kept.push(slot);
        }
    }
    for slot in kept {
        txn.append(slot, link);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demolink::schema::{ATTR_URL, DEMO_LINK_FILE_EXTENSION, DEMO_LINK_TEXT};
    use crate::model::{Position, Selection};

    fn values(url: &str, text: &str, ext: &str) -> FieldMap {
        let mut map = FieldMap::new();
        map.insert(Field::Url, url.to_string());
        map.insert(Field::Text, text.to_string());
        map.insert(Field::FileExtension, ext.to_string());
        map
    }

    fn child_names(doc: &Document, link: NodeId) -> Vec<String> {
        doc.children(link)
            .iter()
            .filter_map(|&c| doc.name(c).map(str::to_string))
            .collect()
    }

    fn link_in(doc: &Document) -> NodeId {
        doc.selection()
            .selected_element()
            .expect("execute should leave the widget selected")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Execute: creation
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_execute_creates_element_with_all_parts() {
        let mut doc = Document::new();
        let mut command = DemoLinkCommand::new();
        command.execute(&mut doc, &values("http://x", "Download", "PDF"));

        let link = link_in(&doc);
        assert_eq!(doc.name(link), Some(DEMO_LINK));
        assert_eq!(doc.attribute(link, ATTR_URL), Some("http://x"));
        assert_eq!(doc.attribute(link, ATTR_CLASS), Some(MARKER_CLASS));
        assert_eq!(
            child_names(&doc, link),
            vec![DEMO_LINK_TEXT, DEMO_LINK_FILE_EXTENSION]
        );
        let text = doc.children(link)[0];
        let ext = doc.children(link)[1];
        assert_eq!(doc.child_text(text), Some("Download"));
        assert_eq!(doc.child_text(ext), Some("PDF"));
    }

    #[test]
    fn test_execute_inserts_at_caret() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let para = txn.create_element("p");
        txn.append(para, root);
        txn.set_selection(Selection::Caret(Position { parent: root, offset: 1 }));
        txn.commit();

        let mut command = DemoLinkCommand::new();
        command.execute(&mut doc, &values("http://x", "Download", ""));

        let link = link_in(&doc);
        assert_eq!(doc.children(root), &[para, link]);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Execute: editing in place
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_execute_removes_empty_extension() {
        let mut doc = Document::new();
        let mut command = DemoLinkCommand::new();
        command.execute(&mut doc, &values("http://x", "Download", "PDF"));
        let link = link_in(&doc);

        command.execute(&mut doc, &values("http://x", "Download", ""));
        assert_eq!(link_in(&doc), link);
        assert_eq!(child_names(&doc, link), vec![DEMO_LINK_TEXT]);

        // Submitting the same empty value again stays a no-op.
        command.execute(&mut doc, &values("http://x", "Download", ""));
        assert_eq!(child_names(&doc, link), vec![DEMO_LINK_TEXT]);
    }

    #[test]
    fn test_execute_changes_only_url() {
        let mut doc = Document::new();
        let mut command = DemoLinkCommand::new();
        command.execute(&mut doc, &values("http://x", "Download", "PDF"));
        let link = link_in(&doc);
        let children_before = doc.children(link).to_vec();

        command.execute(&mut doc, &values("http://y", "Download", "PDF"));

        assert_eq!(doc.attribute(link, ATTR_URL), Some("http://y"));
        assert_eq!(doc.children(link), children_before.as_slice());
        assert_eq!(doc.child_text(children_before[0]), Some("Download"));
        assert_eq!(doc.child_text(children_before[1]), Some("PDF"));
    }

    #[test]
    fn test_execute_restores_canonical_order() {
        // Build a widget whose children are stored backwards, then edit it.
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let link = txn.create_element(DEMO_LINK);
        let ext = txn.create_element(DEMO_LINK_FILE_EXTENSION);
        let ext_payload = txn.create_text("PDF");
        let text = txn.create_element(DEMO_LINK_TEXT);
        let text_payload = txn.create_text("Download");
        txn.append(link, root);
        txn.append(ext, link);
        txn.append(ext_payload, ext);
        txn.append(text, link);
        txn.append(text_payload, text);
        txn.set_selection(Selection::On(link));
        txn.commit();

        let mut command = DemoLinkCommand::new();
        command.execute(&mut doc, &values("http://x", "Download", "PDF"));

        assert_eq!(
            child_names(&doc, link),
            vec![DEMO_LINK_TEXT, DEMO_LINK_FILE_EXTENSION]
        );
    }

    #[test]
    fn test_execute_forces_class_tag() {
        let mut doc = Document::new();
        let mut command = DemoLinkCommand::new();
        let mut map = values("http://x", "Download", "");
        // A caller trying to smuggle a class tag in is overridden.
        map.insert(Field::ClassTag, "not-the-marker".to_string());
        command.execute(&mut doc, &map);

        let link = link_in(&doc);
        assert_eq!(doc.attribute(link, ATTR_CLASS), Some(MARKER_CLASS));
    }

    #[test]
    fn test_execute_clears_stale_attributes() {
        let mut doc = Document::new();
        let mut command = DemoLinkCommand::new();
        command.execute(&mut doc, &values("http://x", "Download", ""));
        let link = link_in(&doc);

        let mut txn = doc.transaction();
        txn.set_attribute(link, "dataStale", "1");
        txn.commit();

        command.execute(&mut doc, &values("http://x", "Download", ""));
        assert_eq!(doc.attribute(link, "dataStale"), None);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Refresh
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_refresh_absent_outside_widget() {
        let mut doc = Document::new();
        let mut command = DemoLinkCommand::new();
        command.refresh(&doc);
        assert!(command.is_enabled);
        assert!(command.value.is_none());

        // Still enabled and absent after content exists but selection is out.
        let root = doc.root();
        let mut txn = doc.transaction();
        let para = txn.create_element("p");
        let text = txn.create_text("plain");
        txn.append(para, root);
        txn.append(text, para);
        txn.set_selection(Selection::Caret(Position { parent: text, offset: 0 }));
        txn.commit();
        command.refresh(&doc);
        assert!(command.is_enabled);
        assert!(command.value.is_none());
    }

    #[test]
    fn test_round_trip_execute_then_refresh() {
        let mut doc = Document::new();
        let mut command = DemoLinkCommand::new();
        let submitted = values("http://x", "Download", "PDF");
        command.execute(&mut doc, &submitted);

        let value = command.value.as_ref().expect("value after execute");
        assert_eq!(value.get(&Field::Url).map(String::as_str), Some("http://x"));
        assert_eq!(value.get(&Field::Text).map(String::as_str), Some("Download"));
        assert_eq!(
            value.get(&Field::FileExtension).map(String::as_str),
            Some("PDF")
        );
        assert_eq!(
            value.get(&Field::ClassTag).map(String::as_str),
            Some(MARKER_CLASS)
        );
    }

    #[test]
    fn test_refresh_reads_slot_without_payload_as_empty() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let link = txn.create_element(DEMO_LINK);
        let text = txn.create_element(DEMO_LINK_TEXT);
        txn.append(link, root);
        txn.append(text, link);
        txn.set_selection(Selection::On(link));
        txn.commit();

        let mut command = DemoLinkCommand::new();
        command.refresh(&doc);
        let value = command.value.expect("value for selected widget");
        assert_eq!(value.get(&Field::Text).map(String::as_str), Some(""));
    }

    #[test]
    fn test_refresh_drops_unrecognized_attributes() {
        let mut doc = Document::new();
        let root = doc.root();
        let mut txn = doc.transaction();
        let link = txn.create_element(DEMO_LINK);
        txn.append(link, root);
        txn.set_attribute(link, ATTR_URL, "http://x");
        txn.set_attribute(link, "linkClass", "unrelated");
        txn.set_selection(Selection::On(link));
        txn.commit();

        let mut command = DemoLinkCommand::new();
        command.refresh(&doc);
        let value = command.value.expect("value for selected widget");
        assert_eq!(value.get(&Field::Url).map(String::as_str), Some("http://x"));
        assert_eq!(value.len(), 1);
    }
}
