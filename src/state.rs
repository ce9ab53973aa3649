//! Application state management for DemoLink
//!
//! This module defines the central `AppState` struct that owns the document,
//! the editing command, the current file path and dirty flag, and the
//! selection-listener logic that decides when the popover form shows.

use std::path::{Path, PathBuf};

use log::info;

use crate::config::Settings;
use crate::demolink::{
    find_element, DemoLinkCommand, FieldMap, DEMO_LINK, DEMO_LINK_FILE_EXTENSION, DEMO_LINK_TEXT,
};
use crate::error::Result;
use crate::files::{read_document, write_document};
use crate::model::{Document, NodeId, Position, Selection};

// ─────────────────────────────────────────────────────────────────────────────
// Selection Context
// ─────────────────────────────────────────────────────────────────────────────

/// What the current selection means for the demo-link UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionContext {
    /// Selection is outside any demo link; the form hides.
    Outside,
    /// A demo link is selected as a whole; the form shows for it.
    OnWidget { link: NodeId },
    /// The caret is inside one of a demo link's child slots. `snap` is true
    /// when the caret touches the widget's edge and the selection should be
    /// promoted to the whole widget.
    InChild { link: NodeId, snap: bool },
}

/// Classify the document's selection for the demo-link UI.
///
/// The caret touching the leading edge of the Text slot, or the trailing
/// edge of the last slot, counts as being "on the border": such selections
/// snap to the whole widget so the user edits the link rather than typing
/// into a boundary. A selection resolving to any element that is not
/// demo-link vocabulary is plain [`SelectionContext::Outside`] — an ordinary
/// branch, not a fault.
pub fn resolve_selection_context(doc: &Document) -> SelectionContext {
    let selection = doc.selection();

    let Some(element) = selection
        .selected_element()
        .or_else(|| selection.common_ancestor(doc))
    else {
        return SelectionContext::Outside;
    };

    let Some(name) = doc.name(element) else {
        return SelectionContext::Outside;
    };

    if name == DEMO_LINK {
        return SelectionContext::OnWidget { link: element };
    }

    if name != DEMO_LINK_TEXT && name != DEMO_LINK_FILE_EXTENSION {
        return SelectionContext::Outside;
    }

    // Inside a child slot; an orphaned slot with no widget above it counts
    // as outside.
    let Some(link) = find_element(doc, DEMO_LINK) else {
        return SelectionContext::Outside;
    };

    let Some(position) = selection.first_position(doc) else {
        return SelectionContext::InChild { link, snap: false };
    };

    // The trailing edge belongs to the extension slot when one exists,
    // otherwise to the text slot.
    let has_extension = doc
        .children(link)
        .iter()
        .any(|&child| doc.name(child) == Some(DEMO_LINK_FILE_EXTENSION));
    let trailing_name = if has_extension {
        DEMO_LINK_FILE_EXTENSION
    } else {
        DEMO_LINK_TEXT
    };

    let before_touch = name == DEMO_LINK_TEXT
        && Position::before(doc, element)
            .map(|edge| position.is_touching(doc, &edge))
            .unwrap_or(false);
    let after_touch = name == trailing_name
        && Position::after(doc, element)
            .map(|edge| position.is_touching(doc, &edge))
            .unwrap_or(false);

    SelectionContext::InChild {
        link,
        snap: before_touch || after_touch,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state: document, command, file binding, settings.
#[derive(Debug)]
pub struct AppState {
    /// The document being edited
    pub document: Document,
    /// Demo-link command state exposed to the toolbar and form
    pub command: DemoLinkCommand,
    /// File path the document is bound to (None for unsaved documents)
    pub path: Option<PathBuf>,
    /// Whether the document has unsaved changes
    pub dirty: bool,
    /// User settings
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            document: Document::new(),
            command: DemoLinkCommand::new(),
            path: None,
            dirty: false,
            settings,
        }
    }

    /// Replace the document with a fresh empty one.
    pub fn new_document(&mut self) {
        info!("Creating new document");
        self.document = Document::new();
        self.path = None;
        self.dirty = false;
        self.command.refresh(&self.document);
    }

    /// Load a document from disk, replacing the current one.
    pub fn open_from(&mut self, path: &Path) -> Result<()> {
        self.document = read_document(path)?;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        self.command.refresh(&self.document);
        Ok(())
    }

    /// Save to the bound path. Returns false when the document has no path
    /// yet (the caller should fall back to Save As).
    pub fn save(&mut self) -> Result<bool> {
        let Some(path) = self.path.clone() else {
            return Ok(false);
        };
        self.save_to(&path)?;
        Ok(true)
    }

    /// Save to an explicit path and bind the document to it.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        write_document(path, &self.document)?;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    /// Replace the selection and refresh the command.
    pub fn set_selection(&mut self, selection: Selection) {
        let mut txn = self.document.transaction();
        txn.set_selection(selection);
        txn.commit();
        self.command.refresh(&self.document);
    }

    /// Promote the selection to cover a whole widget.
    pub fn snap_selection_to(&mut self, link: NodeId) {
        self.set_selection(Selection::On(link));
    }

    /// Apply submitted form values through the command.
    pub fn apply_form(&mut self, values: &FieldMap) {
        self.command.execute(&mut self.document, values);
        self.dirty = true;
    }

    /// Recompute command state from the document.
    pub fn refresh_command(&mut self) {
        self.command.refresh(&self.document);
    }

    /// Display name of the current document.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled")
            .to_string()
    }

    /// Window title, with a dirty marker.
    pub fn title(&self) -> String {
        if self.dirty {
            format!("● {} — DemoLink", self.display_name())
        } else {
            format!("{} — DemoLink", self.display_name())
        }
    }

    /// URL of the widget currently in context, if it has a non-empty one.
    pub fn current_url(&self) -> Option<&str> {
        let value = self.command.value.as_ref()?;
        let url = value.get(&crate::demolink::Field::Url)?;
        (!url.is_empty()).then_some(url.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demolink::{ChildKind, Field};

    /// Build a widget inside a document. Returns (state, link, text payload,
    /// extension payload).
    fn state_with_widget(with_extension: bool) -> (AppState, NodeId, NodeId, Option<NodeId>) {
        let mut state = AppState::new(Settings::default());
        let root = state.document.root();
        let mut txn = state.document.transaction();
        let link = txn.create_element(DEMO_LINK);
        let text = txn.create_element(DEMO_LINK_TEXT);
        let text_payload = txn.create_text("Download");
        txn.append(link, root);
        txn.append(text, link);
        txn.append(text_payload, text);
        let ext_payload = with_extension.then(|| {
            let ext = txn.create_element(DEMO_LINK_FILE_EXTENSION);
            let payload = txn.create_text("PDF");
            txn.append(ext, link);
            txn.append(payload, ext);
            payload
        });
        txn.commit();
        (state, link, text_payload, ext_payload)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection context
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_context_outside_without_selection() {
        let (state, ..) = state_with_widget(true);
        assert_eq!(resolve_selection_context(&state.document), SelectionContext::Outside);
    }

    #[test]
    fn test_context_outside_in_plain_paragraph() {
        let (mut state, ..) = state_with_widget(true);
        let root = state.document.root();
        let mut txn = state.document.transaction();
        let para = txn.create_element("p");
        let text = txn.create_text("plain");
        txn.append(para, root);
        txn.append(text, para);
        txn.commit();
        state.set_selection(Selection::Caret(Position::start_of(text)));

        assert_eq!(resolve_selection_context(&state.document), SelectionContext::Outside);
    }

    #[test]
    fn test_context_on_widget_when_selected_directly() {
        let (mut state, link, ..) = state_with_widget(true);
        state.set_selection(Selection::On(link));
        assert_eq!(
            resolve_selection_context(&state.document),
            SelectionContext::OnWidget { link }
        );
    }

    #[test]
    fn test_context_mid_text_does_not_snap() {
        let (mut state, link, text_payload, _) = state_with_widget(true);
        state.set_selection(Selection::Caret(Position {
            parent: text_payload,
            offset: 3,
        }));
        assert_eq!(
            resolve_selection_context(&state.document),
            SelectionContext::InChild { link, snap: false }
        );
    }

    #[test]
    fn test_context_snaps_at_leading_edge_of_text() {
        let (mut state, link, text_payload, _) = state_with_widget(true);
        state.set_selection(Selection::Caret(Position::start_of(text_payload)));
        assert_eq!(
            resolve_selection_context(&state.document),
            SelectionContext::InChild { link, snap: true }
        );
    }

    #[test]
    fn test_context_snaps_at_trailing_edge_of_extension() {
        let (mut state, link, _, ext_payload) = state_with_widget(true);
        let payload = ext_payload.expect("extension present");
        let end = Position::end_of(&state.document, payload);
        state.set_selection(Selection::Caret(end));
        assert_eq!(
            resolve_selection_context(&state.document),
            SelectionContext::InChild { link, snap: true }
        );
    }

    #[test]
    fn test_context_text_trailing_edge_does_not_snap_when_extension_exists() {
        // With an extension slot, the trailing edge belongs to it, not to
        // the text slot.
        let (mut state, link, text_payload, _) = state_with_widget(true);
        let end = Position::end_of(&state.document, text_payload);
        state.set_selection(Selection::Caret(end));
        assert_eq!(
            resolve_selection_context(&state.document),
            SelectionContext::InChild { link, snap: false }
        );
    }

    #[test]
    fn test_context_text_trailing_edge_snaps_without_extension() {
        let (mut state, link, text_payload, _) = state_with_widget(false);
        let end = Position::end_of(&state.document, text_payload);
        state.set_selection(Selection::Caret(end));
        assert_eq!(
            resolve_selection_context(&state.document),
            SelectionContext::InChild { link, snap: true }
        );
    }

    #[test]
    fn test_context_unknown_element_is_outside() {
        // A caret inside markup that is neither widget vocabulary nor inside
        // a widget resolves to Outside instead of faulting.
        let mut state = AppState::new(Settings::default());
        let root = state.document.root();
        let mut txn = state.document.transaction();
        let strong = txn.create_element("strong");
        let text = txn.create_text("bold");
        txn.append(strong, root);
        txn.append(text, strong);
        txn.commit();
        state.set_selection(Selection::Caret(Position { parent: text, offset: 1 }));

        assert_eq!(resolve_selection_context(&state.document), SelectionContext::Outside);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // App state
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_apply_form_marks_dirty_and_refreshes() {
        let mut state = AppState::new(Settings::default());
        let mut values = FieldMap::new();
        values.insert(Field::Url, "http://x".to_string());
        values.insert(Field::Text, "Download".to_string());
        values.insert(Field::FileExtension, String::new());

        state.apply_form(&values);

        assert!(state.dirty);
        assert!(state.command.value.is_some());
        assert_eq!(state.current_url(), Some("http://x"));
    }

    #[test]
    fn test_current_url_absent_outside_widget() {
        let state = AppState::new(Settings::default());
        assert_eq!(state.current_url(), None);
    }

    #[test]
    fn test_title_shows_dirty_marker() {
        let mut state = AppState::new(Settings::default());
        assert_eq!(state.title(), "Untitled — DemoLink");
        state.dirty = true;
        assert_eq!(state.title(), "● Untitled — DemoLink");
    }

    #[test]
    fn test_new_document_resets_state() {
        let mut state = AppState::new(Settings::default());
        let mut values = FieldMap::new();
        values.insert(Field::Url, "http://x".to_string());
        values.insert(Field::Text, "Download".to_string());
        state.apply_form(&values);

        state.new_document();
        assert!(!state.dirty);
        assert!(state.path.is_none());
        assert!(state.command.value.is_none());
        assert!(state.document.children(state.document.root()).is_empty());
    }

    #[test]
    fn test_save_and_reopen_round_trip() {
        let temp = tempfile::TempDir::new().expect("temp dir");
        let path = temp.path().join("doc.html");

        let mut state = AppState::new(Settings::default());
        let mut values = FieldMap::new();
        values.insert(Field::Url, "http://x".to_string());
        values.insert(Field::Text, "Download".to_string());
        values.insert(Field::FileExtension, "PDF".to_string());
        state.apply_form(&values);

        state.save_to(&path).expect("save");
        assert!(!state.dirty);
        assert_eq!(state.display_name(), "doc.html");

        let mut reopened = AppState::new(Settings::default());
        reopened.open_from(&path).expect("open");
        let link = {
            let root = reopened.document.root();
            reopened.document.children(root)[0]
        };
        assert_eq!(reopened.document.name(link), Some(DEMO_LINK));
        let names: Vec<&str> = reopened
            .document
            .children(link)
            .iter()
            .filter_map(|&c| reopened.document.name(c))
            .collect();
        assert_eq!(names, vec![DEMO_LINK_TEXT, DEMO_LINK_FILE_EXTENSION]);
    }

    #[test]
    fn test_snap_selection_promotes_to_widget() {
        let (mut state, link, text_payload, _) = state_with_widget(true);
        state.set_selection(Selection::Caret(Position::start_of(text_payload)));
        state.snap_selection_to(link);

        assert_eq!(state.document.selection(), &Selection::On(link));
        // After snapping, the command sees the widget.
        assert!(state.command.value.is_some());
        assert_eq!(
            resolve_selection_context(&state.document),
            SelectionContext::OnWidget { link }
        );
    }

    #[test]
    fn test_child_kind_order_constant_matches_schema() {
        // The listener's trailing-edge rule relies on the extension slot
        // being the canonical tail.
        assert_eq!(
            ChildKind::CANONICAL_ORDER.last(),
            Some(&ChildKind::FileExtension)
        );
    }
}
