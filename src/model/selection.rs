//! Document selection: nothing, a caret, or a single selected element.

use crate::model::{Document, NodeId, Position};

/// The selection state stored on a [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No selection (e.g. a freshly created document).
    #[default]
    None,
    /// A collapsed caret at a position.
    Caret(Position),
    /// A single element selected as a whole.
    On(NodeId),
}

impl Selection {
    /// The element directly designated by the selection, if any.
    pub fn selected_element(&self) -> Option<NodeId> {
        match self {
            Selection::On(id) => Some(*id),
            _ => None,
        }
    }

    /// First position of the selection's primary range.
    pub fn first_position(&self, doc: &Document) -> Option<Position> {
        match self {
            Selection::None => None,
            Selection::Caret(pos) => Some(*pos),
            Selection::On(id) => Position::before(doc, *id),
        }
    }

    /// Nearest element containing the selection's primary range.
    ///
    /// For a caret inside a text leaf this is the leaf's parent element; for
    /// a selected element it is that element's parent (the range wrapping the
    /// element lives there).
    pub fn common_ancestor(&self, doc: &Document) -> Option<NodeId> {
        match self {
            Selection::None => None,
            Selection::Caret(pos) => {
                if doc.is_text(pos.parent) {
                    doc.parent(pos.parent)
                } else {
                    Some(pos.parent)
                }
            }
            Selection::On(id) => doc.parent(*id),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
