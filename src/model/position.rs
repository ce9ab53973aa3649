//! Positions between nodes and the "touching" equivalence.

use crate::model::{Document, NodeId};

/// A place in the tree: before the child at `offset` within `parent`.
///
/// For an element parent the offset counts children; for a text parent it
/// counts characters of the payload. `offset == len` addresses the position
/// after the last child (or character).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub parent: NodeId,
    pub offset: usize,
}

impl Position {
    /// Position immediately before a node, in its parent.
    pub fn before(doc: &Document, node: NodeId) -> Option<Position> {
        let parent = doc.parent(node)?;
        let offset = doc.index_in_parent(node)?;
        Some(Position { parent, offset })
    }

    /// Position immediately after a node, in its parent.
    pub fn after(doc: &Document, node: NodeId) -> Option<Position> {
        let parent = doc.parent(node)?;
        let offset = doc.index_in_parent(node)? + 1;
        Some(Position { parent, offset })
    }

    /// Position at the start of a node's content.
    pub fn start_of(node: NodeId) -> Position {
        Position {
            parent: node,
            offset: 0,
        }
    }

    /// Position at the end of a node's content.
    pub fn end_of(doc: &Document, node: NodeId) -> Position {
        Position {
            parent: node,
            offset: boundary_len(doc, node),
        }
    }

    /// Whether no content lies between this position and `other`.
    ///
    /// Two positions touch when they collapse to the same spot once boundary
    /// hops are ignored — e.g. the position before an element touches the
    /// position at offset 0 inside it, at any nesting depth.
    pub fn is_touching(&self, doc: &Document, other: &Position) -> bool {
        let ours = equivalence_set(doc, *self);
        let theirs = equivalence_set(doc, *other);
        ours.iter().any(|p| theirs.contains(p))
    }
}

/// Number of offset units inside a node: children for elements, characters
/// for text leaves.
fn boundary_len(doc: &Document, node: NodeId) -> usize {
    match doc.text_data(node) {
        Some(data) => data.chars().count(),
        None => doc.children(node).len(),
    }
}

/// All positions equal to `pos` up to boundary hops: the position itself plus
/// every ancestor-side position reached by walking out of a start or end
/// boundary.
fn equivalence_set(doc: &Document, pos: Position) -> Vec<Position> {
    let mut set = vec![pos];

    // Walk out of leading boundaries: offset 0 inside a node equals the
    // position before that node.
    let mut current = pos;
    while current.offset == 0 {
        let Some(outer) = Position::before(doc, current.parent) else {
            break;
        };
        set.push(outer);
        current = outer;
    }

    // Walk out of trailing boundaries likewise.
    let mut current = pos;
    while current.offset == boundary_len(doc, current.parent) {
        let Some(outer) = Position::after(doc, current.parent) else {
            break;
        };
        set.push(outer);
        current = outer;
    }

    set
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
