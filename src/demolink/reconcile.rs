//! Child reconciler: minimal edits turning one child slot into the desired
//! state.
//!
//! Called once per [`ChildKind`], in canonical order, from the command's
//! write path. Each call re-scans the element's current children instead of
//! trusting positions computed earlier — a prior call may have detached a
//! sibling, and stale indices would point at the wrong node.

use crate::demolink::schema::ChildKind;
use crate::model::{NodeId, Transaction};

/// Reconcile one child slot of `element` against `desired`.
///
/// Decision table (desired non-empty × slot exists):
/// create a new slot, update the existing one, remove it, or do nothing.
/// A slot that survives is returned *detached*; the caller re-appends the
/// survivors in canonical order, which is what keeps the order fixed no
/// matter which slots an edit touched.
pub fn reconcile_child(
    txn: &mut Transaction<'_>,
    element: NodeId,
    desired: &str,
    kind: ChildKind,
) -> Option<NodeId> {
    let present = !desired.is_empty();

    // Fresh scan on every call; never reuse earlier positions.
    let existing = txn
        .doc()
        .children(element)
        .iter()
        .copied()
        .find(|&child| txn.doc().name(child) == Some(kind.element_name()));

    let slot = match (present, existing) {
        (true, None) => Some(txn.create_element(kind.element_name())),
        (true, Some(slot)) => {
            // Detach now, re-append later, so the slot lands in canonical
            // order even when siblings moved.
            txn.detach(slot);
            Some(slot)
        }
        (false, Some(slot)) => {
            txn.detach(slot);
            None
        }
        (false, None) => None,
    }?;

    // Replace the payload: drop any previous text leaf first so the slot
    // never carries two.
    let old_payload = txn.doc().children(slot).first().copied();
    if let Some(old) = old_payload {
        txn.detach(old);
    }
    let payload = txn.create_text(desired);
    txn.append(payload, slot);

    Some(slot)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
