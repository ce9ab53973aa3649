//! Clipboard Operations for HTML Export
//!
//! This module provides cross-platform clipboard functionality for copying
//! HTML content to the system clipboard using the arboard crate.

use arboard::Clipboard;

use crate::demolink::document_to_html;
use crate::model::Document;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// Failed to access clipboard
    AccessError(String),
    /// Failed to set clipboard content
    WriteError(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::AccessError(msg) => write!(f, "Clipboard access error: {}", msg),
            ClipboardError::WriteError(msg) => write!(f, "Clipboard write error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Copy the rendered document HTML to the system clipboard.
///
/// The HTML fragment is set as plain text so it can be pasted into source
/// editors and CMS fields as-is.
pub fn copy_fragment_to_clipboard(doc: &Document) -> Result<(), ClipboardError> {
    let html = document_to_html(doc);

    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;
    clipboard
        .set_text(html)
        .map_err(|e| ClipboardError::WriteError(e.to_string()))?;

    Ok(())
}
