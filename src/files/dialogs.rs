//! Native file dialog integration using the rfd crate
//!
//! This module provides functions to open native file picker dialogs
//! for opening and saving documents.

use rfd::FileDialog;
use std::path::PathBuf;

/// File extension filters for supported document types.
const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Opens a native file dialog for selecting a document.
///
/// Returns `Some(PathBuf)` if a file was selected, `None` if cancelled.
pub fn open_document_dialog(initial_dir: Option<&PathBuf>) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Open Document")
        .add_filter("HTML Files", HTML_EXTENSIONS)
        .add_filter("All Files", &["*"]);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}

/// Opens a native save dialog for saving a document.
///
/// Returns `Some(PathBuf)` if a location was selected, `None` if cancelled.
pub fn save_document_dialog(
    initial_dir: Option<&PathBuf>,
    default_name: Option<&str>,
) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Save Document")
        .add_filter("HTML Files", HTML_EXTENSIONS)
        .add_filter("All Files", &["*"]);

    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }

    if let Some(name) = default_name {
        dialog = dialog.set_file_name(name);
    }

    dialog.save_file()
}
