//! File operations module for DemoLink
//!
//! This module provides functionality for file dialogs and for reading and
//! writing documents as HTML fragments.

pub mod dialogs;

use std::fs;
use std::path::Path;

use log::info;

use crate::demolink::{document_from_html, document_to_html};
use crate::error::{Error, Result};
use crate::model::Document;

/// Read a document from an HTML file.
pub fn read_document(path: &Path) -> Result<Document> {
    let html = fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let doc = document_from_html(&html)?;
    info!("Opened document from {}", path.display());
    Ok(doc)
}

/// Write a document to an HTML file as a fragment.
pub fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let html = document_to_html(doc);
    fs::write(path, html).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("Saved document to {}", path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
