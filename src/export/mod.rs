//! Export functionality for DemoLink
//!
//! This module handles exporting documents to standalone HTML files
//! and copying rendered HTML fragments to the clipboard.

pub mod clipboard;
pub mod html;

pub use clipboard::copy_fragment_to_clipboard;
pub use html::{export_to_html_file, generate_html_document};
