//! HTML Export Generation
//!
//! This module generates complete HTML documents from the editor's document
//! model, with inlined demo-link CSS for standalone viewing.

use std::path::Path;

use crate::demolink::document_to_html;
use crate::model::Document;
use crate::theme::ThemeColors;
use crate::view::escape_text;

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during HTML export.
#[derive(Debug)]
pub enum HtmlExportError {
    /// Failed to write the output file
    IoError(std::io::Error),
}

impl std::fmt::Display for HtmlExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HtmlExportError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for HtmlExportError {}

impl From<std::io::Error> for HtmlExportError {
    fn from(err: std::io::Error) -> Self {
        HtmlExportError::IoError(err)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a complete HTML document from the document model.
///
/// # Arguments
///
/// * `doc` - The document to render
/// * `title` - Optional document title
/// * `theme_colors` - Theme colors for styling
///
/// # Returns
///
/// A complete HTML document as a string.
pub fn generate_html_document(
    doc: &Document,
    title: Option<&str>,
    theme_colors: &ThemeColors,
) -> String {
    let body = document_to_html(doc);
    let theme_css = generate_theme_css(theme_colors);
    let doc_title = title.unwrap_or("Exported Document");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="DemoLink">
    <title>{title}</title>
    <style>
{base_css}

{theme_css}
    </style>
</head>
<body>
    <article class="demo-link-body">
{body}
    </article>
</body>
</html>"#,
        title = escape_text(doc_title),
        base_css = BASE_CSS,
        theme_css = theme_css,
        body = body,
    )
}

/// Export the document to a standalone HTML file.
pub fn export_to_html_file(
    output_path: &Path,
    doc: &Document,
    title: Option<&str>,
    theme_colors: &ThemeColors,
) -> Result<(), HtmlExportError> {
    let html = generate_html_document(doc, title, theme_colors);
    std::fs::write(output_path, html)?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// CSS Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Base CSS for document layout and the demo-link widget.
const BASE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
    font-size: 16px;
    line-height: 1.6;
}

.demo-link-body {
    max-width: 900px;
    margin: 0 auto;
    padding: 32px 24px;
}

.demo-link-body p {
    margin-top: 0;
    margin-bottom: 16px;
}

/* Demo link widget */
a.demo-link {
    display: inline-flex;
    align-items: baseline;
    gap: 0.4em;
    padding: 0.1em 0.4em;
    border-radius: 4px;
    text-decoration: none;
}

a.demo-link:hover .text {
    text-decoration: underline;
}

a.demo-link .text {
    font-weight: 500;
}

a.demo-link .file-extension {
    font-size: 0.75em;
    font-weight: 600;
    padding: 0.1em 0.4em;
    border-radius: 3px;
    text-transform: uppercase;
}
"#;

/// Generate theme-dependent CSS from the palette.
fn generate_theme_css(colors: &ThemeColors) -> String {
    format!(
        r#"body {{
    background-color: {background};
    color: {text};
}}

a.demo-link {{
    color: {link};
    background-color: {link_background};
}}

a.demo-link .file-extension {{
    color: {badge_text};
    background-color: {badge_background};
}}"#,
        background = css_color(colors.background),
        text = css_color(colors.text_primary),
        link = css_color(colors.link),
        link_background = css_color(colors.link_background),
        badge_text = css_color(colors.badge_text),
        badge_background = css_color(colors.badge_background),
    )
}

fn css_color(color: eframe::egui::Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
