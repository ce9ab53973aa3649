//! Toolbar UI Component for DemoLink
//!
//! This module implements the top toolbar with icon-based controls organized
//! into logical groups: file operations, the demo-link button, export, and
//! settings.

use eframe::egui::{self, Button, RichText, Ui};

use crate::theme::ThemeColors;

/// Height of the toolbar.
const TOOLBAR_HEIGHT: f32 = 36.0;

/// Actions that can be triggered from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    // File operations
    /// Create a new empty document
    New,
    /// Open file dialog
    Open,
    /// Save current document
    Save,
    /// Save As dialog
    SaveAs,

    // Widget operations
    /// Open the demo-link form for the widget in context (or a new one)
    EditDemoLink,
    /// Open the current widget's URL in the system browser
    OpenUrl,

    // Export operations
    /// Copy rendered HTML to clipboard
    CopyAsHtml,
    /// Export as a standalone HTML file
    ExportHtml,

    // Settings
    /// Cycle through themes
    CycleTheme,
}

/// Toolbar state and rendering.
#[derive(Debug, Clone, Default)]
pub struct Toolbar;

impl Toolbar {
    pub fn new() -> Self {
        Self
    }

    /// Get the toolbar height.
    pub fn height(&self) -> f32 {
        TOOLBAR_HEIGHT
    }

    /// Render the toolbar and return any triggered action.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `colors` - Current theme colors for styling
    /// * `link_active` - Whether the selection is inside a demo link
    ///   (highlights the widget button, the way a toggled tool reads)
    /// * `can_open_url` - Whether the widget in context has a URL to open
    /// * `can_save` - Whether the document has unsaved changes
    pub fn show(
        &self,
        ui: &mut Ui,
        colors: &ThemeColors,
        link_active: bool,
        can_open_url: bool,
        can_save: bool,
    ) -> Option<ToolbarAction> {
        let mut action = None;

        ui.horizontal_centered(|ui| {
            ui.add_space(6.0);

            // File group
            if ui.button("New").on_hover_text("New document").clicked() {
                action = Some(ToolbarAction::New);
            }
            if ui.button("Open").on_hover_text("Open document").clicked() {
                action = Some(ToolbarAction::Open);
            }
            if ui
                .add_enabled(can_save, Button::new("Save"))
                .on_hover_text("Save document")
                .clicked()
            {
                action = Some(ToolbarAction::Save);
            }
            if ui.button("Save As").clicked() {
                action = Some(ToolbarAction::SaveAs);
            }

            ui.separator();

            // Widget group; the demo-link action itself is always enabled.
            let link_label = RichText::new("Demo Link").color(if link_active {
                colors.accent
            } else {
                colors.text_primary
            });
            if ui
                .add(Button::new(link_label).selected(link_active))
                .on_hover_text("Insert or edit a demo link")
                .clicked()
            {
                action = Some(ToolbarAction::EditDemoLink);
            }
            if ui
                .add_enabled(can_open_url, Button::new("Open URL"))
                .on_hover_text("Open the link in your browser")
                .clicked()
            {
                action = Some(ToolbarAction::OpenUrl);
            }

            ui.separator();

            // Export group
            if ui
                .button("Copy HTML")
                .on_hover_text("Copy rendered HTML to clipboard")
                .clicked()
            {
                action = Some(ToolbarAction::CopyAsHtml);
            }
            if ui
                .button("Export")
                .on_hover_text("Export as standalone HTML")
                .clicked()
            {
                action = Some(ToolbarAction::ExportHtml);
            }

            // Settings, right-aligned
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(6.0);
                if ui.button("Theme").on_hover_text("Cycle theme").clicked() {
                    action = Some(ToolbarAction::CycleTheme);
                }
            });
        });

        action
    }
}
