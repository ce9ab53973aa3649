//! Popover form for editing a demo link.
//!
//! Three labeled inputs (Text, File extension, URL) with Save and Cancel.
//! The form is populated from the command value when it opens; submitting
//! returns the field map for the command to apply. Text and URL are
//! required; the file extension is optional.

use eframe::egui::{self, Color32, Key, RichText};

use crate::demolink::{Field, FieldMap};
use crate::theme::ThemeColors;

/// Result from showing the link form for one frame.
#[derive(Debug)]
pub enum LinkFormResult {
    /// No action taken (form still open)
    None,
    /// Form was cancelled
    Cancelled,
    /// Form was submitted with these field values
    Submitted(FieldMap),
}

/// State of the open link form.
#[derive(Debug, Clone)]
pub struct LinkForm {
    text_input: String,
    file_extension_input: String,
    url_input: String,
}

impl LinkForm {
    /// Build a form populated from the command value.
    ///
    /// An absent or empty URL is pre-filled with `default_url` so a fresh
    /// widget starts with a sensible placeholder.
    pub fn from_value(value: Option<&FieldMap>, default_url: &str) -> Self {
        let field = |field: Field| -> String {
            value
                .and_then(|map| map.get(&field))
                .cloned()
                .unwrap_or_default()
        };

        let mut url_input = field(Field::Url);
        if url_input.is_empty() {
            url_input = default_url.to_string();
        }

        Self {
            text_input: field(Field::Text),
            file_extension_input: field(Field::FileExtension),
            url_input,
        }
    }

    /// The submitted field values. The class tag is deliberately not part of
    /// the form; the command forces it.
    pub fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        map.insert(Field::Text, self.text_input.trim().to_string());
        map.insert(
            Field::FileExtension,
            self.file_extension_input.trim().to_string(),
        );
        map.insert(Field::Url, self.url_input.trim().to_string());
        map
    }

    /// Whether the required fields are filled in.
    fn is_valid(&self) -> bool {
        !self.text_input.trim().is_empty() && !self.url_input.trim().is_empty()
    }

    /// Show the form and return the result.
    pub fn show(&mut self, ctx: &egui::Context, colors: &ThemeColors) -> LinkFormResult {
        let mut result = LinkFormResult::None;

        // Handle escape key
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            return LinkFormResult::Cancelled;
        }

        egui::Window::new("Demo Link")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 64.0])
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(colors.panel)
                    .stroke(egui::Stroke::new(1.0, colors.border))
                    .rounding(8.0),
            )
            .show(ctx, |ui| {
                ui.set_min_width(320.0);

                ui.add_space(4.0);
                ui.label(Field::Text.label());
                let text_response = ui.add(
                    egui::TextEdit::singleline(&mut self.text_input)
                        .hint_text("Download")
                        .desired_width(300.0),
                );
                if self.text_input.is_empty() {
                    text_response.request_focus();
                }

                ui.add_space(6.0);
                ui.label(Field::FileExtension.label());
                ui.add(
                    egui::TextEdit::singleline(&mut self.file_extension_input)
                        .hint_text("PDF")
                        .desired_width(300.0),
                );

                ui.add_space(6.0);
                ui.label(Field::Url.label());
                ui.add(
                    egui::TextEdit::singleline(&mut self.url_input)
                        .hint_text("https://")
                        .desired_width(300.0),
                );

                if !self.is_valid() {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new("Text and URL are required")
                            .small()
                            .color(colors.text_muted),
                    );
                }

                ui.add_space(10.0);

                // Buttons
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let save_enabled = self.is_valid();
                        let save_button =
                            egui::Button::new(RichText::new("Save").color(Color32::WHITE))
                                .fill(colors.accent);
                        if ui.add_enabled(save_enabled, save_button).clicked()
                            || (save_enabled && ctx.input(|i| i.key_pressed(Key::Enter)))
                        {
                            result = LinkFormResult::Submitted(self.field_map());
                        }

                        ui.add_space(8.0);

                        if ui.button("Cancel").clicked() {
                            result = LinkFormResult::Cancelled;
                        }
                    });
                });

                ui.add_space(4.0);
            });

        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
