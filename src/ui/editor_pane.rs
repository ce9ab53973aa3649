//! Document editor pane.
//!
//! Renders the document's paragraphs, plain text, and inline demo-link
//! widgets, and turns clicks into selection changes. Layout fidelity is not
//! the point — the pane exists to drive the selection listener and the
//! command; the authoritative rendering is the HTML the converters produce.

use eframe::egui::{self, Frame, Response, RichText, Rounding, Sense, Stroke, Ui};

use crate::demolink::{ChildKind, DEMO_LINK};
use crate::model::{Document, NodeId, Position, Selection};
use crate::theme::ThemeColors;

/// The editor pane widget.
#[derive(Debug, Clone, Default)]
pub struct EditorPane;

impl EditorPane {
    pub fn new() -> Self {
        Self
    }

    /// Render the document. Returns the new selection when the user clicked
    /// something, `None` otherwise.
    pub fn show(
        &self,
        ui: &mut Ui,
        doc: &Document,
        colors: &ThemeColors,
        font_size: f32,
    ) -> Option<Selection> {
        let mut clicked = None;

        if doc.children(doc.root()).is_empty() {
            ui.add_space(16.0);
            ui.label(
                RichText::new("Empty document — use the Demo Link button to insert a widget.")
                    .color(colors.text_muted)
                    .size(font_size),
            );
            return None;
        }

        for &node in doc.children(doc.root()) {
            ui.horizontal_wrapped(|ui| {
                self.render_node(ui, doc, node, colors, font_size, &mut clicked);
            });
            ui.add_space(6.0);
        }

        clicked
    }

    fn render_node(
        &self,
        ui: &mut Ui,
        doc: &Document,
        node: NodeId,
        colors: &ThemeColors,
        font_size: f32,
        clicked: &mut Option<Selection>,
    ) {
        if let Some(text) = doc.text_data(node) {
            let response = ui.add(
                egui::Label::new(
                    RichText::new(text)
                        .color(colors.text_primary)
                        .size(font_size),
                )
                .sense(Sense::click()),
            );
            if response.clicked() {
                *clicked = Some(Selection::Caret(Position::start_of(node)));
            }
            return;
        }

        if doc.name(node) == Some(DEMO_LINK) {
            self.render_widget(ui, doc, node, colors, font_size, clicked);
            return;
        }

        // Generic elements render their content inline.
        for &child in doc.children(node) {
            self.render_node(ui, doc, child, colors, font_size, clicked);
        }
    }

    /// Render one demo-link widget: display text plus the extension badge,
    /// framed, highlighted while selected.
    fn render_widget(
        &self,
        ui: &mut Ui,
        doc: &Document,
        link: NodeId,
        colors: &ThemeColors,
        font_size: f32,
        clicked: &mut Option<Selection>,
    ) {
        let is_selected = matches!(doc.selection(), Selection::On(id) if *id == link);

        let fill = if is_selected {
            colors.selected
        } else {
            colors.link_background
        };
        let stroke = if is_selected {
            Stroke::new(1.5, colors.accent)
        } else {
            Stroke::new(1.0, colors.border)
        };

        let frame_response = Frame::none()
            .fill(fill)
            .stroke(stroke)
            .rounding(Rounding::same(4.0))
            .inner_margin(egui::Margin::symmetric(6.0, 2.0))
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                for &child in doc.children(link) {
                    let Some(kind) = doc.name(child).and_then(ChildKind::from_element_name)
                    else {
                        continue;
                    };
                    let response = match kind {
                        ChildKind::Text => self.slot_label(
                            ui,
                            doc.deep_text(child),
                            colors.link,
                            font_size,
                            false,
                            colors,
                        ),
                        ChildKind::FileExtension => self.slot_label(
                            ui,
                            doc.deep_text(child).to_uppercase(),
                            colors.badge_text,
                            font_size * 0.75,
                            true,
                            colors,
                        ),
                    };
                    if response.clicked() {
                        // A click lands a caret at the slot's boundary; the
                        // selection listener decides whether that snaps to
                        // the whole widget.
                        *clicked = Some(self.caret_for_click(doc, child, kind));
                    }
                }
            })
            .response;

        // Clicks on the frame itself select the widget as a whole.
        let frame_clicked = ui
            .interact(frame_response.rect, frame_response.id, Sense::click())
            .clicked();
        if frame_clicked && clicked.is_none() {
            *clicked = Some(Selection::On(link));
        }
    }

    fn slot_label(
        &self,
        ui: &mut Ui,
        text: String,
        color: egui::Color32,
        size: f32,
        badge: bool,
        colors: &ThemeColors,
    ) -> Response {
        let rich = RichText::new(text).color(color).size(size);
        if badge {
            Frame::none()
                .fill(colors.badge_background)
                .rounding(Rounding::same(3.0))
                .inner_margin(egui::Margin::symmetric(4.0, 1.0))
                .show(ui, |ui| ui.add(egui::Label::new(rich).sense(Sense::click())))
                .inner
        } else {
            ui.add(egui::Label::new(rich).sense(Sense::click()))
        }
    }

    /// Caret placed by clicking a slot: at the start of the text slot's
    /// payload, at the end of the badge's. Both land on a widget edge, which
    /// the listener's border rule resolves to the whole widget.
    fn caret_for_click(&self, doc: &Document, slot: NodeId, kind: ChildKind) -> Selection {
        let Some(&payload) = doc.children(slot).first() else {
            return Selection::Caret(Position::start_of(slot));
        };
        match kind {
            ChildKind::Text => Selection::Caret(Position::start_of(payload)),
            ChildKind::FileExtension => Selection::Caret(Position::end_of(doc, payload)),
        }
    }
}
