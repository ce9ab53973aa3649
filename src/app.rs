//! Main application shell for DemoLink
//!
//! Wires the toolbar, the editor pane, and the popover form together, and
//! runs the selection listener: every selection or document change refreshes
//! the command, shows or hides the form, and promotes edge-touching carets
//! to whole-widget selections.

use eframe::egui;
use log::{info, warn};

use crate::config::save_config_silent;
use crate::error::ResultExt;
use crate::export::{copy_fragment_to_clipboard, html::export_to_html_file};
use crate::files::dialogs::{open_document_dialog, save_document_dialog};
use crate::model::Selection;
use crate::state::{resolve_selection_context, AppState, SelectionContext};
use crate::theme::ThemeManager;
use crate::ui::{EditorPane, LinkForm, LinkFormResult, Toolbar, ToolbarAction};

/// The DemoLink application.
pub struct DemoLinkApp {
    state: AppState,
    theme: ThemeManager,
    toolbar: Toolbar,
    pane: EditorPane,
    /// Open popover form, if any
    form: Option<LinkForm>,
    /// Document version last seen by the command refresh
    seen_version: u64,
}

impl DemoLinkApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let theme = ThemeManager::new(state.settings.theme);
        Self {
            state,
            theme,
            toolbar: Toolbar::new(),
            pane: EditorPane::new(),
            form: None,
            seen_version: 0,
        }
    }

    /// Open the form populated from the current command value.
    fn open_form(&mut self) {
        self.state.refresh_command();
        self.form = Some(LinkForm::from_value(
            self.state.command.value.as_ref(),
            &self.state.settings.default_url,
        ));
    }

    /// Close the form. Its state is dropped, so a later open never shows
    /// stale values.
    fn close_form(&mut self) {
        self.form = None;
    }

    /// React to a selection change coming from the editor pane.
    fn on_selection_changed(&mut self, selection: Selection) {
        self.state.set_selection(selection);

        match resolve_selection_context(&self.state.document) {
            SelectionContext::Outside => self.close_form(),
            SelectionContext::OnWidget { .. } => self.open_form(),
            SelectionContext::InChild { link, snap } => {
                if snap {
                    self.state.snap_selection_to(link);
                }
                self.open_form();
            }
        }
    }

    fn handle_toolbar_action(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::New => {
                self.state.new_document();
                self.close_form();
            }
            ToolbarAction::Open => {
                let initial = self.state.path.as_ref().and_then(|p| {
                    p.parent().map(|parent| parent.to_path_buf())
                });
                if let Some(path) = open_document_dialog(initial.as_ref()) {
                    self.state
                        .open_from(&path)
                        .unwrap_or_warn_default((), "Failed to open document");
                    self.close_form();
                }
            }
            ToolbarAction::Save => {
                match self.state.save() {
                    Ok(true) => {}
                    Ok(false) => self.save_as(),
                    Err(e) => warn!("Failed to save document: {}", e),
                }
            }
            ToolbarAction::SaveAs => self.save_as(),
            ToolbarAction::EditDemoLink => self.open_form(),
            ToolbarAction::OpenUrl => {
                if let Some(url) = self.state.current_url() {
                    info!("Opening URL: {}", url);
                    if let Err(e) = open::that(url) {
                        warn!("Failed to open URL: {}", e);
                    }
                }
            }
            ToolbarAction::CopyAsHtml => {
                if let Err(e) = copy_fragment_to_clipboard(&self.state.document) {
                    warn!("Failed to copy HTML: {}", e);
                }
            }
            ToolbarAction::ExportHtml => self.export_html(),
            ToolbarAction::CycleTheme => {
                self.theme.cycle();
                let theme = self.theme.current_theme();
                info!("Theme set to {}", theme.label());
                self.state.settings.theme = theme;
                save_config_silent(&self.state.settings);
            }
        }
    }

    fn save_as(&mut self) {
        let default_name = self.state.display_name();
        if let Some(path) = save_document_dialog(None, Some(&default_name)) {
            if let Err(e) = self.state.save_to(&path) {
                warn!("Failed to save document: {}", e);
            }
        }
    }

    fn export_html(&mut self) {
        let Some(path) = save_document_dialog(None, Some("export.html")) else {
            return;
        };
        let colors = crate::theme::ThemeColors::from_theme(
            self.state.settings.theme,
            &egui::Visuals::default(),
        );
        let title = self.state.display_name();
        if let Err(e) =
            export_to_html_file(&path, &self.state.document, Some(&title), &colors)
        {
            warn!("Failed to export HTML: {}", e);
        } else {
            info!("Exported HTML to {}", path.display());
        }
    }
}

impl eframe::App for DemoLinkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme.apply(ctx);
        let colors = self.theme.colors(ctx);

        // Refresh command state whenever the document changed underneath us.
        let version = self.state.document.version();
        if version != self.seen_version {
            self.seen_version = version;
            self.state.refresh_command();
        }

        // Track the window size for persistence on exit.
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.state.settings.window_size.width = rect.width();
            self.state.settings.window_size.height = rect.height();
        }
        self.state.settings.window_size.maximized =
            ctx.input(|i| i.viewport().maximized.unwrap_or(false));

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.state.title()));

        // Toolbar
        let mut toolbar_action = None;
        egui::TopBottomPanel::top("toolbar")
            .exact_height(self.toolbar.height())
            .show(ctx, |ui| {
                toolbar_action = self.toolbar.show(
                    ui,
                    &colors,
                    self.state.command.value.is_some(),
                    self.state.current_url().is_some(),
                    self.state.dirty,
                );
            });
        if let Some(action) = toolbar_action {
            self.handle_toolbar_action(action);
        }

        // Editor pane
        let mut selection_change = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                selection_change = self.pane.show(
                    ui,
                    &self.state.document,
                    &colors,
                    self.state.settings.font_size,
                );
            });
        });
        if let Some(selection) = selection_change {
            self.on_selection_changed(selection);
        }

        // Popover form. A closed form is dropped, so a later open never
        // shows stale values.
        if let Some(mut form) = self.form.take() {
            match form.show(ctx, &colors) {
                LinkFormResult::None => self.form = Some(form),
                LinkFormResult::Cancelled => {}
                LinkFormResult::Submitted(values) => {
                    self.state.apply_form(&values);
                }
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Saving configuration on exit");
        save_config_silent(&self.state.settings);
    }
}
