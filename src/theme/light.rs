//! Light Theme Configuration
//!
//! The default appearance: neutral grays on white, with the widget colors
//! matching common link styling.

use eframe::egui::{Color32, Rounding, Stroke, Visuals};

use super::ThemeColors;

/// The light color palette.
pub fn palette() -> ThemeColors {
    ThemeColors {
        background: Color32::from_rgb(250, 250, 250),
        panel: Color32::from_rgb(242, 242, 244),
        border: Color32::from_rgb(180, 180, 190),
        text_primary: Color32::from_rgb(35, 35, 40),
        text_muted: Color32::from_rgb(110, 110, 120),
        link: Color32::from_rgb(25, 100, 210),
        link_background: Color32::from_rgb(232, 240, 252),
        badge_background: Color32::from_rgb(205, 220, 245),
        badge_text: Color32::from_rgb(40, 70, 130),
        selected: Color32::from_rgb(200, 220, 250),
        accent: Color32::from_rgb(50, 120, 220),
        error: Color32::from_rgb(200, 60, 60),
    }
}

/// Create egui Visuals configured for the light theme.
pub fn create_visuals(colors: &ThemeColors) -> Visuals {
    let mut visuals = Visuals::light();

    visuals.panel_fill = colors.background;
    visuals.window_fill = Color32::WHITE;
    visuals.faint_bg_color = colors.panel;

    visuals.hyperlink_color = colors.link;
    visuals.error_fg_color = colors.error;

    visuals.selection.bg_fill = colors.selected;
    visuals.selection.stroke = Stroke::new(1.0, colors.accent);

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text_primary);
    visuals.window_rounding = Rounding::same(8.0);

    visuals
}
