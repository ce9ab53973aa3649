//! Dark Theme Configuration
//!
//! Reduced eye strain for low-light environments with enough contrast for
//! readability; the widget colors stay distinguishable from ordinary text.

use eframe::egui::{Color32, Rounding, Stroke, Visuals};

use super::ThemeColors;

/// The dark color palette.
pub fn palette() -> ThemeColors {
    ThemeColors {
        background: Color32::from_rgb(30, 30, 34),
        panel: Color32::from_rgb(40, 40, 45),
        border: Color32::from_rgb(70, 70, 80),
        text_primary: Color32::from_rgb(220, 220, 225),
        text_muted: Color32::from_rgb(150, 150, 160),
        link: Color32::from_rgb(120, 180, 255),
        link_background: Color32::from_rgb(45, 55, 70),
        badge_background: Color32::from_rgb(70, 90, 120),
        badge_text: Color32::from_rgb(210, 225, 245),
        selected: Color32::from_rgb(60, 80, 110),
        accent: Color32::from_rgb(100, 150, 230),
        error: Color32::from_rgb(230, 100, 100),
    }
}

/// Create egui Visuals configured for the dark theme.
pub fn create_visuals(colors: &ThemeColors) -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.panel;
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
