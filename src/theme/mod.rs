//! Theme System for DemoLink
//!
//! This module provides the color palettes used for UI styling: base and
//! text colors plus the demo-link widget colors, selected at runtime through
//! the `Theme` enum in `config::settings` (Light/Dark/System).
//!
//! - `light.rs` / `dark.rs` - palette definitions and egui `Visuals`
//! - `manager.rs` - theme switching and application to the egui context

pub mod dark;
pub mod light;
pub mod manager;

pub use manager::ThemeManager;

use eframe::egui::{Color32, Visuals};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Color palette for the application and the demo-link widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    /// Main window background
    pub background: Color32,
    /// Panel and toolbar background
    pub panel: Color32,
    /// Subtle borders between panels and around widgets
    pub border: Color32,
    /// Primary text
    pub text_primary: Color32,
    /// Secondary/muted text
    pub text_muted: Color32,
    /// Demo-link display text
    pub link: Color32,
    /// Demo-link widget background
    pub link_background: Color32,
    /// File-extension badge background
    pub badge_background: Color32,
    /// File-extension badge text
    pub badge_text: Color32,
    /// Background of the selected widget
    pub selected: Color32,
    /// Accent for active controls
    pub accent: Color32,
    /// Error/destructive color
    pub error: Color32,
}

impl ThemeColors {
    /// Create theme colors for the given theme variant.
    ///
    /// `System` resolves against the dark-mode state egui detected.
    pub fn from_theme(theme: crate::config::Theme, visuals: &Visuals) -> Self {
        match theme {
            crate::config::Theme::Dark => Self::dark(),
            crate::config::Theme::Light => Self::light(),
            crate::config::Theme::System => {
                if visuals.dark_mode {
                    Self::dark()
                } else {
                    Self::light()
                }
            }
        }
    }

    /// Get the light theme colors.
    pub fn light() -> Self {
        light::palette()
    }

    /// Get the dark theme colors.
    pub fn dark() -> Self {
        dark::palette()
    }

    /// Check if this is a dark theme (useful for conditional styling).
    pub fn is_dark(&self) -> bool {
        self.background.r() < 128
    }

    /// Convert theme colors to egui Visuals for UI styling.
    pub fn to_visuals(&self) -> Visuals {
        if self.is_dark() {
            dark::create_visuals(self)
        } else {
            light::create_visuals(self)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
