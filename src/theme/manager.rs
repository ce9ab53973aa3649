//! Theme Manager for DemoLink
//!
//! Centralized theme management: storing the current preference, converting
//! it to egui `Visuals`, and applying it to the context when it changes.

use eframe::egui::Context;
use log::info;

use super::ThemeColors;
use crate::config::Theme;

/// Manages theme state and applies themes to the egui context.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Current theme setting (Light, Dark, or System)
    current_theme: Theme,
    /// Whether the theme needs to be reapplied
    needs_apply: bool,
}

impl ThemeManager {
    /// Create a new ThemeManager with the given initial theme.
    pub fn new(theme: Theme) -> Self {
        info!("ThemeManager initialized with theme: {:?}", theme);
        Self {
            current_theme: theme,
            needs_apply: true,
        }
    }

    /// Get the current theme setting.
    pub fn current_theme(&self) -> Theme {
        self.current_theme
    }

    /// Set the theme and mark for reapplication.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme != theme {
            info!("Theme changed from {:?} to {:?}", self.current_theme, theme);
            self.current_theme = theme;
            self.needs_apply = true;
        }
    }

    /// Advance to the next theme in the cycle.
    pub fn cycle(&mut self) {
        self.set_theme(self.current_theme.next());
    }

    /// Resolve the current palette against the context.
    pub fn colors(&self, ctx: &Context) -> ThemeColors {
        ThemeColors::from_theme(self.current_theme, &ctx.style().visuals)
    }

    /// Apply the theme's visuals to the context if it changed since the last
    /// application.
    pub fn apply(&mut self, ctx: &Context) {
        if !self.needs_apply {
            return;
        }
        let visuals = self.colors(ctx).to_visuals();
        ctx.set_visuals(visuals);
        self.needs_apply = false;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
