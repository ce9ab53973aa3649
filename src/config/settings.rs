//! User settings and preferences for DemoLink
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    /// Cycle to the next theme (Light → Dark → System → Light).
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    /// Get a display label for the theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position, persisted across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
    /// Saved horizontal position, if the window manager reported one
    pub x: Option<f32>,
    /// Saved vertical position, if the window manager reported one
    pub y: Option<f32>,
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 620.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// All user-configurable options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color theme
    pub theme: Theme,
    /// Window dimensions and position
    pub window_size: WindowSize,
    /// Value pre-filled into the URL field when editing a widget without one
    pub default_url: String,
    /// Editor font size in points
    pub font_size: f32,
}

impl Settings {
    /// Smallest usable editor font size.
    pub const MIN_FONT_SIZE: f32 = 8.0;
    /// Largest usable editor font size.
    pub const MAX_FONT_SIZE: f32 = 32.0;

    /// Parse settings from JSON, clamping out-of-range numeric values
    /// instead of failing.
    pub fn from_json_sanitized(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Clamp numeric values into their valid ranges.
    pub fn sanitize(&mut self) {
        self.font_size = self.font_size.clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);
        if self.window_size.width < 400.0 {
            self.window_size.width = WindowSize::default().width;
        }
        if self.window_size.height < 300.0 {
            self.window_size.height = WindowSize::default().height;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            window_size: WindowSize::default(),
            default_url: "#".to_string(),
            font_size: 14.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.default_url, "#");
        assert_eq!(settings.font_size, 14.0);
    }

    #[test]
    fn test_theme_cycle() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::System);
        assert_eq!(Theme::System.next(), Theme::Light);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }

    #[test]
    fn test_partial_json_uses_defaults_for_missing() {
        let settings: Settings = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.default_url, "#");
        assert_eq!(settings.font_size, 14.0);
    }

    #[test]
    fn test_sanitize_clamps_font_size() {
        let settings = Settings::from_json_sanitized(r#"{"font_size": 4.0}"#).unwrap();
        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);

        let settings = Settings::from_json_sanitized(r#"{"font_size": 90.0}"#).unwrap();
        assert_eq!(settings.font_size, Settings::MAX_FONT_SIZE);
    }

    #[test]
    fn test_sanitize_resets_tiny_window() {
        let settings = Settings::from_json_sanitized(
            r#"{"window_size": {"width": 10.0, "height": 10.0, "maximized": false}}"#,
        )
        .unwrap();
        assert_eq!(settings.window_size.width, WindowSize::default().width);
        assert_eq!(settings.window_size.height, WindowSize::default().height);
    }

    #[test]
    fn test_settings_round_trip() {
        let original = Settings {
            theme: Theme::System,
            default_url: "https://example.com/".to_string(),
            font_size: 18.0,
            ..Settings::default()
        };
        let json = serde_json::to_string_pretty(&original).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(original, loaded);
    }
}
