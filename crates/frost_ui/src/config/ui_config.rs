//! # Overlay Configuration
//!
//! Colors and default geometry for windows and widgets. A single [`UIConfig`]
//! is owned by the [`UIManager`](crate::ui::UIManager) and read during every
//! draw pass; there is no process-wide color table.
//!
//! Every field has a default, so a config file only needs the values it changes:
//!
//! ```toml
//! checkbox_padding = 8.0
//!
//! [window]
//! top_border_thickness = 24.0
//!
//! [colors]
//! button_hover = [0.2, 0.4, 0.8, 1.0]
//! ```

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::math::{rgba8, Vec2, Vec4};

/// Flat color table, one entry per widget state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Window client area
    pub window_background: Vec4,
    /// Window border strips and title bar
    pub window_border: Vec4,
    /// Window title text
    pub window_title_text: Vec4,
    /// Overlay painted over the title bar of unfocused windows
    pub window_inactive_overlay: Vec4,
    /// Close control, resting
    pub close_button_normal: Vec4,
    /// Close control, hovered
    pub close_button_hover: Vec4,
    /// Close control, pressed
    pub close_button_click: Vec4,
    /// The "X" glyph of the close control
    pub close_button_glyph: Vec4,
    /// Button body, resting
    pub button_normal: Vec4,
    /// Button body, hovered
    pub button_hover: Vec4,
    /// Button body, pressed or toggled on
    pub button_click: Vec4,
    /// Checkbox box
    pub checkbox_normal: Vec4,
    /// Checkbox inner fill while hovered
    pub checkbox_hover: Vec4,
    /// Checkbox inner fill while checked
    pub checkbox_active: Vec4,
    /// Default text color for new elements
    pub text: Vec4,
}

impl Default for ColorScheme {
    fn default() -> Self {
        let grey = rgba8(128, 128, 128, 255);
        let light = rgba8(150, 150, 150, 255);
        let dark = rgba8(100, 100, 100, 255);
        let black = rgba8(0, 0, 0, 255);

        Self {
            window_background: rgba8(255, 255, 255, 255),
            window_border: grey,
            window_title_text: black,
            window_inactive_overlay: rgba8(100, 100, 100, 150),
            close_button_normal: grey,
            close_button_hover: light,
            close_button_click: dark,
            close_button_glyph: black,
            button_normal: grey,
            button_hover: light,
            button_click: dark,
            checkbox_normal: grey,
            checkbox_hover: light,
            checkbox_active: dark,
            text: rgba8(255, 255, 255, 255),
        }
    }
}

/// Default window chrome geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowStyle {
    /// Left, right and bottom border width in pixels
    pub border_thickness: f32,
    /// Title bar height in pixels
    pub top_border_thickness: f32,
    /// Close control width as a fraction of the window width
    pub close_button_fraction: f32,
}

impl Default for WindowStyle {
    fn default() -> Self {
        Self {
            border_thickness: 5.0,
            top_border_thickness: 20.0,
            close_button_fraction: 0.1,
        }
    }
}

/// Top-level overlay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Color table used by every draw call
    pub colors: ColorScheme,
    /// Geometry applied to newly created windows
    pub window: WindowStyle,
    /// Gap between a checkbox and its label, applied to new checkboxes
    pub checkbox_padding: f32,
    /// Text scale applied to new elements
    pub text_scale: Vec2,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            colors: ColorScheme::default(),
            window: WindowStyle::default(),
            checkbox_padding: 5.0,
            text_scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Config for UIConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let source = r#"
            checkbox_padding = 8.0

            [window]
            top_border_thickness = 24.0

            [colors]
            button_hover = [0.2, 0.4, 0.8, 1.0]
        "#;

        let config: UIConfig = toml::from_str(source).unwrap();

        assert_relative_eq!(config.checkbox_padding, 8.0);
        assert_relative_eq!(config.window.top_border_thickness, 24.0);
        assert_relative_eq!(config.window.border_thickness, 5.0);
        assert_eq!(config.colors.button_hover, Vec4::new(0.2, 0.4, 0.8, 1.0));
        assert_eq!(config.colors.button_normal, ColorScheme::default().button_normal);
        assert_eq!(config.text_scale, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_ron_config() {
        let source = "(window: (border_thickness: 2.0), text_scale: (2.0, 2.0))";
        let config: UIConfig = ron::from_str(source).unwrap();

        assert_relative_eq!(config.window.border_thickness, 2.0);
        assert_relative_eq!(config.window.close_button_fraction, 0.1);
        assert_eq!(config.text_scale, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = UIConfig::default().save_to_file("overlay.json");
        assert!(matches!(result, Err(crate::config::ConfigError::UnsupportedFormat(_))));
    }
}
