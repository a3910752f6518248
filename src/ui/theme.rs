//! Theme management and ANSI escape sequence generation.
//!
//! The plugin carries two palettes at once, one for dark mode and one for
//! light mode, bundled in a [`ThemeSet`]. The session's dark mode flag picks
//! which one is drawn. Built-in palettes are Catppuccin variants; custom ones
//! are loaded from TOML files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark (default dark palette)
//! - `catppuccin-latte`: Light (default light palette)
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "#1e1e2e"
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#6c7086"
//! input_focused_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! nav_active_fg = "#1e1e2e"
//! nav_active_bg = "#89b4fa"
//! drawer_bg = "#313244"
//! switch_on = "#a6e3a1"
//! switch_off = "#6c7086"
//! ```

use crate::domain::error::{Result, ShoppingListError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const MOCHA: &str = include_str!("../../themes/catppuccin-mocha.toml");
const LATTE: &str = include_str!("../../themes/catppuccin-latte.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings such as `"#cdd6f4"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Screen background. Painted behind every cell so light and dark mode
    /// look different regardless of the terminal's own colors.
    pub background: String,

    /// Top bar text.
    pub header_fg: String,
    /// Optional top bar background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected list row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer and secondary text.
    pub text_dim: String,

    /// Horizontal separators.
    pub border: String,

    /// Frame of an unfocused text field.
    pub input_border: String,
    /// Frame of the field receiving keys.
    pub input_focused_border: String,

    /// Search match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Current entry in the bottom navigation bar.
    pub nav_active_fg: String,
    pub nav_active_bg: String,

    /// Side drawer panel background.
    pub drawer_bg: String,

    /// Dark mode switch in its on and off positions.
    pub switch_on: String,
    pub switch_off: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopping_list::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => MOCHA,
            "catppuccin-latte" => LATTE,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShoppingListError::Io`] if the file cannot be read and
    /// [`ShoppingListError::Theme`] if its content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Resolves a configured theme: a built-in name, or otherwise a file path.
    ///
    /// # Errors
    ///
    /// Fails when `spec` is neither a built-in name nor a readable theme file.
    pub fn resolve(spec: &str) -> Result<Self> {
        if let Some(theme) = Self::from_name(spec) {
            return Ok(theme);
        }
        let path = crate::infrastructure::expand_tilde(spec);
        if !Path::new(&path).exists() {
            return Err(ShoppingListError::Theme(format!(
                "unknown theme '{spec}' and no such file"
            )));
        }
        Self::from_file(path)
    }

    /// Parses `#rrggbb` (the `#` is optional). Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground color escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Clears styling, then re-applies the screen background and normal text
    /// color. Components use this between spans instead of a bare reset.
    #[must_use]
    pub fn restore(&self) -> String {
        format!(
            "{}{}{}",
            Self::reset(),
            Self::bg(&self.colors.background),
            Self::fg(&self.colors.text_normal)
        )
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the unit tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

/// The palettes for both appearances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub dark: Theme,
    pub light: Theme,
}

impl Default for ThemeSet {
    /// Mocha for dark mode, Latte for light mode.
    ///
    /// # Panics
    ///
    /// Panics if an embedded theme fails to parse, which the unit tests rule out.
    fn default() -> Self {
        Self {
            dark: Theme::default(),
            light: Theme::from_name("catppuccin-latte")
                .expect("Built-in catppuccin-latte theme should always parse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtins_parse() {
        let set = ThemeSet::default();
        assert_eq!(set.dark.name, "catppuccin-mocha");
        assert_eq!(set.light.name, "catppuccin-latte");
        assert_ne!(set.dark.colors.text_normal, set.light.colors.text_normal);
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
        assert_eq!(Theme::bg("ff0000"), "\u{1b}[48;2;255;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zz0000"), "\u{1b}[38;2;255;0;0m");
    }

    #[test]
    fn resolve_prefers_builtin_names() {
        assert_eq!(Theme::resolve("catppuccin-latte").unwrap().name, "catppuccin-latte");
    }

    #[test]
    fn resolve_loads_files_and_reports_failures() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "custom".to_string();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let loaded = Theme::resolve(file.path().to_str().unwrap()).unwrap();
        assert_eq!(loaded, custom);

        assert!(matches!(
            Theme::resolve("does-not-exist"),
            Err(ShoppingListError::Theme(_))
        ));

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        write!(broken, "name = \"half\"").unwrap();
        assert!(matches!(
            Theme::from_file(broken.path()),
            Err(ShoppingListError::Theme(_))
        ));
    }
}
