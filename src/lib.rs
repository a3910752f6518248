//! Shopping list: a Zellij plugin for jotting down and searching a shopping
//! list.
//!
//! The plugin keeps an in-memory list for the lifetime of the session. New
//! items go to the top; a case-insensitive search narrows what is shown. Two
//! more screens sit behind the bottom bar and side drawer: a static profile
//! and a settings page with a dark mode switch.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Navigation and drawer                            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!              │                          │
//! ┌──────────────────────────┐  ┌──────────────────────┐
//! │ Domain (domain/)         │  │ UI Layer (ui/)       │
//! │ - Items and the store    │  │ - Rendering          │
//! │ - Substring filtering    │  │ - Light/dark themes  │
//! │ - Errors                 │  │ - Components         │
//! └──────────────────────────┘  └──────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/shopping-list.wasm" {
//!         appearance "light"
//!         dark_theme "catppuccin-mocha"
//!         light_theme "~/.config/zellij/themes/my-latte.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use shopping_list::{handle_event, initialize, Config, Event, TextField};
//!
//! let mut state = initialize(&Config::default());
//! for event in [
//!     Event::FocusField(TextField::Draft),
//!     Event::Char('M'),
//!     Event::Char('i'),
//!     Event::Char('l'),
//!     Event::Char('k'),
//!     Event::AddItem,
//! ] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.items()[0].text(), "Milk");
//! # Ok::<(), shopping_list::ShoppingListError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Destination, Event, InputMode, TextField};
pub use domain::{filter_items, Item, ItemStore, Result, ShoppingListError};
pub use ui::Theme;

use std::collections::BTreeMap;
use ui::ThemeSet;

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host appearance at session start; seeds the dark mode flag.
    /// Set with `appearance "dark"` or `appearance "light"`. Default: dark.
    pub system_dark_mode: bool,

    /// Built-in theme name or path to a TOML theme for dark mode.
    pub dark_theme: Option<String>,

    /// Built-in theme name or path to a TOML theme for light mode.
    pub light_theme: Option<String>,

    /// `EnvFilter` directive for traces, e.g. `debug`. Default: `info`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system_dark_mode: true,
            dark_theme: None,
            light_theme: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the plugin's configuration map.
    ///
    /// Unknown `appearance` values keep the dark default and log a warning.
    /// Blank values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shopping_list::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("appearance".to_string(), "Light".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(!config.system_dark_mode);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let system_dark_mode = match value("appearance").map(|v| v.to_ascii_lowercase()) {
            None => defaults.system_dark_mode,
            Some(v) if v == "dark" => true,
            Some(v) if v == "light" => false,
            Some(other) => {
                tracing::warn!(appearance = %other, "unknown appearance, expected dark or light");
                defaults.system_dark_mode
            }
        };

        Self {
            system_dark_mode,
            dark_theme: value("dark_theme"),
            light_theme: value("light_theme"),
            trace_level: value("trace_level"),
        }
    }
}

/// Creates the session state for `config`.
///
/// Themes that fail to load fall back to the built-in palette for that
/// appearance. The list starts empty.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(system_dark_mode = config.system_dark_mode, "initializing shopping list");

    let mut themes = ThemeSet::default();
    if let Some(spec) = &config.dark_theme {
        load_theme_into(&mut themes.dark, spec);
    }
    if let Some(spec) = &config.light_theme {
        load_theme_into(&mut themes.light, spec);
    }

    AppState::new(themes, config.system_dark_mode)
}

fn load_theme_into(slot: &mut Theme, spec: &str) {
    match Theme::resolve(spec) {
        Ok(theme) => *slot = theme,
        Err(e) => {
            tracing::debug!(theme = %spec, error = %e, fallback = %slot.name, "failed to load theme, using built-in");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn appearance_selects_initial_mode() {
        assert!(Config::from_zellij(&map(&[("appearance", "dark")])).system_dark_mode);
        assert!(!Config::from_zellij(&map(&[("appearance", " light ")])).system_dark_mode);
        assert!(Config::from_zellij(&map(&[("appearance", "sepia")])).system_dark_mode);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("dark_theme", "  "), ("trace_level", "")]));
        assert_eq!(config.dark_theme, None);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn initialize_seeds_dark_mode_and_themes() {
        let config = Config {
            system_dark_mode: false,
            light_theme: Some("catppuccin-mocha".to_string()),
            dark_theme: Some("/no/such/theme.toml".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert!(!state.is_dark_mode());
        assert!(state.items().is_empty());
        assert_eq!(state.themes.light.name, "catppuccin-mocha");
        assert_eq!(state.themes.dark.name, "catppuccin-mocha");
        assert_eq!(state.active_theme().name, "catppuccin-mocha");
    }
}
