//! Zellij plugin entry point.
//!
//! Translates Zellij key presses into library events, runs them through
//! [`handle_event`] and carries out the returned actions. All state lives in
//! the library's `AppState`.
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`, `Ctrl+n`/`Ctrl+p`: Move the selection
//! - `a`/`i`: Type a new item
//! - `/`: Type a search query
//! - `1`/`2`: Shopping list / profile
//! - `m`: Open the menu drawer
//! - `t`/`Space`: Toggle dark mode (settings screen)
//! - `Esc`: Go back
//! - `q`: Hide the plugin
//!
//! Drawer open:
//! - `Enter`/`s`: Settings
//! - `Esc`/`m`: Close the drawer
//!
//! Typing in a field:
//! - `Enter`: Add the item (draft) or stop searching (search)
//! - `Backspace`: Delete a character
//! - `Ctrl+u`: Clear the field
//! - `Esc`: Stop typing

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use shopping_list::{handle_event, Action, Config, Destination, Event, InputMode, TextField};

register_plugin!(State);

struct State {
    app: shopping_list::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: shopping_list::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        shopping_list::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        self.app = shopping_list::initialize(&config);
        subscribe(&[EventType::Key]);
        tracing::debug!(dark_mode = self.app.is_dark_mode(), "plugin loaded");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };
        let _guard = tracing::debug_span!("plugin_update", key = ?key.bare_key).entered();

        let Some(our_event) = self.map_key_event(&key) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        shopping_list::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        if let InputMode::Editing(field) = self.app.input_mode {
            return Self::map_editing_key(field, key, ctrl);
        }
        if self.app.is_drawer_open() {
            return Self::map_drawer_key(key);
        }

        let on_list = self.app.destination() == Destination::List;
        Some(match key.bare_key {
            BareKey::Char('n') if ctrl && on_list => Event::KeyDown,
            BareKey::Char('p') if ctrl && on_list => Event::KeyUp,
            BareKey::Down | BareKey::Char('j') if on_list => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') if on_list => Event::KeyUp,
            BareKey::Char('a' | 'i') => Event::FocusField(TextField::Draft),
            BareKey::Char('/') => Event::FocusField(TextField::Search),
            BareKey::Char('1') => Event::Navigate(Destination::List),
            BareKey::Char('2') => Event::Navigate(Destination::Profile),
            BareKey::Char('m') => Event::OpenDrawer,
            BareKey::Char('t' | ' ') if self.app.destination() == Destination::Settings => {
                Event::ToggleDarkMode
            }
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_drawer_key(key: &KeyWithModifier) -> Option<Event> {
        match key.bare_key {
            BareKey::Enter | BareKey::Char('s') => Some(Event::DrawerSelectSettings),
            BareKey::Esc | BareKey::Char('m') => Some(Event::CloseDrawer),
            BareKey::Char('q') => Some(Event::CloseFocus),
            _ => None,
        }
    }

    fn map_editing_key(field: TextField, key: &KeyWithModifier, ctrl: bool) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Char('u') if ctrl => Event::ClearField,
            BareKey::Char(_) if ctrl => return None,
            BareKey::Char(c) => Event::Char(c),
            BareKey::Backspace => Event::Backspace,
            BareKey::Enter => match field {
                TextField::Draft => Event::AddItem,
                TextField::Search => Event::ExitInput,
            },
            BareKey::Esc => Event::ExitInput,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            _ => return None,
        })
    }

    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
        }
    }
}
