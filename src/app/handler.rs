//! Event handling and state transition logic.
//!
//! Every user input reaches the state through [`handle_event`], the only
//! function that mutates [`AppState`]. Events are processed one at a time on
//! the plugin thread, so each transition sees the result of the previous one.
//!
//! # Event Types
//!
//! - **Text**: `Char`, `Backspace`, `ClearField`, `TextChanged`, `FocusField`, `ExitInput`
//! - **Items**: `AddItem`, `KeyDown`, `KeyUp`
//! - **Navigation**: `Navigate`, `NavigateBack`, `OpenDrawer`, `CloseDrawer`,
//!   `DrawerSelectSettings`, `Escape`
//! - **Theme**: `SetDarkMode`, `ToggleDarkMode`
//! - **Host**: `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use shopping_list::app::{handle_event, AppState, Event};
//! use shopping_list::ui::theme::ThemeSet;
//!
//! let mut state = AppState::new(ThemeSet::default(), false);
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenDrawer)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), shopping_list::ShoppingListError>(())
//! ```

use super::modes::{InputMode, TextField};
use super::navigation::Destination;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list cursor down (wraps to top).
    KeyDown,
    /// Moves the list cursor up (wraps to bottom).
    KeyUp,

    /// Gives keyboard focus to a text field on the list screen.
    FocusField(TextField),
    /// Returns from a text field to command keys.
    ExitInput,
    /// Appends a character to the focused field.
    Char(char),
    /// Removes the last character of the focused field.
    Backspace,
    /// Empties the focused field.
    ClearField,
    /// Replaces a field's value wholesale, regardless of focus.
    TextChanged {
        /// Field being edited.
        field: TextField,
        /// Its complete new value.
        value: String,
    },

    /// Adds the draft text as a new item at the top of the list.
    AddItem,

    /// Switches screens (bottom bar entry or direct request).
    Navigate(Destination),
    /// Goes back to the previous screen.
    NavigateBack,
    /// Opens the side drawer.
    OpenDrawer,
    /// Closes the side drawer.
    CloseDrawer,
    /// The drawer's settings entry: closes the drawer, then shows settings.
    DrawerSelectSettings,
    /// Context dependent cancel: leaves a field, closes the drawer, or goes back.
    Escape,

    /// Sets the dark mode flag from the settings switch.
    SetDarkMode(bool),
    /// Flips the dark mode flag.
    ToggleDarkMode,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed and needs a redraw, and
/// the host side effects to run in order.
///
/// # Errors
///
/// No current transition fails. The `Result` keeps the host wrapper's error
/// logging uniform should a fallible transition be added.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::FocusField(field) => {
            if state.destination() != Destination::List {
                tracing::debug!(?field, "text fields only exist on the list screen");
                return Ok((false, vec![]));
            }
            if state.is_drawer_open() {
                tracing::debug!(?field, "text fields are covered by the drawer");
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Editing(*field);
            Ok((true, vec![]))
        }
        Event::ExitInput => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let Some(field) = state.input_mode.focused_field() else {
                return Ok((false, vec![]));
            };
            state.push_char(field, *c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let Some(field) = state.input_mode.focused_field() else {
                return Ok((false, vec![]));
            };
            state.pop_char(field);
            Ok((true, vec![]))
        }
        Event::ClearField => {
            let Some(field) = state.input_mode.focused_field() else {
                return Ok((false, vec![]));
            };
            state.clear_field(field);
            Ok((true, vec![]))
        }
        Event::TextChanged { field, value } => {
            state.set_field_text(*field, value);
            Ok((true, vec![]))
        }
        Event::AddItem => {
            let added = state.add_draft_item();
            tracing::debug!(added, total_items = state.items().len(), "add item requested");
            Ok((added, vec![]))
        }
        Event::Navigate(destination) => {
            let moved = state.navigate_to(*destination);
            Ok((moved, vec![]))
        }
        Event::NavigateBack => {
            let moved = state.navigate_back();
            Ok((moved, vec![]))
        }
        Event::OpenDrawer => {
            state.input_mode = InputMode::Normal;
            state.navigator.open_drawer();
            Ok((true, vec![]))
        }
        Event::CloseDrawer => {
            state.navigator.close_drawer();
            Ok((true, vec![]))
        }
        Event::DrawerSelectSettings => {
            state.select_settings_from_drawer();
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.input_mode != InputMode::Normal {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            if state.is_drawer_open() {
                state.navigator.close_drawer();
                return Ok((true, vec![]));
            }
            let moved = state.navigate_back();
            Ok((moved, vec![]))
        }
        Event::SetDarkMode(dark_mode) => {
            state.set_dark_mode(*dark_mode);
            Ok((true, vec![]))
        }
        Event::ToggleDarkMode => {
            state.toggle_dark_mode();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeSet;

    fn run(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).expect("transitions never fail");
        }
    }

    fn typed(text: &str) -> Vec<Event> {
        text.chars().map(Event::Char).collect()
    }

    #[test]
    fn typing_and_submitting_adds_to_front() {
        let mut state = AppState::new(ThemeSet::default(), false);
        run(&mut state, &[Event::FocusField(TextField::Draft)]);
        run(&mut state, &typed("Milk"));
        run(&mut state, &[Event::AddItem]);
        run(&mut state, &typed("Eggs"));
        run(&mut state, &[Event::AddItem]);

        let texts: Vec<&str> = state.items().iter().map(|i| i.text()).collect();
        assert_eq!(texts, ["Eggs", "Milk"]);
        assert_eq!(state.draft_text(), "");
        assert_eq!(state.input_mode, InputMode::Editing(TextField::Draft));
    }

    #[test]
    fn blank_add_does_not_render_or_clear() {
        let mut state = AppState::new(ThemeSet::default(), false);
        run(
            &mut state,
            &[Event::TextChanged {
                field: TextField::Draft,
                value: "  ".to_string(),
            }],
        );
        let (render, actions) = handle_event(&mut state, &Event::AddItem).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.draft_text(), "  ");
    }

    #[test]
    fn chars_are_ignored_without_focus() {
        let mut state = AppState::new(ThemeSet::default(), false);
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.draft_text(), "");
        assert_eq!(state.search_query(), "");
    }

    #[test]
    fn search_editing_refilters() {
        let mut state = AppState::new(ThemeSet::default(), false);
        for label in ["Milk", "Eggs"] {
            run(
                &mut state,
                &[
                    Event::TextChanged {
                        field: TextField::Draft,
                        value: label.to_string(),
                    },
                    Event::AddItem,
                ],
            );
        }
        run(&mut state, &[Event::FocusField(TextField::Search)]);
        run(&mut state, &typed("egx"));
        assert!(state.filtered_items().is_empty());
        run(&mut state, &[Event::Backspace]);
        assert_eq!(state.filtered_items().len(), 1);
        run(&mut state, &[Event::ClearField]);
        assert_eq!(state.filtered_items().len(), 2);
    }

    #[test]
    fn focus_is_refused_off_the_list_screen() {
        let mut state = AppState::new(ThemeSet::default(), false);
        run(&mut state, &[Event::Navigate(Destination::Profile)]);
        let (render, _) =
            handle_event(&mut state, &Event::FocusField(TextField::Search)).unwrap();
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn repeated_navigation_skips_render() {
        let mut state = AppState::new(ThemeSet::default(), false);
        let (first, _) = handle_event(&mut state, &Event::Navigate(Destination::Profile)).unwrap();
        let (second, _) = handle_event(&mut state, &Event::Navigate(Destination::Profile)).unwrap();
        assert!(first);
        assert!(!second);
        assert_eq!(state.navigator().history().len(), 2);
    }

    #[test]
    fn escape_unwinds_focus_then_drawer_then_history() {
        let mut state = AppState::new(ThemeSet::default(), false);
        run(&mut state, &[Event::FocusField(TextField::Search), Event::Escape]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.destination(), Destination::List);

        run(&mut state, &[Event::Navigate(Destination::Profile), Event::OpenDrawer]);
        run(&mut state, &[Event::Escape]);
        assert!(!state.is_drawer_open());
        assert_eq!(state.destination(), Destination::Profile);

        run(&mut state, &[Event::Escape]);
        assert_eq!(state.destination(), Destination::List);

        let (render, _) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!render);
    }

    #[test]
    fn focus_is_refused_while_drawer_is_open() {
        let mut state = AppState::new(ThemeSet::default(), false);
        run(&mut state, &[Event::OpenDrawer]);
        let (render, _) =
            handle_event(&mut state, &Event::FocusField(TextField::Draft)).unwrap();
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.is_drawer_open());

        run(&mut state, &[Event::Char('x')]);
        assert_eq!(state.draft_text(), "");
    }

    #[test]
    fn drawer_settings_closes_drawer_and_navigates() {
        let mut state = AppState::new(ThemeSet::default(), true);
        run(&mut state, &[Event::OpenDrawer, Event::DrawerSelectSettings]);
        assert_eq!(state.destination(), Destination::Settings);
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn theme_events_overwrite_flag() {
        let mut state = AppState::new(ThemeSet::default(), true);
        run(&mut state, &[Event::SetDarkMode(true), Event::SetDarkMode(false)]);
        assert!(!state.is_dark_mode());
        run(&mut state, &[Event::ToggleDarkMode]);
        assert!(state.is_dark_mode());
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = AppState::new(ThemeSet::default(), false);
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
