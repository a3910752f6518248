//! Input mode state types.
//!
//! A terminal has a single keyboard stream, so the plugin tracks which text
//! field, if any, is receiving characters:
//!
//! - **Normal**: keys are commands (navigate, open drawer, toggle theme)
//! - **Editing**: keys are typed into the draft or the search field
//!
//! # Example
//!
//! ```rust
//! use shopping_list::app::modes::{InputMode, TextField};
//!
//! let mode = InputMode::Editing(TextField::Search);
//! assert_eq!(mode.focused_field(), Some(TextField::Search));
//! ```

/// Text fields on the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// The item being composed before it is added.
    Draft,
    /// The search query that filters the list.
    Search,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys act as commands.
    #[default]
    Normal,

    /// Keys are typed into the given field. Enter submits the draft or leaves
    /// the search field, Esc leaves either.
    Editing(TextField),
}

impl InputMode {
    #[must_use]
    pub const fn focused_field(self) -> Option<TextField> {
        match self {
            Self::Normal => None,
            Self::Editing(field) => Some(field),
        }
    }
}
