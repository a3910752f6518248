//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain layer. Data
//! flows one way:
//!
//! ```text
//! Key press → Event → handle_event → AppState mutation → (render?, Actions)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input focus state
//! - [`navigation`]: Destinations, single-top history and the drawer flag
//! - [`state`]: Session state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use shopping_list::app::{handle_event, AppState, Event};
//! use shopping_list::ui::theme::ThemeSet;
//!
//! let mut state = AppState::new(ThemeSet::default(), false);
//! let (should_render, _actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! # Ok::<(), shopping_list::ShoppingListError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, TextField};
pub use navigation::{Destination, Navigator};
pub use state::{AppState, Appearance};
