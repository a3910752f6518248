//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` becomes a `UIViewModel`
//! 2. **Component Rendering**: the components print the view model
//!
//! # Example
//!
//! ```rust
//! use shopping_list::app::AppState;
//! use shopping_list::ui::render;
//! use shopping_list::ui::theme::ThemeSet;
//!
//! let state = AppState::new(ThemeSet::default(), true);
//! render(&state, 24, 80); // Render to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;

/// Renders the plugin UI to stdout in the palette matching the session's dark
/// mode flag.
///
/// The whole pane is repainted each time; the host clears it before calling.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let theme = state.active_theme();

    components::fill_background(theme, rows, cols);
    components::render_screen(&viewmodel, theme, rows, cols);
    print!("{}", Theme::reset());
}
