//! Empty state component renderer.
//!
//! Shown in place of the item rows when the list is empty or nothing matches
//! the search.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting one row below `row`.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [padding] MESSAGE  [padding]
/// [padding] subtitle [padding]
/// ```
///
/// The message uses `empty_state_fg`, the subtitle dimmed `text_dim`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    position_cursor(row + 1, 1);
    print!("{}", theme.restore());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(&empty.message, cols);

    position_cursor(row + 2, 1);
    print!("{}", theme.restore());
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, cols);
    print!("{}", theme.restore());
    row + 3
}
