//! Footer component renderer.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed at `row`, truncated to
/// the terminal width. Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.restore());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&footer.keybindings, cols);
    print!("{}", theme.restore());
    row + 1
}
