//! Bottom navigation bar renderer.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BottomBarInfo;

/// Renders the navigation entries as equal-width tabs at `row`.
///
/// The current destination is drawn in `nav_active_*` colors. When the
/// settings screen is showing, no tab is active.
pub fn render_bottom_bar(row: usize, bar: &BottomBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.restore());

    if bar.entries.is_empty() {
        print!("{}", " ".repeat(cols));
        return row + 1;
    }

    let tab_width = cols / bar.entries.len();
    let mut printed = 0;
    for entry in &bar.entries {
        let label = format!("[{}] {}", entry.key, entry.label);
        let label_len = display_width(&label).min(tab_width);
        let left = tab_width.saturating_sub(label_len) / 2;
        let right = tab_width.saturating_sub(left + label_len);

        if entry.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.nav_active_fg));
            print!("{}", Theme::bg(&theme.colors.nav_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{}", " ".repeat(left));
        print!("{}", label.chars().take(label_len).collect::<String>());
        print!("{}", " ".repeat(right));
        print!("{}", theme.restore());
        printed += tab_width;
    }
    print!("{}", " ".repeat(cols.saturating_sub(printed)));
    row + 1
}
