//! Top bar component renderer.
//!
//! Draws the application title centered on one line, with the drawer hint
//! pinned to the left edge.

use crate::ui::helpers::{clip, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TopBarInfo;

/// Renders the top bar at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
/// [m] Menu          ShoppingList App                       
/// ```
///
/// The title is centered over the full width; the hint overwrites the left
/// padding when there is room for it.
pub fn render_top_bar(row: usize, top_bar: &TopBarInfo, theme: &Theme, cols: usize) -> usize {
    let title = clip(&top_bar.title, cols);
    let title_len = display_width(&title);
    let padding = cols.saturating_sub(title_len) / 2;
    let hint_len = display_width(&top_bar.menu_hint);

    position_cursor(row, 1);
    print!("{}", theme.restore());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    if padding > hint_len + 2 {
        print!(" {}", Theme::dim());
        print!("{}", top_bar.menu_hint);
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.header_fg));
        if let Some(bg) = &theme.colors.header_bg {
            print!("{}", Theme::bg(bg));
        }
        print!("{}", " ".repeat(padding - hint_len - 1));
    } else {
        print!("{}", " ".repeat(padding));
    }

    print!("{}", Theme::bold());
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", theme.restore());
    row + 1
}
