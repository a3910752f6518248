//! Item list component renderer.
//!
//! Renders the list heading and one row per visible item with selection and
//! search match highlighting.

use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the bold list heading at `row`. Returns the next free row.
pub fn render_list_title(row: usize, title: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.restore());
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    let title = helpers::clip(title, cols);
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(display_width(&title))));
    print!("{}", theme.restore());
    row + 1
}

/// Renders every row starting at `row`. Returns the row after the last one.
pub fn render_item_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_item_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one item as `  • label`, padded to the full width so the selection
/// background covers the whole line.
fn render_item_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.restore());

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("> ");
    } else {
        print!("  ");
    }
    print!("• ");

    helpers::render_highlighted_text(&item.text, &item.highlight_ranges, theme, item.is_selected);

    let line_len = 4 + display_width(&item.text);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", theme.restore());
    row + 1
}
