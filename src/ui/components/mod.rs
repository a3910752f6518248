//! Composable UI component renderers.
//!
//! Each component draws one part of the frame at a given row and returns the
//! next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Top bar with the app title and drawer hint
//! - [`input`]: Framed text field (draft, search)
//! - [`list`]: List heading and item rows
//! - [`empty`]: Message shown when no item is visible
//! - [`profile`]: Profile screen
//! - [`settings`]: Settings screen with the dark mode switch
//! - [`bottom_bar`]: Bottom navigation bar
//! - [`drawer`]: Side drawer overlay
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Top bar]
//! [Border]
//! [Screen content]
//! [Blank padding to fill screen]
//! [Border]
//! [Bottom bar]
//! [Footer]
//! ```
//!
//! The drawer is painted last over the content area.

mod bottom_bar;
mod drawer;
mod empty;
mod footer;
mod header;
mod input;
mod list;
mod profile;
mod settings;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ListScreenView, ScreenView, UIViewModel};

use bottom_bar::render_bottom_bar;
use drawer::render_drawer;
use empty::render_empty_state;
use footer::render_footer;
use header::render_top_bar;
use input::render_input_box;
use list::{render_item_rows, render_list_title};
use profile::render_profile;
use settings::render_settings;

/// First row of the screen content, below the blank line, top bar and border.
const CONTENT_TOP: usize = 4;

/// Rows at the bottom taken by the border, bottom bar and footer.
const BOTTOM_CHROME_ROWS: usize = 3;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.restore());
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", theme.restore());
    row + 1
}

/// Paints every cell with the theme background so light mode shows on dark
/// terminals and the other way around.
pub fn fill_background(theme: &Theme, rows: usize, cols: usize) {
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{}", theme.restore());
        print!("{}", " ".repeat(cols));
    }
}

/// Renders a full frame.
///
/// Frames shorter than the chrome still draw what fits; rows past the bottom
/// are clamped by the terminal.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;
    current_row = render_top_bar(current_row, &vm.top_bar, theme, cols);
    current_row = render_border(current_row, theme, cols);

    match &vm.screen {
        ScreenView::List(list) => {
            render_list_screen(current_row, list, theme, cols);
        }
        ScreenView::Profile(profile) => {
            render_profile(current_row + 1, profile, theme, cols);
        }
        ScreenView::Settings(settings) => {
            render_settings(current_row + 1, settings, theme, cols);
        }
    }

    let footer_row = rows.saturating_sub(1).max(1);
    let bar_row = footer_row.saturating_sub(1).max(1);
    let border_row = bar_row.saturating_sub(1).max(1);
    render_border(border_row, theme, cols);
    render_bottom_bar(bar_row, &vm.bottom_bar, theme, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(drawer) = &vm.drawer {
        let bottom = rows.saturating_sub(BOTTOM_CHROME_ROWS).max(CONTENT_TOP);
        render_drawer(CONTENT_TOP, bottom, drawer, theme, cols);
    }
}

/// Title, the two fields, then either the item rows or the empty message.
fn render_list_screen(row: usize, list: &ListScreenView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = render_list_title(row, &list.title, theme, cols);
    current_row = render_input_box(current_row, &list.draft, theme, cols);
    current_row = render_input_box(current_row, &list.search, theme, cols);

    if let Some(empty) = &list.empty_state {
        render_empty_state(current_row, empty, theme, cols)
    } else {
        render_item_rows(current_row, &list.display_items, theme, cols)
    }
}
