//! Side drawer overlay renderer.
//!
//! The drawer is drawn last, on top of the current screen, as a panel along
//! the left edge of the content area.

use crate::ui::helpers::{clip, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DrawerInfo;

/// Panel width including its right border.
const DRAWER_WIDTH: usize = 28;

/// Renders the drawer over rows `top..bottom` (exclusive).
pub fn render_drawer(top: usize, bottom: usize, drawer: &DrawerInfo, theme: &Theme, cols: usize) {
    let width = DRAWER_WIDTH.min(cols);
    let inner = width.saturating_sub(1);

    for row in top..bottom {
        let offset = row - top;
        let text = match offset {
            1 => " Menu".to_string(),
            n if n >= 3 => drawer
                .entries
                .get(n - 3)
                .map(|entry| format!("  [{}] {}", entry.key, entry.label))
                .unwrap_or_default(),
            _ => String::new(),
        };
        let text = clip(&text, inner);

        position_cursor(row, 1);
        print!("{}", Theme::bg(&theme.colors.drawer_bg));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        if offset == 1 {
            print!("{}", Theme::bold());
        }
        print!("{text}");
        print!("{}", " ".repeat(inner.saturating_sub(display_width(&text))));
        print!("{}", Theme::reset());
        print!("{}", Theme::bg(&theme.colors.drawer_bg));
        print!("{}", Theme::fg(&theme.colors.border));
        if width > inner {
            print!("│");
        }
        print!("{}", theme.restore());
    }
}
