//! Settings screen renderer.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SettingsView;

/// Renders the heading and the dark mode switch row.
///
/// # Layout
///
/// ```text
/// Pengaturan
///
/// Mode Gelap (Dark Mode)                         [ ON  ● ]
/// ```
pub fn render_settings(row: usize, settings: &SettingsView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.restore());
    print!("{}", Theme::bold());
    print!(" {}", settings.heading);
    print!("{}", " ".repeat(cols.saturating_sub(display_width(&settings.heading) + 1)));
    print!("{}", theme.restore());

    let switch = if settings.dark_mode {
        "[ ON  ● ]"
    } else {
        "[ ○ OFF ]"
    };
    let switch_color = if settings.dark_mode {
        &theme.colors.switch_on
    } else {
        &theme.colors.switch_off
    };
    let label_len = display_width(&settings.dark_mode_label) + 1;
    let switch_len = display_width(switch);
    let gap = cols.saturating_sub(label_len + switch_len + 1).max(1);

    position_cursor(row + 2, 1);
    print!("{}", theme.restore());
    print!(" {}", settings.dark_mode_label);
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(switch_color));
    print!("{switch}");
    print!("{}", theme.restore());
    print!("{}", " ".repeat(cols.saturating_sub(label_len + gap + switch_len)));
    row + 3
}
