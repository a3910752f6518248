//! Profile screen renderer.

use crate::ui::helpers::{clip, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ProfileView;

/// Renders the heading followed by one line per profile fact.
pub fn render_profile(row: usize, profile: &ProfileView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", theme.restore());
    print!("{}", Theme::bold());
    print!(" {}", profile.heading);
    print!("{}", " ".repeat(cols.saturating_sub(display_width(&profile.heading) + 1)));
    print!("{}", theme.restore());

    let mut current_row = row + 2;
    for line in &profile.lines {
        let line = clip(&format!("   {line}"), cols);
        position_cursor(current_row, 1);
        print!("{line}");
        print!("{}", " ".repeat(cols.saturating_sub(display_width(&line))));
        current_row += 1;
    }
    current_row
}
