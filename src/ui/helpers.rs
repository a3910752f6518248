//! Shared rendering utilities.
//!
//! Low-level pieces used by several components: cursor positioning, padded
//! line output and search match highlighting. All widths are measured in
//! characters, not bytes, so labels with accents line up.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters.
#[must_use]
pub fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Prints `text` centered in `cols` columns, padding both sides with spaces.
/// Styling must be set by the caller.
pub fn print_centered(text: &str, cols: usize) {
    let text = clip(text, cols);
    let len = display_width(&text);
    let padding = cols.saturating_sub(len) / 2;
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. Selected rows
/// skip match highlighting so the selection colors stay readable.
///
/// # Output
///
/// Prints to stdout. Between highlighted runs the active theme's base colors
/// are restored with [`Theme::restore`].
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len()).max(start);
        if start > current_pos {
            let normal: String = chars[current_pos..start].iter().collect();
            print!("{normal}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        print!("{highlighted}");
        print!("{}", theme.restore());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
