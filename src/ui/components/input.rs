//! Text field component renderer.
//!
//! Draws a labelled three-line box around a single-line field. The list
//! screen uses it for both the new-item draft and the search query.

use crate::ui::helpers::{clip, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBoxInfo;

/// Horizontal margin on each side of the box.
const INPUT_BOX_MARGIN: usize = 2;

/// Renders the field starting at `row` and returns the row after the box.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Label: text▏    │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// The frame uses `input_focused_border` while the field has focus, which is
/// also the only time the cursor bar after the text is drawn. Text longer than
/// the box keeps its tail visible, the part being typed.
pub fn render_input_box(row: usize, input: &InputBoxInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if input.is_focused {
        &theme.colors.input_focused_border
    } else {
        &theme.colors.input_border
    };
    let margin = " ".repeat(INPUT_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{}", theme.restore());
    print!("{margin}");
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", theme.restore());
    print!("{margin}");

    let prefix = format!(" {}: ", input.label);
    let cursor = if input.is_focused { "▏" } else { "" };
    let text_room = inner_width.saturating_sub(display_width(&prefix) + display_width(cursor));
    let text_len = display_width(&input.text);
    let visible: String = input.text.chars().skip(text_len.saturating_sub(text_room)).collect();
    let line = clip(&format!("{prefix}{visible}{cursor}"), inner_width);
    let padding = inner_width.saturating_sub(display_width(&line));

    position_cursor(row + 1, 1);
    print!("{margin}");
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{line}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", theme.restore());
    print!("{margin}");

    position_cursor(row + 2, 1);
    print!("{margin}");
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", theme.restore());
    print!("{margin}");

    row + 3
}
