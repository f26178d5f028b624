//! Custom TUI widgets.

pub mod detail_popup;
pub mod recipe_card;
pub mod status_line;

pub use detail_popup::{CLOSE_LABEL, DetailPopup, detail_lines, wrapped_line_count};
pub use recipe_card::{CARD_AFFORDANCE, RecipeCard, truncate_to_width};
pub use status_line::StatusLineWidget;

/// Flattens a buffer into text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
