//! Result card widget for the recipe grid.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::RecipeSummary;
use crate::tui::Theme;

/// Call-to-action shown at the bottom of every card.
pub const CARD_AFFORDANCE: &str = "View recipe ›";

/// Truncates `text` to at most `width` columns, ending with `…` when cut.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// One recipe in the results grid.
///
/// Shows the title, `category • area`, the thumbnail URL and an
/// affordance line. The selected card gets an accent border.
pub struct RecipeCard<'a> {
    recipe: &'a RecipeSummary,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> RecipeCard<'a> {
    #[must_use]
    pub const fn new(recipe: &'a RecipeSummary, selected: bool, theme: &'a Theme) -> Self {
        Self {
            recipe,
            selected,
            theme,
        }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let title_style = if self.selected {
            self.theme.highlight_style()
        } else {
            self.theme.header_style().fg(self.theme.fg)
        };
        let thumbnail = if self.recipe.thumbnail.is_empty() {
            Span::styled("No image", self.theme.muted_style())
        } else {
            Span::styled(
                truncate_to_width(&self.recipe.thumbnail, width),
                self.theme.link_style(),
            )
        };

        vec![
            Line::from(Span::styled(
                truncate_to_width(&self.recipe.name, width),
                title_style,
            )),
            Line::from(Span::styled(
                truncate_to_width(&self.recipe.meta_line(), width),
                self.theme.muted_style(),
            )),
            Line::from(thumbnail),
            Line::from(Span::styled(CARD_AFFORDANCE, self.theme.button_style())),
        ]
    }
}

impl Widget for RecipeCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::bordered().border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines(usize::from(inner.width))).render(inner, buf);
    }
}
