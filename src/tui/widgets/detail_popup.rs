//! Recipe detail popup.
//!
//! The content is built as plain [`Line`]s by [`detail_lines`] so the app can
//! measure it for scroll clamping without rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::api::RecipeDetail;
use crate::tui::Theme;

/// Close control drawn on the popup's top border.
pub const CLOSE_LABEL: &str = " [x] ";
/// Placeholder for a recipe without ingredients.
pub const NO_INGREDIENTS: &str = "Not available";
/// Placeholder for a recipe without instructions.
pub const NO_INSTRUCTIONS: &str = "Not available.";

/// Builds the popup content, top to bottom.
#[must_use]
pub fn detail_lines(detail: &RecipeDetail, theme: &Theme) -> Vec<Line<'static>> {
    let summary = &detail.summary;
    let mut lines = vec![Line::from(Span::styled(
        summary.name.clone(),
        theme.header_style(),
    ))];

    if !summary.thumbnail.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Image: ", theme.muted_style()),
            Span::styled(summary.thumbnail.clone(), theme.link_style()),
        ]));
    }
    lines.push(Line::default());

    let mut badges = vec![
        Span::styled(
            format!(" Category: {} ", summary.category.as_deref().unwrap_or("N/A")),
            theme.badge_style(),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" Cuisine: {} ", summary.area.as_deref().unwrap_or("N/A")),
            theme.badge_style(),
        ),
    ];
    if let Some(tags) = &detail.tags {
        badges.push(Span::raw(" "));
        badges.push(Span::styled(format!(" Tags: {tags} "), theme.badge_style()));
    }
    lines.push(Line::from(badges));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Ingredients", theme.section_style())));
    if detail.ingredients.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {NO_INGREDIENTS}"),
            theme.muted_style(),
        )));
    } else {
        lines.extend(
            detail
                .ingredient_lines()
                .into_iter()
                .map(|item| Line::from(format!("  • {item}"))),
        );
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Instructions", theme.section_style())));
    match &detail.instructions {
        Some(text) => lines.extend(text.lines().map(|line| Line::from(line.trim_end().to_string()))),
        None => lines.push(Line::from(Span::styled(NO_INSTRUCTIONS, theme.muted_style()))),
    }

    if detail.youtube.is_some() || detail.source.is_some() {
        lines.push(Line::default());
    }
    if let Some(url) = &detail.youtube {
        lines.push(Line::from(vec![
            Span::raw("▶ Watch on YouTube: "),
            Span::styled(url.clone(), theme.link_style()),
        ]));
    }
    if let Some(url) = &detail.source {
        lines.push(Line::from(vec![
            Span::raw("🔗 Source: "),
            Span::styled(url.clone(), theme.link_style()),
        ]));
    }

    lines
}

/// Number of rows `lines` occupy when word-wrapped to `width` columns.
#[must_use]
pub fn wrapped_line_count(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width);
    let total: usize = lines
        .iter()
        .map(|line| {
            if width == 0 {
                return 1;
            }
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            wrapped_rows(&text, width)
        })
        .sum();
    u16::try_from(total).unwrap_or(u16::MAX)
}

/// Greedy word wrap; words longer than a row are broken.
fn wrapped_rows(text: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;
    for word in text.split(' ') {
        let word_width = word.width();
        let needed = if used == 0 {
            word_width
        } else {
            used + 1 + word_width
        };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        used = word_width;
        while used > width {
            rows += 1;
            used -= width;
        }
    }
    rows
}

/// The popup itself: backdrop-clearing block, close control, scrolled content.
pub struct DetailPopup<'a> {
    detail: &'a RecipeDetail,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> DetailPopup<'a> {
    #[must_use]
    pub const fn new(detail: &'a RecipeDetail, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            detail,
            scroll,
            theme,
        }
    }
}

impl Widget for DetailPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(" Recipe ")
            .title_style(self.theme.header_style())
            .title_top(Line::from(CLOSE_LABEL).right_aligned().style(self.theme.error_style()))
            .title_bottom(Line::from(" ↑/↓ scroll · Esc close ").style(self.theme.muted_style()))
            .border_style(self.theme.focused_border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(detail_lines(self.detail, self.theme))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
