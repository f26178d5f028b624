//! One-line status message under the search bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::state::{Status, StatusKind};
use crate::tui::Theme;

/// Renders the current [`Status`] with an icon per kind.
///
/// An empty status renders nothing, so the line stays blank while loading.
pub struct StatusLineWidget<'a> {
    status: &'a Status,
    theme: &'a Theme,
}

impl<'a> StatusLineWidget<'a> {
    #[must_use]
    pub const fn new(status: &'a Status, theme: &'a Theme) -> Self {
        Self { status, theme }
    }

    const fn icon(&self) -> &'static str {
        match self.status.kind {
            StatusKind::Info => "·",
            StatusKind::Prompt => "?",
            StatusKind::Empty => "∅",
            StatusKind::Error => "✗",
        }
    }

    fn style(&self) -> Style {
        match self.status.kind {
            StatusKind::Info => self.theme.muted_style(),
            StatusKind::Prompt | StatusKind::Empty => self.theme.warning_style(),
            StatusKind::Error => self.theme.error_style(),
        }
    }
}

impl Widget for StatusLineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.status.is_empty() {
            return;
        }

        let style = self.style();
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.icon()), style),
            Span::styled(self.status.text.as_str(), style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
