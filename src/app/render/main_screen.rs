//! Main screen rendering.
//!
//! Header, search row, status line, results grid and footer. Everything is
//! drawn into the rectangles cached by `update_layout()`, which are the same
//! rectangles mouse clicks are resolved against.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::app::state::{Focus, ResultsState};
use crate::tui::widgets::{RecipeCard, StatusLineWidget};

/// Placeholder drawn while a list request is pending.
pub const LOADING_TEXT: &str = "Loading recipes…";

impl App {
    /// Renders the main screen.
    pub(crate) fn render_main(&self, frame: &mut Frame) {
        let layout = self.layout.main;

        self.render_header(frame, layout.header);
        self.render_search_input(frame, layout.search_input);
        self.render_button(frame, layout.search_button, "Search");
        self.render_button(frame, layout.random_button, "Surprise me");
        frame.render_widget(
            StatusLineWidget::new(&self.view.status, &self.theme),
            layout.status,
        );
        self.render_results(frame, layout.results);
        self.render_footer(frame, layout.footer);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(" MealScout ", self.theme.header_style()),
            Span::styled("[", self.theme.muted_style()),
            Span::styled(self.api_label.as_str(), self.theme.normal_style()),
            Span::styled("]", self.theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    /// Whether keyboard input currently goes to `target`.
    fn has_focus(&self, target: Focus) -> bool {
        self.view.modal.is_hidden() && self.view.focus == target
    }

    fn panel_border(&self, target: Focus) -> Style {
        if self.has_focus(target) {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        }
    }

    fn render_search_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Search recipes ")
            .title_style(self.theme.header_style())
            .border_style(self.panel_border(Focus::Search));

        let mut textarea = self.view.search.textarea.clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(self.theme.placeholder_style());
        if !self.has_focus(Focus::Search) {
            // Hide the cursor block when typing would not reach the box.
            textarea.set_cursor_style(Style::default());
        }
        frame.render_widget(&textarea, area);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, label: &str) {
        let button = Paragraph::new(Line::from(label).centered())
            .style(self.theme.button_style())
            .block(Block::bordered().border_style(self.theme.border_style()));
        frame.render_widget(button, area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let title = match &self.view.results {
            ResultsState::Showing { cards, .. } if !cards.is_empty() => {
                format!(" Results ({}) ", cards.len())
            }
            _ => " Results ".to_string(),
        };
        let block = Block::bordered()
            .title(title)
            .title_style(self.theme.header_style())
            .border_style(self.panel_border(Focus::Results));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &self.view.results {
            ResultsState::Loading => {
                let loading = Paragraph::new(Line::from(LOADING_TEXT).centered())
                    .style(self.theme.muted_style());
                frame.render_widget(loading, inner);
            }
            ResultsState::Showing { cards, selected } => {
                for region in &self.layout.cards {
                    if let Some(card) = cards.get(region.index) {
                        let card = RecipeCard::new(card, region.index == *selected, &self.theme);
                        frame.render_widget(card, region.area);
                    }
                }
            }
            ResultsState::Idle | ResultsState::Failed => {}
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = if self.view.modal.is_open() {
            &[
                ("[Esc/q]", "Close"),
                ("[↑/↓/PgUp/PgDn]", "Scroll"),
                ("[Ctrl+C]", "Quit"),
            ]
        } else if self.view.focus == Focus::Results {
            &[
                ("[Enter]", "Open"),
                ("[←↑↓→]", "Move"),
                ("[/]", "Search"),
                ("[Ctrl+R]", "Surprise me"),
                ("[q]", "Quit"),
            ]
        } else {
            &[
                ("[Enter]", "Search"),
                ("[Tab]", "Results"),
                ("[Ctrl+R]", "Surprise me"),
                ("[Ctrl+C]", "Quit"),
            ]
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints {
            spans.push(Span::styled(format!("{key} "), self.theme.highlight_style()));
            spans.push(Span::styled(format!("{action}  "), self.theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
