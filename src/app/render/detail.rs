//! Recipe popup rendering.

use ratatui::Frame;

use crate::app::App;
use crate::tui::widgets::DetailPopup;

impl App {
    /// Renders the recipe popup over the main screen, if open.
    pub(crate) fn render_detail_popup(&self, frame: &mut Frame) {
        let Some(detail) = self.view.modal.detail() else {
            return;
        };
        let popup = DetailPopup::new(detail, self.view.modal.scroll(), &self.theme);
        frame.render_widget(popup, self.layout.modal.popup);
    }
}
