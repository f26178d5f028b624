//! Rendering methods for the App.
//!
//! This module contains all UI rendering logic:
//! - **Main screen**: Header, search row, status line, results grid and footer
//! - **Recipe popup**: Modal overlay with the full recipe

mod detail;
mod main_screen;

pub use main_screen::LOADING_TEXT;

use ratatui::Frame;

use super::App;

impl App {
    /// Renders the application UI.
    ///
    /// The main screen is always drawn; the recipe popup is overlaid on top
    /// of it while open.
    pub fn render(&self, frame: &mut Frame) {
        self.render_main(frame);
        if self.view.modal.is_open() {
            self.render_detail_popup(frame);
        }
    }
}
