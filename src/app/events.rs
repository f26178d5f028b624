//! Event handling logic for the App.
//!
//! Input events (keys, mouse, paste) come from the main loop; request
//! results come from background tasks through [`App::process_events`].

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use crate::app::layout;
use crate::app::state::{AppEvent, Focus, ListOrigin, StatusKind};
use crate::app::view::{
    DETAIL_FAILED_STATUS, DETAIL_NOT_FOUND_STATUS, PROMPT_STATUS, RANDOM_FAILED_STATUS,
    SEARCH_FAILED_STATUS,
};
use crate::tui::widgets::{detail_lines, wrapped_line_count};

/// Lines scrolled per mouse wheel notch in the recipe popup.
const WHEEL_SCROLL_LINES: i32 = 3;

impl App {
    /// Handles pasted text from bracketed paste mode.
    ///
    /// Pasted text always goes to the search box. Newlines become spaces and
    /// other control characters are dropped. Ignored while the popup is open.
    pub fn handle_paste(&mut self, text: &str) {
        if self.view.modal.is_open() || text.is_empty() {
            return;
        }
        self.view.focus = Focus::Search;
        self.view.search.insert_sanitized(text);
    }

    /// Handles a key event.
    ///
    /// Key event priorities:
    /// 1. Quit (Ctrl+C) and random recipe (Ctrl+R), anywhere
    /// 2. Recipe popup keys, while it is open
    /// 3. Focus switching (Tab)
    /// 4. The focused panel (search box or results grid)
    pub fn handle_key(&mut self, key: KeyEvent) {
        log::trace!("key code={:?} modifiers={:?}", key.code, key.modifiers);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('r') => {
                    self.request_random();
                    return;
                }
                _ => {}
            }
        }

        if self.view.modal.is_open() {
            self.handle_modal_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.view.focus = self.view.focus.toggled();
            }
            // Nothing to dismiss while the popup is closed.
            KeyCode::Esc => {}
            _ => match self.view.focus {
                Focus::Search => self.handle_search_key(key),
                Focus::Results => self.handle_results_key(key),
            },
        }
    }

    /// Keys while the recipe popup is open. Nothing reaches the search box.
    fn handle_modal_key(&mut self, key: KeyEvent) {
        let page = i32::from(self.layout.modal.content.height.saturating_sub(1).max(1));
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_detail(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_detail_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_detail_by(1),
            KeyCode::PageUp => self.scroll_detail_by(-page),
            KeyCode::PageDown => self.scroll_detail_by(page),
            KeyCode::Home => self.view.modal.set_scroll(0, 0),
            KeyCode::End => {
                let max = self.detail_scroll_max();
                self.view.modal.set_scroll(max, max);
            }
            _ => {}
        }
    }

    /// Keys while the search box has focus.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            // The search box is single-line; these would insert a newline.
            KeyCode::Char('m' | 'j') if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                self.view.search.textarea.input(key);
            }
        }
    }

    /// Keys while the results grid has focus.
    fn handle_results_key(&mut self, key: KeyEvent) {
        let columns = isize::try_from(self.layout.grid_columns.max(1)).unwrap_or(1);
        match key.code {
            KeyCode::Enter => {
                if let Some(card) = self.view.results.selected_card() {
                    let id = card.id.clone();
                    self.open_detail(id);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.view.results.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.view.results.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.view.results.move_selection(-columns),
            KeyCode::Down | KeyCode::Char('j') => self.view.results.move_selection(columns),
            KeyCode::Home => self.view.results.select(0),
            KeyCode::End => self.view.results.select(usize::MAX),
            KeyCode::Char('/') => self.view.focus = Focus::Search,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Handles a mouse event.
    ///
    /// Clicks are resolved against the regions computed for the last frame.
    /// While the popup is open it captures all clicks: the close control and
    /// the backdrop close it, clicks on its content do nothing.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => self.handle_wheel(1),
            MouseEventKind::ScrollUp => self.handle_wheel(-1),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);

        if self.view.modal.is_open() {
            let modal = self.layout.modal;
            if modal.close_button.contains(position) || !modal.popup.contains(position) {
                self.close_detail();
            }
            return;
        }

        let main = self.layout.main;
        if main.search_button.contains(position) {
            self.submit_search();
        } else if main.random_button.contains(position) {
            self.request_random();
        } else if main.search_input.contains(position) {
            self.view.focus = Focus::Search;
        } else if let Some(region) = layout::region_at(&self.layout.cards, column, row) {
            let (index, id) = (region.index, region.id.clone());
            self.view.focus = Focus::Results;
            self.view.results.select(index);
            self.open_detail(id);
        }
    }

    fn handle_wheel(&mut self, direction: i32) {
        if self.view.modal.is_open() {
            self.scroll_detail_by(direction * WHEEL_SCROLL_LINES);
        } else {
            let columns = isize::try_from(self.layout.grid_columns.max(1)).unwrap_or(1);
            let delta = if direction < 0 { -columns } else { columns };
            self.view.results.move_selection(delta);
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Submits the search box text.
    ///
    /// Blank input only sets a prompt; the results area is left untouched and
    /// no request is made.
    pub(crate) fn submit_search(&mut self) {
        let query = self.view.search.text().trim().to_string();
        if query.is_empty() {
            self.view.set_status(PROMPT_STATUS, StatusKind::Prompt);
            return;
        }
        self.start_list_request(ListOrigin::Search, query);
    }

    /// Requests a single random recipe for the results grid.
    pub(crate) fn request_random(&mut self) {
        self.start_list_request(ListOrigin::Random, String::new());
    }

    fn start_list_request(&mut self, origin: ListOrigin, query: String) {
        self.view.show_loading();
        self.generations.next_list();
        self.spawn_list_request(origin, query);
    }

    /// Starts loading the full recipe for `id` into the popup.
    pub(crate) fn open_detail(&mut self, id: String) {
        self.generations.next_detail();
        self.spawn_detail_request(id);
    }

    /// Closes the recipe popup.
    pub(crate) fn close_detail(&mut self) {
        self.view.close_detail();
    }

    fn scroll_detail_by(&mut self, delta: i32) {
        let target = (i32::from(self.view.modal.scroll()) + delta).max(0);
        let target = u16::try_from(target).unwrap_or(u16::MAX);
        let max = self.detail_scroll_max();
        self.view.modal.set_scroll(target, max);
    }

    /// Largest useful scroll offset: the last content row at the bottom.
    fn detail_scroll_max(&self) -> u16 {
        let Some(detail) = self.view.modal.detail() else {
            return 0;
        };
        let content = self.layout.modal.content;
        let rows = wrapped_line_count(&detail_lines(detail, &self.theme), content.width);
        rows.saturating_sub(content.height)
    }

    pub(super) fn clamp_detail_scroll(&mut self) {
        if self.view.modal.is_open() {
            let max = self.detail_scroll_max();
            let current = self.view.modal.scroll();
            self.view.modal.set_scroll(current, max);
        }
    }

    // =========================================================================
    // Request Results
    // =========================================================================

    /// Processes pending request results.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Applies one request result, unless a newer request superseded it.
    pub(crate) fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ListLoaded {
                generation,
                origin,
                result,
            } => {
                if generation != self.generations.list {
                    log::debug!(
                        "dropping stale {} response #{generation} (latest #{})",
                        origin.label(),
                        self.generations.list
                    );
                    return;
                }
                match result {
                    Ok(items) => {
                        log::info!("{} returned {} recipe(s)", origin.label(), items.len());
                        self.view.render_list(items);
                    }
                    Err(err) => {
                        log::error!("{} request failed: {err}", origin.label());
                        self.view.clear_results();
                        let message = match origin {
                            ListOrigin::Search => SEARCH_FAILED_STATUS,
                            ListOrigin::Random => RANDOM_FAILED_STATUS,
                        };
                        self.view.set_status(message, StatusKind::Error);
                    }
                }
            }
            AppEvent::DetailLoaded {
                generation,
                id,
                result,
            } => {
                if generation != self.generations.detail {
                    log::debug!(
                        "dropping stale lookup response #{generation} for id {id} (latest #{})",
                        self.generations.detail
                    );
                    return;
                }
                match result {
                    Ok(detail) => {
                        log::info!("loaded recipe {id}");
                        self.view.render_detail(detail);
                        self.clamp_detail_scroll();
                    }
                    Err(err) if err.is_not_found() => {
                        log::warn!("lookup for id {id}: {err}");
                        self.view.set_status(DETAIL_NOT_FOUND_STATUS, StatusKind::Error);
                    }
                    Err(err) => {
                        log::error!("lookup for id {id} failed: {err}");
                        self.view.set_status(DETAIL_FAILED_STATUS, StatusKind::Error);
                    }
                }
            }
        }
    }
}
