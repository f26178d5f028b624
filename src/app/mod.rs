//! Main application state and logic.
//!
//! This module contains the core App struct and its implementation,
//! organized into submodules:
//! - `view` - The on-screen state and its rendering operations
//! - `render` - Painting the view into a frame
//! - `state` - Application state structures
//! - `events` - Key, mouse, paste and response handling
//! - `layout` - Screen geometry shared by painting and hit-testing
//!
//! ## Request tracks
//!
//! The application runs two independent request tracks:
//!
//! - **List**: search-by-name and random requests fill the results grid.
//! - **Detail**: lookup-by-id requests fill the recipe popup.
//!
//! Requests run as background tokio tasks and report back through an mpsc
//! channel drained once per frame by [`App::process_events`]. Each request
//! carries a generation number; only the newest response per track is applied.

pub mod events;
pub mod layout;
mod render;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;

pub use layout::{MainLayout, ModalLayout, calculate_main_layout, calculate_modal_layout};

use std::sync::Arc;

use anyhow::{Context, Result};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::api::{MealDbClient, RecipeSource};
use crate::config::Config;
use crate::tui::Theme;

pub use self::state::{
    AppEvent, DetailModal, Focus, LayoutState, ListOrigin, RequestGenerations, ResultsState,
    SearchInputState, Status, StatusKind,
};
pub use self::view::View;

/// Channel buffer size for request results.
const EVENT_CHANNEL_SIZE: usize = 64;

/// Main application state.
///
/// Organized into component parts:
/// - `view`: What is on screen (search box, results, status, popup, focus)
/// - `layout`: Geometry of the last frame, used for mouse hit-testing
/// - `generations`: Latest request number per track
pub struct App {
    // =========================================================================
    // Shared State
    // =========================================================================
    /// Where recipes come from.
    source: Arc<dyn RecipeSource>,
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Label for the header (the API base URL).
    pub(crate) api_label: String,
    /// Should quit flag.
    should_quit: bool,

    // =========================================================================
    // Event Channels
    // =========================================================================
    /// Receiver for request results.
    event_rx: mpsc::Receiver<AppEvent>,
    /// Sender cloned into each request task.
    event_tx: mpsc::Sender<AppEvent>,

    // =========================================================================
    // Component States
    // =========================================================================
    /// On-screen state.
    pub(crate) view: View,
    /// Dynamic layout dimensions.
    pub(crate) layout: LayoutState,
    /// Request fencing counters.
    pub(crate) generations: RequestGenerations,
}

impl App {
    /// Creates the application backed by TheMealDB, as configured.
    ///
    /// A random recipe is requested immediately. Must be called inside a
    /// tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let client = MealDbClient::new(&config.base_url, config.timeout())
            .context("Failed to create recipe API client")?;
        let label = client.base_url().to_string();
        Ok(Self::new_with_source(Arc::new(client), label))
    }

    /// Creates the application with a custom recipe source.
    ///
    /// Primarily used for testing with canned responses. Like [`App::new`],
    /// it requests a random recipe immediately.
    #[must_use]
    pub fn new_with_source(source: Arc<dyn RecipeSource>, api_label: impl Into<String>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);

        let mut app = Self {
            source,
            theme: Theme::default(),
            api_label: api_label.into(),
            should_quit: false,
            event_rx,
            event_tx,
            view: View::new(),
            layout: LayoutState::default(),
            generations: RequestGenerations::default(),
        };

        app.request_random();
        app
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the on-screen state.
    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Calculates and caches the layout based on terminal dimensions.
    ///
    /// The calculated layout is stored in `self.layout` and used by both
    /// rendering and mouse handling, so clicks resolve against what was drawn.
    ///
    /// Should be called once per frame before rendering.
    pub fn update_layout(&mut self, terminal_area: Rect) {
        let main = calculate_main_layout(terminal_area);
        let selected = self.view.results.selected_index().unwrap_or(0);

        self.layout.grid_columns = layout::grid_columns(main.results_inner.width);
        self.layout.cards =
            layout::calculate_card_regions(main.results_inner, self.view.results.cards(), selected);
        self.layout.main = main;
        self.layout.modal = calculate_modal_layout(terminal_area);

        // The popup may have shrunk since the last scroll.
        self.clamp_detail_scroll();
    }

    /// Returns the recipe id of the card drawn at a screen position.
    #[must_use]
    pub fn card_at(&self, column: u16, row: u16) -> Option<&str> {
        layout::region_at(&self.layout.cards, column, row).map(|region| region.id.as_str())
    }

    // =========================================================================
    // Request Spawning
    // =========================================================================

    /// Spawns a list request for the current list generation.
    fn spawn_list_request(&self, origin: ListOrigin, query: String) {
        let source = Arc::clone(&self.source);
        let tx = self.event_tx.clone();
        let generation = self.generations.list;

        log::debug!(
            "spawning {} request #{generation} query={query:?}",
            origin.label()
        );
        tokio::spawn(async move {
            let result = match origin {
                ListOrigin::Search => source.search_by_name(&query).await,
                ListOrigin::Random => source.random().await.map(|details| {
                    details.into_iter().map(|detail| detail.summary).collect()
                }),
            };
            // The receiver is gone only when the app is shutting down.
            let _ = tx
                .send(AppEvent::ListLoaded {
                    generation,
                    origin,
                    result,
                })
                .await;
        });
    }

    /// Spawns a lookup request for the current detail generation.
    fn spawn_detail_request(&self, id: String) {
        let source = Arc::clone(&self.source);
        let tx = self.event_tx.clone();
        let generation = self.generations.detail;

        log::debug!("spawning lookup request #{generation} id={id}");
        tokio::spawn(async move {
            let result = source.lookup_by_id(&id).await;
            let _ = tx
                .send(AppEvent::DetailLoaded {
                    generation,
                    id,
                    result,
                })
                .await;
        });
    }
}
