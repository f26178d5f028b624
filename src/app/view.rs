//! The view handle: every piece of on-screen state the controller mutates.
//!
//! `View` is built once at startup and owned by [`App`](super::App). Its
//! methods are the rendering operations (show a loading placeholder, replace
//! the result cards, open or close the recipe popup); the paint code in
//! `render/` only reads it.

use crate::api::{RecipeDetail, RecipeSummary};
use crate::app::state::{
    DetailModal, Focus, ResultsState, SearchInputState, Status, StatusKind,
};

/// Status shown when a search is submitted with blank input.
pub const PROMPT_STATUS: &str = "Please type something to search.";
/// Status shown when a list request succeeded with no matches.
pub const NO_RESULTS_STATUS: &str = "No results found. Try another search term.";
/// Status shown when a search request failed.
pub const SEARCH_FAILED_STATUS: &str = "Failed to fetch recipes. Please try again.";
/// Status shown when a random request failed.
pub const RANDOM_FAILED_STATUS: &str = "Failed to fetch a random recipe.";
/// Status shown when a lookup found no recipe for the id.
pub const DETAIL_NOT_FOUND_STATUS: &str = "Could not load that recipe.";
/// Status shown when a lookup request failed.
pub const DETAIL_FAILED_STATUS: &str = "Failed to load recipe details.";

/// Builds the "Showing N result(s)." status text.
#[must_use]
pub fn showing_status(count: usize) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("Showing {count} result{plural}.")
}

/// On-screen UI state.
#[derive(Debug, Clone, Default)]
pub struct View {
    /// Search box.
    pub search: SearchInputState,
    /// Results grid.
    pub results: ResultsState,
    /// Status line.
    pub status: Status,
    /// Recipe detail popup.
    pub modal: DetailModal,
    /// Keyboard focus on the main screen.
    pub focus: Focus,
}

impl View {
    /// Creates an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status line.
    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Status {
            text: text.into(),
            kind,
        };
    }

    /// Clears the status line.
    pub fn clear_status(&mut self) {
        self.status = Status::default();
    }

    /// Empties the results area after a failed list request.
    pub fn clear_results(&mut self) {
        self.results = ResultsState::Failed;
    }

    /// Clears the status and replaces the results with a loading placeholder.
    pub fn show_loading(&mut self) {
        self.clear_status();
        self.results = ResultsState::Loading;
    }

    /// Replaces the result cards in one step and updates the status.
    ///
    /// An empty list leaves the area empty with a "no results" status.
    pub fn render_list(&mut self, items: Vec<RecipeSummary>) {
        if items.is_empty() {
            self.results = ResultsState::Showing {
                cards: Vec::new(),
                selected: 0,
            };
            self.set_status(NO_RESULTS_STATUS, StatusKind::Empty);
            return;
        }

        let status = showing_status(items.len());
        self.results = ResultsState::Showing {
            cards: items,
            selected: 0,
        };
        self.set_status(status, StatusKind::Info);
    }

    /// Opens the recipe popup for `detail`, scrolled to the top.
    pub fn render_detail(&mut self, detail: RecipeDetail) {
        self.modal = DetailModal::Open {
            detail: Box::new(detail),
            scroll: 0,
        };
    }

    /// Hides the recipe popup and drops its content.
    ///
    /// Reopening a recipe always requires a fresh lookup.
    pub fn close_detail(&mut self) {
        self.modal = DetailModal::Closed;
    }
}
