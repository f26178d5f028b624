//! Application state structures.
//!
//! This module contains the state definitions for the different parts of the UI:
//!
//! - **`SearchInputState`**: Single-line search box backed by `tui-textarea`
//! - **`ResultsState`**: Results grid (idle, loading, showing cards, failed)
//! - **`DetailModal`**: Recipe detail popup (closed or open with scroll offset)
//! - **`Status`**: The one-line status message under the search bar
//! - **`RequestGenerations`**: Sequence numbers used to drop stale responses
//! - **`LayoutState`**: Per-frame layout, including clickable card regions
//!
//! The results track and the modal track are independent: opening a recipe
//! does not interrupt a pending search, and a finished search does not close
//! an open recipe.

use tui_textarea::TextArea;

use crate::api::{RecipeDetail, RecipeSummary, SourceError};
use crate::app::layout::{CardRegion, MainLayout, ModalLayout};

/// Placeholder shown in the empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search recipes by name…";

/// Which part of the main screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The search box.
    #[default]
    Search,
    /// The results grid.
    Results,
}

impl Focus {
    /// Returns the other focus target.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Results => Self::Search,
        }
    }
}

/// Kind of status message, used for styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    /// Neutral information ("Showing 3 results.").
    #[default]
    Info,
    /// Asking the user for input.
    Prompt,
    /// A request succeeded but found nothing.
    Empty,
    /// A request failed.
    Error,
}

/// The status line under the search bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    /// Returns true if there is no status text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// State of the results area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A list request is in flight; a loading placeholder is shown.
    Loading,
    /// Cards from the latest list response (possibly none).
    Showing {
        /// The cards, in response order.
        cards: Vec<RecipeSummary>,
        /// Index of the selected card (0 when `cards` is empty).
        selected: usize,
    },
    /// The latest list request failed; the area is empty.
    Failed,
}

impl ResultsState {
    /// Returns the cards currently on screen.
    #[must_use]
    pub fn cards(&self) -> &[RecipeSummary] {
        match self {
            Self::Showing { cards, .. } => cards,
            _ => &[],
        }
    }

    /// Returns the selected card index, if any card is shown.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Showing { cards, selected } if !cards.is_empty() => Some(*selected),
            _ => None,
        }
    }

    /// Returns the selected card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&RecipeSummary> {
        match self {
            Self::Showing { cards, selected } => cards.get(*selected),
            _ => None,
        }
    }

    /// Returns true while a list request is pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Moves the selection to `index`, clamped to the last card.
    pub fn select(&mut self, index: usize) {
        if let Self::Showing { cards, selected } = self {
            *selected = index.min(cards.len().saturating_sub(1));
        }
    }

    /// Moves the selection by `delta` positions, clamped to the card range.
    pub fn move_selection(&mut self, delta: isize) {
        if let Some(current) = self.selected_index() {
            self.select(current.saturating_add_signed(delta));
        }
    }
}

/// State of the recipe detail popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailModal {
    /// Hidden. No detail is retained.
    #[default]
    Closed,
    /// Visible with the given recipe.
    Open {
        detail: Box<RecipeDetail>,
        /// Vertical scroll offset in lines.
        scroll: u16,
    },
}

impl DetailModal {
    /// Returns true if the popup is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Returns true if the popup is hidden from the user (and from assistive tech).
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.is_open()
    }

    /// Returns the recipe being shown, if open.
    #[must_use]
    pub fn detail(&self) -> Option<&RecipeDetail> {
        match self {
            Self::Open { detail, .. } => Some(detail),
            Self::Closed => None,
        }
    }

    /// Returns the current scroll offset (0 when closed).
    #[must_use]
    pub const fn scroll(&self) -> u16 {
        match self {
            Self::Open { scroll, .. } => *scroll,
            Self::Closed => 0,
        }
    }

    /// Sets the scroll offset, clamped to `max`.
    pub fn set_scroll(&mut self, value: u16, max: u16) {
        if let Self::Open { scroll, .. } = self {
            *scroll = value.min(max);
        }
    }
}

/// Single-line search box state.
#[derive(Debug, Clone)]
pub struct SearchInputState {
    /// The text area widget from `tui-textarea` crate.
    pub textarea: TextArea<'static>,
}

impl Default for SearchInputState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchInputState {
    /// Creates an empty search box.
    #[must_use]
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(SEARCH_PLACEHOLDER);
        Self { textarea }
    }

    /// Creates a search box pre-filled with `text`, cursor at the end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut state = Self::new();
        state.textarea.insert_str(text);
        state
    }

    /// Returns the current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.textarea.lines().join(" ")
    }

    /// Inserts text at the cursor, dropping newlines and control characters.
    pub fn insert_sanitized(&mut self, text: &str) {
        let filtered: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
            .filter(|c| !c.is_control())
            .collect();
        if !filtered.is_empty() {
            self.textarea.insert_str(&filtered);
        }
    }
}

/// Which request produced a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrigin {
    /// `search_by_name`.
    Search,
    /// `random`.
    Random,
}

impl ListOrigin {
    /// Short label used in log lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Random => "random",
        }
    }
}

/// Results delivered from background request tasks to the UI thread.
#[derive(Debug)]
pub enum AppEvent {
    /// A search or random request finished.
    ListLoaded {
        generation: u64,
        origin: ListOrigin,
        result: Result<Vec<RecipeSummary>, SourceError>,
    },
    /// A lookup-by-id request finished.
    DetailLoaded {
        generation: u64,
        id: String,
        result: Result<RecipeDetail, SourceError>,
    },
}

/// Latest issued sequence number per request track.
///
/// A response is applied only if it carries the latest number for its track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGenerations {
    pub list: u64,
    pub detail: u64,
}

impl RequestGenerations {
    /// Issues the next list generation.
    pub fn next_list(&mut self) -> u64 {
        self.list = self.list.wrapping_add(1);
        self.list
    }

    /// Issues the next detail generation.
    pub fn next_detail(&mut self) -> u64 {
        self.detail = self.detail.wrapping_add(1);
        self.detail
    }
}

/// Dynamic layout, recalculated once per frame before rendering.
///
/// Mouse handling reads the same regions that were painted, so clicks always
/// resolve against what is on screen.
#[derive(Debug, Clone, Default)]
pub struct LayoutState {
    /// Main screen areas.
    pub main: MainLayout,
    /// Clickable card regions currently on screen.
    pub cards: Vec<CardRegion>,
    /// Number of card columns in the grid.
    pub grid_columns: usize,
    /// Popup geometry (valid whether or not the popup is open).
    pub modal: ModalLayout,
}
