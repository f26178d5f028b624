//! Layout calculation helpers for the TUI.
//!
//! This module is the single source of truth for screen geometry. The same
//! rectangles are used for painting and for resolving mouse clicks, so a click
//! always hits what the user sees.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::api::RecipeSummary;

/// Width of the search button (including borders).
pub const SEARCH_BUTTON_WIDTH: u16 = 12;
/// Width of the "surprise me" button (including borders).
pub const RANDOM_BUTTON_WIDTH: u16 = 17;
/// Minimum width of a result card.
pub const CARD_MIN_WIDTH: u16 = 28;
/// Height of a result card (border + title + meta + thumbnail + affordance + border).
pub const CARD_HEIGHT: u16 = 6;
/// Horizontal gap between cards.
pub const CARD_GAP: u16 = 1;
/// Popup size as a percentage of the terminal.
const MODAL_PERCENT: u16 = 80;
/// Width of the close control drawn on the popup's top border (` [x] `).
pub const CLOSE_BUTTON_WIDTH: u16 = 5;

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainLayout {
    /// Header (1 line).
    pub header: Rect,
    /// Search text box.
    pub search_input: Rect,
    /// `[ Search ]` button.
    pub search_button: Rect,
    /// `[ Surprise me ]` button.
    pub random_button: Rect,
    /// Status line (1 line).
    pub status: Rect,
    /// Results panel including its border.
    pub results: Rect,
    /// Results panel content area (inside the border).
    pub results_inner: Rect,
    /// Footer with key hints (1 line).
    pub footer: Rect,
}

/// Vertical layout of the main screen.
const MAIN_CONSTRAINTS: [Constraint; 5] = [
    Constraint::Length(1), // Header
    Constraint::Length(3), // Search row
    Constraint::Length(1), // Status
    Constraint::Min(4),    // Results (grows)
    Constraint::Length(1), // Footer
];

/// Calculates the main screen layout.
#[must_use]
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let [header, search_row, status, results, footer] =
        Layout::vertical(MAIN_CONSTRAINTS).areas(area);

    let [search_input, search_button, random_button] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(SEARCH_BUTTON_WIDTH),
        Constraint::Length(RANDOM_BUTTON_WIDTH),
    ])
    .areas(search_row);

    MainLayout {
        header,
        search_input,
        search_button,
        random_button,
        status,
        results,
        results_inner: shrink_by_border(results),
        footer,
    }
}

/// Removes a one-cell border from every side.
fn shrink_by_border(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// A clickable card on screen, carrying the recipe id it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRegion {
    /// Screen rectangle of the card.
    pub area: Rect,
    /// Index of the card in the results list.
    pub index: usize,
    /// Recipe id attached to this region.
    pub id: String,
}

/// Number of card columns that fit in `width`.
#[must_use]
pub fn grid_columns(width: u16) -> usize {
    let per_card = CARD_MIN_WIDTH + CARD_GAP;
    usize::from((width.saturating_add(CARD_GAP) / per_card).max(1))
}

/// Number of card rows that fit in `height`.
#[must_use]
pub fn grid_rows(height: u16) -> usize {
    usize::from((height / CARD_HEIGHT).max(1))
}

/// Calculates the on-screen regions of the result cards.
///
/// Cards flow left to right, top to bottom, stretched to fill the width.
/// When there are more rows than fit, the grid scrolls so the selected card's
/// row is the last visible one. Cards outside the viewport get no region.
#[must_use]
pub fn calculate_card_regions(
    area: Rect,
    cards: &[RecipeSummary],
    selected: usize,
) -> Vec<CardRegion> {
    if area.is_empty() || cards.is_empty() {
        return Vec::new();
    }

    let columns = grid_columns(area.width);
    let visible_rows = grid_rows(area.height);
    let first_row = (selected / columns).saturating_sub(visible_rows - 1);

    // Safe casts: `columns` is derived from a u16 width, so it fits in u16
    #[allow(clippy::cast_possible_truncation)]
    let columns_u16 = columns as u16;
    let gaps = CARD_GAP * columns_u16.saturating_sub(1);
    let card_width = area.width.saturating_sub(gaps) / columns_u16;

    cards
        .iter()
        .enumerate()
        .skip(first_row * columns)
        .take(visible_rows * columns)
        .map(|(index, card)| {
            #[allow(clippy::cast_possible_truncation)] // bounded by the viewport size
            let (row, col) = ((index / columns - first_row) as u16, (index % columns) as u16);
            let x = area.x + col * (card_width + CARD_GAP);
            let y = area.y + row * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            CardRegion {
                area: Rect::new(x, y, card_width, height),
                index,
                id: card.id.clone(),
            }
        })
        .collect()
}

/// Returns the card region under a screen position, if any.
#[must_use]
pub fn region_at(regions: &[CardRegion], column: u16, row: u16) -> Option<&CardRegion> {
    let position = Position::new(column, row);
    regions.iter().find(|region| region.area.contains(position))
}

/// Geometry of the detail popup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalLayout {
    /// The whole popup including border. Clicks outside it hit the backdrop.
    pub popup: Rect,
    /// The close control on the top border.
    pub close_button: Rect,
    /// Scrollable content area inside the border.
    pub content: Rect,
}

fn percent_of(value: u16) -> u16 {
    u16::try_from(u32::from(value) * u32::from(MODAL_PERCENT) / 100).unwrap_or(value)
}

/// Calculates a centered popup covering most of the terminal.
#[must_use]
pub fn calculate_modal_layout(area: Rect) -> ModalLayout {
    let width = percent_of(area.width).max(area.width.min(40));
    let height = percent_of(area.height).max(area.height.min(10));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let popup = Rect::new(x, y, width, height);

    // Right-aligned top title: it ends one cell before the corner.
    let close_button = Rect::new(
        popup.right().saturating_sub(CLOSE_BUTTON_WIDTH + 1),
        popup.y,
        CLOSE_BUTTON_WIDTH.min(popup.width),
        1.min(popup.height),
    );

    ModalLayout {
        popup,
        close_button,
        content: shrink_by_border(popup),
    }
}
