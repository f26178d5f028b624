//! Shared test utilities for the app module.
//!
//! This module provides helper functions and utilities for testing:
//! - `StubSource` - In-memory `RecipeSource` with canned responses and call recording
//! - `create_test_app` / `create_settled_app` - `App` instances backed by a stub
//! - `settle` - Waits for one background request and applies its result
//! - `render_app_to_terminal` - Renders the app to a `TestBackend`
//! - Key and mouse event helpers (`char_key`, `key`, `ctrl_key`, `click`)

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::TestBackend};

use crate::api::{RecipeDetail, RecipeSource, RecipeSummary, SourceError, parse_meals};
use crate::app::App;

/// Terminal size used by tests that need a layout.
pub const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

/// TheMealDB record for "Spicy Arrabiata Penne", trimmed to the fields used.
pub const ARRABIATA_JSON: &str = r#"{
    "meals": [{
        "idMeal": "52771",
        "strMeal": "Spicy Arrabiata Penne",
        "strCategory": "Vegetarian",
        "strArea": "Italian",
        "strInstructions": "Bring a large pot of water to a boil. Add kosher salt to the boiling water, then add the pasta.",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
        "strTags": "Pasta,Curry",
        "strYoutube": "https://www.youtube.com/watch?v=1IszT_guI08",
        "strIngredient1": "Penne",
        "strIngredient2": "Olive Oil",
        "strIngredient3": "Garlic",
        "strIngredient4": "Chopped tomatoes",
        "strIngredient5": "Red Chilli Flakes",
        "strIngredient6": "Italian Seasoning",
        "strIngredient7": "Basil",
        "strIngredient8": "Parmigiano-Reggiano",
        "strIngredient9": "",
        "strIngredient10": null,
        "strMeasure1": "1 pound",
        "strMeasure2": "1/4 cup",
        "strMeasure3": "3 cloves",
        "strMeasure4": "1 tin ",
        "strMeasure5": "1/2 teaspoon",
        "strMeasure6": "1/2 teaspoon",
        "strMeasure7": "6 leaves",
        "strMeasure8": "",
        "strMeasure9": "",
        "strMeasure10": null,
        "strSource": null
    }]
}"#;

/// Full Arrabiata recipe, parsed from [`ARRABIATA_JSON`].
pub fn arrabiata_detail() -> RecipeDetail {
    let record = parse_meals(ARRABIATA_JSON).unwrap().remove(0);
    RecipeDetail::from(record)
}

/// Card for the Arrabiata recipe.
pub fn arrabiata_summary() -> RecipeSummary {
    arrabiata_detail().summary
}

/// A minimal card with just an id and name.
pub fn summary(id: &str, name: &str) -> RecipeSummary {
    RecipeSummary {
        id: id.to_string(),
        name: name.to_string(),
        category: Some("Beef".to_string()),
        area: Some("British".to_string()),
        ..RecipeSummary::default()
    }
}

/// `count` distinct cards with ids `1..=count`.
pub fn summaries(count: usize) -> Vec<RecipeSummary> {
    (1..=count)
        .map(|i| summary(&i.to_string(), &format!("Recipe {i}")))
        .collect()
}

/// In-memory recipe source.
///
/// Unknown search terms return no matches; unknown ids return `NotFound`.
/// Every call is recorded as `search:<query>`, `lookup:<id>` or `random`.
#[derive(Default)]
pub struct StubSource {
    searches: HashMap<String, Vec<RecipeSummary>>,
    search_error: Option<SourceError>,
    random: Vec<RecipeDetail>,
    random_error: Option<SourceError>,
    details: HashMap<String, RecipeDetail>,
    lookup_error: Option<SourceError>,
    calls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Arrabiata recipe is found by "Arrabiata", by id, and as the random pick.
    pub fn with_arrabiata() -> Self {
        let detail = arrabiata_detail();
        Self::new()
            .with_search("Arrabiata", vec![detail.summary.clone()])
            .with_random(vec![detail.summary.clone()])
            .with_detail(detail)
    }

    pub fn with_search(mut self, query: &str, results: Vec<RecipeSummary>) -> Self {
        self.searches.insert(query.to_string(), results);
        self
    }

    pub fn with_search_error(mut self, error: SourceError) -> Self {
        self.search_error = Some(error);
        self
    }

    /// Random picks, returned as details carrying only the card fields.
    pub fn with_random(mut self, results: Vec<RecipeSummary>) -> Self {
        self.random = results
            .into_iter()
            .map(|summary| RecipeDetail {
                summary,
                ..RecipeDetail::default()
            })
            .collect();
        self
    }

    pub fn with_random_error(mut self, error: SourceError) -> Self {
        self.random_error = Some(error);
        self
    }

    pub fn with_detail(mut self, detail: RecipeDetail) -> Self {
        self.details.insert(detail.summary.id.clone(), detail);
        self
    }

    pub fn with_lookup_error(mut self, error: SourceError) -> Self {
        self.lookup_error = Some(error);
        self
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RecipeSource for StubSource {
    async fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, SourceError> {
        self.record(format!("search:{query}"));
        if let Some(error) = &self.search_error {
            return Err(error.clone());
        }
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }

    async fn lookup_by_id(&self, id: &str) -> Result<RecipeDetail, SourceError> {
        self.record(format!("lookup:{id}"));
        if let Some(error) = &self.lookup_error {
            return Err(error.clone());
        }
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound { id: id.to_string() })
    }

    async fn random(&self) -> Result<Vec<RecipeDetail>, SourceError> {
        self.record("random".to_string());
        if let Some(error) = &self.random_error {
            return Err(error.clone());
        }
        Ok(self.random.clone())
    }
}

/// A generic network failure.
pub fn network_error() -> SourceError {
    SourceError::Network {
        detail: "HTTP 500 Internal Server Error".to_string(),
    }
}

/// Creates an app backed by `source`. The startup random request is still pending.
pub fn create_test_app(source: StubSource) -> (App, Arc<StubSource>) {
    let source = Arc::new(source);
    let app = App::new_with_source(Arc::clone(&source) as Arc<dyn RecipeSource>, "stub://mealdb");
    (app, source)
}

/// Creates an app backed by `source`, with the startup random request applied
/// and the layout computed for [`SCREEN`].
pub async fn create_settled_app(source: StubSource) -> (App, Arc<StubSource>) {
    let (mut app, source) = create_test_app(source);
    settle(&mut app).await;
    app.update_layout(SCREEN);
    (app, source)
}

/// Waits for the next request result and applies it.
pub async fn settle(app: &mut App) {
    let event = tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv())
        .await
        .expect("timed out waiting for a request result")
        .expect("event channel closed");
    app.apply_event(event);
}

/// Waits for `expected` request results and applies them in arrival order.
pub async fn settle_all(app: &mut App, expected: usize) {
    for _ in 0..expected {
        settle(app).await;
    }
}

/// Types `text` into the app one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for `code` with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for Ctrl + `c`.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a left-button press at a screen cell.
pub fn click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Creates a mouse event of `kind` at a screen cell.
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Renders the app to a `TestBackend` terminal.
///
/// This function mimics the main loop behavior by calling `update_layout()`
/// before rendering, ensuring the cached layout is properly initialized.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app_to_terminal(
    app: &mut App,
    width: u16,
    height: u16,
) -> Result<Terminal<TestBackend>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    // Update layout before rendering (mimics main loop behavior)
    app.update_layout(Rect::new(0, 0, width, height));

    terminal.draw(|f| app.render(f))?;

    Ok(terminal)
}

/// Flattens the rendered screen into text, one line per row.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
