//! Recipe records as returned by TheMealDB and the display models built from them.
//!
//! The API returns every field as a string or `null`, with ingredients spread
//! over twenty numbered slots (`strIngredient1..20` / `strMeasure1..20`).
//! [`MealRecord`] mirrors that wire shape; [`RecipeSummary`] and
//! [`RecipeDetail`] are what the rest of the application works with.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Number of numbered ingredient/measure slots in a meal record.
pub const INGREDIENT_SLOTS: usize = 20;

/// Top-level response envelope shared by all endpoints.
///
/// `meals` is `null` (or missing) when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

impl MealsEnvelope {
    /// Returns the records, treating a null/absent list as empty.
    #[must_use]
    pub fn into_records(self) -> Vec<MealRecord> {
        self.meals.unwrap_or_default()
    }
}

/// A single meal record in wire format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    pub id_meal: String,
    #[serde(default)]
    pub str_meal: Option<String>,
    #[serde(default)]
    pub str_meal_thumb: Option<String>,
    #[serde(default)]
    pub str_category: Option<String>,
    #[serde(default)]
    pub str_area: Option<String>,
    #[serde(default)]
    pub str_instructions: Option<String>,
    #[serde(default)]
    pub str_tags: Option<String>,
    #[serde(default)]
    pub str_youtube: Option<String>,
    #[serde(default)]
    pub str_source: Option<String>,
    /// Everything else, including the numbered ingredient and measure slots.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl MealRecord {
    /// Returns the raw string stored in a numbered slot such as `strIngredient3`.
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.extra
            .get(&format!("{prefix}{index}"))
            .and_then(serde_json::Value::as_str)
    }

    /// Collects the non-empty ingredient slots in ascending slot order.
    #[must_use]
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                let name = non_blank(self.slot("strIngredient", i))?;
                let measure = non_blank(self.slot("strMeasure", i));
                Some(Ingredient { name, measure })
            })
            .collect()
    }
}

/// Trims a value and drops it when nothing is left.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Minimal record needed to draw a result card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
}

impl RecipeSummary {
    /// Category and cuisine joined for the card meta line, e.g. `Vegetarian • Italian`.
    #[must_use]
    pub fn meta_line(&self) -> String {
        format!(
            "{} • {}",
            self.category.as_deref().unwrap_or("Unknown"),
            self.area.as_deref().unwrap_or("N/A")
        )
    }
}

impl From<&MealRecord> for RecipeSummary {
    fn from(record: &MealRecord) -> Self {
        Self {
            id: record.id_meal.trim().to_string(),
            name: non_blank(record.str_meal.as_deref()).unwrap_or_default(),
            thumbnail: non_blank(record.str_meal_thumb.as_deref()).unwrap_or_default(),
            category: non_blank(record.str_category.as_deref()),
            area: non_blank(record.str_area.as_deref()),
        }
    }
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.measure {
            Some(measure) => write!(f, "{} – {measure}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Full recipe shown in the detail popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDetail {
    pub summary: RecipeSummary,
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub youtube: Option<String>,
    pub source: Option<String>,
    pub tags: Option<String>,
}

impl RecipeDetail {
    /// Ingredient lines formatted for display (`name – measure` or `name`).
    #[must_use]
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients.iter().map(ToString::to_string).collect()
    }
}

impl From<MealRecord> for RecipeDetail {
    fn from(record: MealRecord) -> Self {
        Self {
            summary: RecipeSummary::from(&record),
            ingredients: record.ingredients(),
            instructions: non_blank(record.str_instructions.as_deref()),
            youtube: non_blank(record.str_youtube.as_deref()),
            source: non_blank(record.str_source.as_deref()),
            tags: non_blank(record.str_tags.as_deref()),
        }
    }
}
