//! Remote recipe source.
//!
//! Wraps the three read-only TheMealDB endpoints (search by name, lookup by
//! id, random) behind the [`RecipeSource`] trait so the UI can be driven by
//! the real HTTP client or by a stub in tests.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, MealDbClient, parse_meals};
pub use error::SourceError;
pub use types::{
    INGREDIENT_SLOTS, Ingredient, MealRecord, MealsEnvelope, RecipeDetail, RecipeSummary,
};

use async_trait::async_trait;

/// Trait for recipe backends.
///
/// Each method issues one request and reports failures unchanged; callers
/// decide what to show the user.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Searches recipes by name.
    ///
    /// `query` must be non-blank; rejecting blank input is the caller's job.
    /// Returns an empty list when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Network`] or [`SourceError::Parse`].
    async fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, SourceError>;

    /// Looks up the full recipe for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] when the source has no record for
    /// `id`, or [`SourceError::Network`] / [`SourceError::Parse`].
    async fn lookup_by_id(&self, id: &str) -> Result<RecipeDetail, SourceError>;

    /// Fetches a random recipe (normally a single-element list).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Network`] or [`SourceError::Parse`].
    async fn random(&self) -> Result<Vec<RecipeDetail>, SourceError>;
}
