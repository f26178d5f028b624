//! Error type for recipe source operations.

use thiserror::Error;

/// Errors returned by a [`RecipeSource`](super::RecipeSource).
///
/// The UI never shows these directly; it maps each one to a short fixed
/// status message and sends the detail to the log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Transport failure, non-success HTTP status, or unreadable body.
    #[error("network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The body was not valid JSON or did not match the `meals` envelope.
    #[error("failed to parse response: {detail}")]
    Parse {
        /// Error details.
        detail: String,
    },

    /// A lookup returned no record for the requested id.
    #[error("no recipe found for id {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },
}

impl SourceError {
    /// Returns true for [`SourceError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
