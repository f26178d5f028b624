//! HTTP implementation of [`RecipeSource`] against TheMealDB.
//!
//! Every call is a single GET with no retries and no caching. Failures are
//! mapped to [`SourceError`] and reported upward unchanged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{MealRecord, MealsEnvelope, RecipeDetail, RecipeSource, RecipeSummary, SourceError};

/// Public TheMealDB v1 endpoint (free test key `1`).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Maximum number of body characters written to the log.
const LOG_BODY_LIMIT: usize = 256;

/// Client for TheMealDB JSON API.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Creates a client for `base_url`.
    ///
    /// A trailing `/` on the base URL is ignored. `timeout` of `None` means
    /// requests may wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Network`] if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, SourceError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| SourceError::Network {
            detail: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `GET {base}/{path}` and returns the decoded meal records.
    async fn fetch_meals(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<MealRecord>, SourceError> {
        let url = format!("{}/{path}", self.base_url);
        log::debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                let detail = if e.is_timeout() {
                    format!("request to {path} timed out: {e}")
                } else {
                    e.to_string()
                };
                SourceError::Network { detail }
            })?;

        let status = response.status();
        log::debug!("GET {path} -> {status}");

        if !status.is_success() {
            log::warn!("GET {path} returned non-success status {status}");
            return Err(SourceError::Network {
                detail: format!("HTTP {status}"),
            });
        }

        let body = response.text().await.map_err(|e| SourceError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

        parse_meals(&body)
    }
}

/// Decodes a `{"meals": [...] | null}` body.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] if the body is not a valid envelope.
pub fn parse_meals(body: &str) -> Result<Vec<MealRecord>, SourceError> {
    serde_json::from_str::<MealsEnvelope>(body)
        .map(MealsEnvelope::into_records)
        .map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(body));
            SourceError::Parse {
                detail: e.to_string(),
            }
        })
}

fn truncate_for_log(body: &str) -> String {
    if body.chars().count() <= LOG_BODY_LIMIT {
        body.to_string()
    } else {
        let head: String = body.chars().take(LOG_BODY_LIMIT).collect();
        format!("{head}… (truncated)")
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, SourceError> {
        let records = self.fetch_meals("search.php", &[("s", query)]).await?;
        Ok(records.iter().map(RecipeSummary::from).collect())
    }

    async fn lookup_by_id(&self, id: &str) -> Result<RecipeDetail, SourceError> {
        let records = self.fetch_meals("lookup.php", &[("i", id)]).await?;
        records
            .into_iter()
            .next()
            .map(RecipeDetail::from)
            .ok_or_else(|| SourceError::NotFound { id: id.to_string() })
    }

    async fn random(&self) -> Result<Vec<RecipeDetail>, SourceError> {
        let records = self.fetch_meals("random.php", &[]).await?;
        Ok(records.into_iter().map(RecipeDetail::from).collect())
    }
}
