//! Catalog use-case service.
//!
//! # Responsibility
//! - Bundle a loaded catalog handle with the query operations UI layers call.
//! - Apply the random-sampling step where the product surfaces "suggestions".
//!
//! # Invariants
//! - The service never mutates the catalog; it only reads the shared handle.
//! - Sampling changes which records are shown, never which records match.

use crate::catalog::{cached_catalog, Catalog, CatalogResult};
use crate::model::title::Title;
use crate::query::engine::{
    mood_filter, search_and_recommend, top_genres, GenreCount, QueryResult, Recommendation,
};
use crate::query::sample::sample;
use std::path::Path;
use std::sync::Arc;

/// Use-case wrapper over one loaded catalog.
///
/// The catalog handle is an explicit dependency, so the service stays
/// testable without any hosting framework.
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    /// Creates a service over an already-loaded catalog handle.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Opens a service backed by the process-wide load-once cache.
    pub fn open(path: impl AsRef<Path>) -> CatalogResult<Self> {
        Ok(Self::new(cached_catalog(path)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the `n` most frequent genres.
    pub fn top_genres(&self, n: usize) -> Vec<GenreCount> {
        top_genres(&self.catalog, n)
    }

    /// Returns up to `limit` randomly sampled records matching `mood`.
    ///
    /// # Contract
    /// - An empty result means the mood matched nothing; callers report
    ///   "no results" rather than treating it as a failure.
    pub fn suggest_for_mood(&self, mood: &str, limit: usize) -> QueryResult<Vec<Title>> {
        let matches = mood_filter(&self.catalog, mood)?;
        Ok(sample(&matches, limit))
    }

    /// Searches for `query` and recommends same-genre records, sampling the
    /// recommendation list down to at most `limit`.
    ///
    /// Suggestions and reference fields pass through unsampled.
    pub fn recommend(&self, query: &str, limit: usize) -> QueryResult<Recommendation> {
        let mut outcome = search_and_recommend(&self.catalog, query)?;
        outcome.recommendations = sample(&outcome.recommendations, limit);
        Ok(outcome)
    }
}
