//! Core query engine for the couchpick title catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod mood;
pub mod query;
pub mod service;

pub use catalog::{cached_catalog, load_catalog, Catalog, CatalogError, CatalogResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::title::{coerce_release_year, derive_genre, RawTitleRow, Title};
pub use mood::{genres_for_mood, known_moods, MoodError, MoodResult};
pub use query::engine::{
    mood_filter, search_and_recommend, top_genres, GenreCount, QueryError, QueryResult,
    Recommendation,
};
pub use query::sample::sample;
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
