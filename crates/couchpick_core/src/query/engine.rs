//! The three catalog query operations.
//!
//! # Responsibility
//! - Rank genres, filter by mood and recommend by shared genre.
//! - Distinguish invalid input (typed errors) from valid input with no
//!   matches (empty results).
//!
//! # Invariants
//! - Genre ranking breaks count ties by first-encountered catalog order.
//! - The reference title never appears in its own recommendation list.

use crate::catalog::Catalog;
use crate::model::title::Title;
use crate::mood::{genres_for_mood, MoodError};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Suggestions are capped to keep the search response scannable.
const MAX_SUGGESTIONS: usize = 5;

pub type QueryResult<T> = Result<T, QueryError>;

/// Query-layer error for invalid caller input.
#[derive(Debug)]
pub enum QueryError {
    /// Mood label outside the fixed mood table.
    UnknownMood(String),
    /// No catalog title contains the search query.
    TitleNotFound(String),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMood(mood) => write!(f, "unknown mood `{mood}`"),
            Self::TitleNotFound(query) => {
                write!(f, "no title matching `{query}` found in catalog")
            }
        }
    }
}

impl Error for QueryError {}

impl From<MoodError> for QueryError {
    fn from(value: MoodError) -> Self {
        match value {
            MoodError::UnknownMood(mood) => Self::UnknownMood(mood),
        }
    }
}

/// One genre with its number of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Search outcome: capped suggestions plus same-genre recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Up to five distinct matching titles, in first-match order.
    pub suggestions: Vec<String>,
    /// First title matched in catalog row order; basis for recommendations.
    pub reference_title: String,
    pub reference_genre: String,
    /// All records sharing the reference genre, reference title excluded.
    /// Empty means "no genre-mates", which is distinct from "not found".
    pub recommendations: Vec<Title>,
}

/// Returns the `n` most frequent genres, count descending.
///
/// # Contract
/// - At most `n` entries; fewer when the catalog has fewer distinct genres.
/// - Ties keep the order in which genres first appear in the catalog.
/// - Empty catalog yields an empty vec; this operation never errors.
pub fn top_genres(catalog: &Catalog, n: usize) -> Vec<GenreCount> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<GenreCount> = Vec::new();

    for title in catalog.iter() {
        match first_seen.get(title.genre.as_str()) {
            Some(&index) => counts[index].count += 1,
            None => {
                first_seen.insert(title.genre.as_str(), counts.len());
                counts.push(GenreCount {
                    genre: title.genre.clone(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-encounter order within equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Returns every record acceptable for `mood`.
///
/// A record matches when its raw `listed_in` string contains any of the
/// mood's genre tokens, case-insensitively, as a substring. Multi-category
/// titles therefore match on any contained token.
///
/// # Errors
/// - `QueryError::UnknownMood` when the mood is not in the fixed table.
///   An empty result is a normal outcome, not an error.
pub fn mood_filter(catalog: &Catalog, mood: &str) -> QueryResult<Vec<Title>> {
    let genres = genres_for_mood(mood)?;
    let needles: Vec<String> = genres.iter().map(|genre| genre.to_lowercase()).collect();

    Ok(catalog
        .iter()
        .filter(|title| {
            let listed = title.listed_in.to_lowercase();
            needles.iter().any(|needle| listed.contains(needle.as_str()))
        })
        .cloned()
        .collect())
}

/// Searches titles by substring and recommends same-genre records.
///
/// # Contract
/// - Suggestions: case-insensitive substring matches of `query` against the
///   title, deduplicated, capped at five, first-match order.
/// - The reference is the first matching record in catalog row order; when
///   several distinct titles match, whichever comes first wins.
/// - Recommendations are every record whose genre equals the reference's,
///   excluding all records carrying the reference title itself.
///
/// # Errors
/// - `QueryError::TitleNotFound` when nothing matches `query` at all.
pub fn search_and_recommend(catalog: &Catalog, query: &str) -> QueryResult<Recommendation> {
    let needle = query.to_lowercase();

    let mut suggestions: Vec<String> = Vec::new();
    let mut reference: Option<&Title> = None;

    for title in catalog.iter() {
        if !title.title.to_lowercase().contains(&needle) {
            continue;
        }
        if reference.is_none() {
            reference = Some(title);
        }
        if suggestions.len() < MAX_SUGGESTIONS
            && !suggestions.iter().any(|seen| seen == &title.title)
        {
            suggestions.push(title.title.clone());
        }
    }

    let reference = reference.ok_or_else(|| QueryError::TitleNotFound(query.to_string()))?;

    let recommendations = catalog
        .iter()
        .filter(|candidate| {
            candidate.genre == reference.genre && candidate.title != reference.title
        })
        .cloned()
        .collect();

    Ok(Recommendation {
        suggestions,
        reference_title: reference.title.clone(),
        reference_genre: reference.genre.clone(),
        recommendations,
    })
}
