//! Title domain model.
//!
//! # Responsibility
//! - Define the cleaned catalog record and its raw CSV row shape.
//! - Provide the derivation helpers the loader applies per row.
//!
//! # Invariants
//! - `genre` is always the first comma-separated token of `listed_in`,
//!   trimmed of surrounding whitespace.
//! - A row that cannot produce title, genre and release year is dropped,
//!   never partially loaded.

use serde::{Deserialize, Serialize};

/// One raw CSV row before cleaning.
///
/// All fields are optional at this stage; [`RawTitleRow::clean`] decides
/// which rows survive into the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTitleRow {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub listed_in: Option<String>,
    #[serde(default)]
    pub release_year: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One cleaned, immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub title: String,
    /// Raw comma-separated category string as found in the source.
    pub listed_in: String,
    /// Primary genre derived from `listed_in`. See [`derive_genre`].
    pub genre: String,
    pub release_year: i32,
    pub description: Option<String>,
}

impl RawTitleRow {
    /// Cleans one raw row into a [`Title`].
    ///
    /// # Contract
    /// - Returns `None` when the title is missing or blank.
    /// - Returns `None` when no genre can be derived from `listed_in`.
    /// - Returns `None` when the release year fails numeric coercion.
    pub fn clean(self) -> Option<Title> {
        let title = self.title.filter(|value| !value.trim().is_empty())?;
        let listed_in = self.listed_in.unwrap_or_default();
        let genre = derive_genre(&listed_in)?;
        let release_year = self.release_year.as_deref().and_then(coerce_release_year)?;

        Some(Title {
            title,
            listed_in,
            genre,
            release_year,
            description: self.description,
        })
    }
}

/// Derives the primary genre: the substring of `listed_in` before the first
/// comma, trimmed. Returns `None` when that token is empty.
pub fn derive_genre(listed_in: &str) -> Option<String> {
    let first = listed_in.split(',').next().unwrap_or("").trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

/// Coerces a raw release-year field to `i32`.
///
/// Accepts plain integers and float-shaped values like `"2006.0"` (truncated),
/// matching the tolerance of the upstream data source. Returns `None` for
/// anything else.
pub fn coerce_release_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.trunc() as i32)
}

#[cfg(test)]
mod tests {
    use super::{coerce_release_year, derive_genre, RawTitleRow};

    fn raw(title: &str, listed_in: &str, year: &str) -> RawTitleRow {
        RawTitleRow {
            title: Some(title.to_string()),
            listed_in: Some(listed_in.to_string()),
            release_year: Some(year.to_string()),
            description: None,
        }
    }

    #[test]
    fn derive_genre_takes_first_token() {
        assert_eq!(
            derive_genre("Animation, Family").as_deref(),
            Some("Animation")
        );
        assert_eq!(derive_genre("Drama").as_deref(), Some("Drama"));
    }

    #[test]
    fn derive_genre_trims_whitespace() {
        assert_eq!(derive_genre("  Drama , Romance").as_deref(), Some("Drama"));
    }

    #[test]
    fn derive_genre_rejects_empty_input() {
        assert_eq!(derive_genre(""), None);
        assert_eq!(derive_genre("   , Drama"), None);
    }

    #[test]
    fn coerce_release_year_parses_integers_and_floats() {
        assert_eq!(coerce_release_year("2006"), Some(2006));
        assert_eq!(coerce_release_year(" 2011 "), Some(2011));
        assert_eq!(coerce_release_year("2006.0"), Some(2006));
    }

    #[test]
    fn coerce_release_year_rejects_garbage() {
        assert_eq!(coerce_release_year(""), None);
        assert_eq!(coerce_release_year("unknown"), None);
        assert_eq!(coerce_release_year("NaN"), None);
    }

    #[test]
    fn clean_builds_title_with_derived_fields() {
        let title = raw("Cars", "Animation, Family", "2006")
            .clean()
            .expect("row should survive cleaning");
        assert_eq!(title.genre, "Animation");
        assert_eq!(title.release_year, 2006);
        assert_eq!(title.listed_in, "Animation, Family");
    }

    #[test]
    fn clean_drops_rows_missing_required_fields() {
        assert!(raw("", "Drama", "2001").clean().is_none());
        assert!(raw("Her", "", "2013").clean().is_none());
        assert!(raw("Her", "Romance, Drama", "later").clean().is_none());

        let no_year = RawTitleRow {
            title: Some("Her".to_string()),
            listed_in: Some("Romance".to_string()),
            release_year: None,
            description: None,
        };
        assert!(no_year.clean().is_none());
    }
}
