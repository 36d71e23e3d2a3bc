//! Static mood catalog.
//!
//! # Responsibility
//! - Map user-facing mood labels to their fixed, ordered genre token sets.
//!
//! # Invariants
//! - The table is process-wide static configuration and never mutates.
//! - Mood keys are matched exactly; callers present a closed selection.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MoodResult<T> = Result<T, MoodError>;

/// Error for mood lookups outside the fixed key set.
///
/// With a closed selection UI this indicates a caller bug, but it is handled
/// as a normal error rather than a panic.
#[derive(Debug)]
pub enum MoodError {
    UnknownMood(String),
}

impl Display for MoodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMood(mood) => write!(f, "unknown mood `{mood}`"),
        }
    }
}

impl Error for MoodError {}

const MOOD_TABLE: &[(&str, &[&str])] = &[
    ("Happy", &["Comedy", "Family"]),
    ("Sad", &["Drama", "Romance"]),
    ("Adventurous", &["Action", "Adventure"]),
    ("Romantic", &["Romance", "Drama"]),
    ("Thrilled", &["Thriller", "Action", "Horror"]),
    ("Cozy", &["Family", "Romance"]),
    ("Weird", &["Sci-Fi & Fantasy", "Documentary"]),
    ("Binge Mode", &["TV Shows", "Drama"]),
    ("Animated Fun", &["Animation", "Anime"]),
    ("Mind Blown", &["Science & Nature TV", "Sci-Fi & Fantasy"]),
];

/// Returns the ordered genre tokens accepted for `mood`.
///
/// # Errors
/// - `MoodError::UnknownMood` when `mood` is not one of the fixed keys.
pub fn genres_for_mood(mood: &str) -> MoodResult<&'static [&'static str]> {
    MOOD_TABLE
        .iter()
        .find(|(name, _)| *name == mood)
        .map(|(_, genres)| *genres)
        .ok_or_else(|| MoodError::UnknownMood(mood.to_string()))
}

/// Lists the recognized mood labels in table order.
pub fn known_moods() -> impl Iterator<Item = &'static str> {
    MOOD_TABLE.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::{genres_for_mood, known_moods, MoodError};

    #[test]
    fn table_holds_ten_moods() {
        assert_eq!(known_moods().count(), 10);
    }

    #[test]
    fn every_known_mood_resolves() {
        for mood in known_moods() {
            let genres = genres_for_mood(mood).expect("known mood should resolve");
            assert!(!genres.is_empty());
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(genres_for_mood("Happy").is_ok());
        assert!(matches!(
            genres_for_mood("happy"),
            Err(MoodError::UnknownMood(_))
        ));
    }
}
