//! Catalog loading, validation and the process-wide load-once cache.
//!
//! # Responsibility
//! - Parse raw CSV input into a validated, deduplicated in-memory catalog.
//! - Keep source-format details out of query/service layers.
//!
//! # Invariants
//! - A returned `Catalog` only contains records that passed cleaning.
//! - Original row order is preserved minus removed rows.
//! - The catalog never changes after loading; concurrent readers can share
//!   one instance without locking.

use crate::model::title::Title;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod cache;
mod load;

pub use cache::cached_catalog;
pub use load::load_catalog;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Loader-level error: the source could not be turned into a catalog.
///
/// This is fatal to the caller's session and must be surfaced, not swallowed.
#[derive(Debug)]
pub enum CatalogError {
    /// The source file could not be read.
    Io(std::io::Error),
    /// The source was readable but not valid CSV.
    Malformed(csv::Error),
    /// A required header column is absent.
    MissingColumn(&'static str),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read catalog source: {err}"),
            Self::Malformed(err) => write!(f, "malformed catalog data: {err}"),
            Self::MissingColumn(name) => {
                write!(f, "catalog source is missing required column `{name}`")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::MissingColumn(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(value: csv::Error) -> Self {
        Self::Malformed(value)
    }
}

/// Immutable, validated, deduplicated collection of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    titles: Vec<Title>,
}

impl Catalog {
    /// Wraps already-cleaned records into a catalog.
    ///
    /// Callers outside the loader (tests, fixtures) are responsible for
    /// handing in records that satisfy the load invariants.
    pub fn from_titles(titles: Vec<Title>) -> Self {
        Self { titles }
    }

    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Title> {
        self.titles.iter()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
