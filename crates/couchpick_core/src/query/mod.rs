//! Read-only query operations over a loaded catalog.
//!
//! # Responsibility
//! - Expose the genre-ranking, mood-filter and search/recommend operations.
//! - Keep result shaping inside core; callers only render.
//!
//! # Invariants
//! - Every operation is a pure function of (catalog, input); the catalog is
//!   never mutated.
//! - "Nothing matched" is returned as empty data, not as an error.

pub mod engine;
pub mod sample;
