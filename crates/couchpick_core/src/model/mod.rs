//! Domain model for catalog entries.
//!
//! # Responsibility
//! - Define the canonical title record produced by the loader.
//! - Keep field-derivation rules (genre, release year) in one place.
//!
//! # Invariants
//! - Every loaded `Title` has a non-empty title, non-empty derived genre and
//!   a coerced release year.
//! - Records are never mutated after the loader returns them.

pub mod title;
