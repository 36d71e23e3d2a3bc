//! Random sampling of query results.
//!
//! # Responsibility
//! - Pick up to `n` records uniformly without replacement.
//!
//! # Invariants
//! - Inputs shorter than `n` return every element instead of erroring.
//! - Sampling is unseeded; suggestion output varies across calls while the
//!   underlying match set stays deterministic.

use rand::seq::SliceRandom;

/// Returns `min(n, items.len())` elements chosen uniformly without
/// replacement.
pub fn sample<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    let mut rng = rand::thread_rng();
    items.choose_multiple(&mut rng, n).cloned().collect()
}
