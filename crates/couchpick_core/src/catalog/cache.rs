//! Process-wide load-once catalog cache.
//!
//! # Responsibility
//! - Guarantee at most one load per distinct source path.
//! - Hand out shared read-only handles to loaded catalogs.
//!
//! # Invariants
//! - Cache keys are canonicalized paths, so aliases of one file share an
//!   entry.
//! - The map lock is held across the load, keeping the at-most-once
//!   guarantee under concurrent callers.

use super::{load_catalog, Catalog, CatalogResult};
use log::info;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

static LOADED_CATALOGS: Lazy<Mutex<HashMap<PathBuf, Arc<Catalog>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Returns the catalog for `path`, loading it on first use.
///
/// Repeated calls with the same source return the same shared instance;
/// loading is idempotent, so callers may treat the handle as equivalent to
/// a fresh [`load_catalog`] result.
pub fn cached_catalog(path: impl AsRef<Path>) -> CatalogResult<Arc<Catalog>> {
    let key = path.as_ref().canonicalize()?;

    let mut loaded = LOADED_CATALOGS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(found) = loaded.get(&key) {
        info!(
            "event=catalog_cache module=catalog status=hit path={}",
            key.display()
        );
        return Ok(Arc::clone(found));
    }

    info!(
        "event=catalog_cache module=catalog status=miss path={}",
        key.display()
    );
    let catalog = Arc::new(load_catalog(&key)?);
    loaded.insert(key, Arc::clone(&catalog));
    Ok(catalog)
}
