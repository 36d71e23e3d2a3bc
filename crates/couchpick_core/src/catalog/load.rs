//! CSV loading and cleaning.
//!
//! # Responsibility
//! - Parse the delimited source into raw rows.
//! - Apply the cleaning pass: dedup, genre derivation, year coercion,
//!   required-field validation.
//!
//! # Invariants
//! - Duplicate removal compares the full raw row, not just modeled columns.
//! - Cleaning steps run in a fixed order so repeated loads of the same
//!   source yield identical catalogs.

use super::{Catalog, CatalogError, CatalogResult};
use crate::model::title::RawTitleRow;
use log::{error, info};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

const REQUIRED_COLUMNS: [&str; 3] = ["title", "listed_in", "release_year"];

/// Loads and cleans a catalog from a CSV file.
///
/// # Contract
/// - The header row must contain `title`, `listed_in` and `release_year`;
///   `description` is optional.
/// - Exact-duplicate rows are removed; rows failing cleaning are dropped.
/// - Row order of surviving records matches the source.
///
/// # Side effects
/// - Emits `catalog_load` logging events with duration and record counts.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=catalog_load module=catalog status=start path={}",
        path.display()
    );

    match read_and_clean(path) {
        Ok(catalog) => {
            info!(
                "event=catalog_load module=catalog status=ok path={} records={} duration_ms={}",
                path.display(),
                catalog.len(),
                started_at.elapsed().as_millis()
            );
            Ok(catalog)
        }
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn read_and_clean(path: &Path) -> CatalogResult<Catalog> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(CatalogError::MissingColumn(column));
        }
    }

    let mut seen_rows: HashSet<Vec<String>> = HashSet::new();
    let mut titles = Vec::new();

    for record in reader.records() {
        let record = record?;

        // Dedup over every source column so rows differing only in an
        // unmodeled column are not collapsed.
        let raw_fields: Vec<String> = record.iter().map(str::to_string).collect();
        if !seen_rows.insert(raw_fields) {
            continue;
        }

        let raw: RawTitleRow = record.deserialize(Some(&headers))?;
        if let Some(title) = raw.clean() {
            titles.push(title);
        }
    }

    Ok(Catalog::from_titles(titles))
}
