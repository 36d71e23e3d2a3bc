//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `couchpick_core` linkage.
//! - Print a small catalog summary for quick local sanity checks.

use couchpick_core::{load_catalog, top_genres};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("couchpick_core version={}", couchpick_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        println!("usage: couchpick <catalog.csv>");
        return ExitCode::SUCCESS;
    };

    match load_catalog(&path) {
        Ok(catalog) => {
            println!("loaded {} titles from {path}", catalog.len());
            for entry in top_genres(&catalog, 10) {
                println!("{:>5}  {}", entry.count, entry.genre);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to load catalog: {err}");
            ExitCode::FAILURE
        }
    }
}
