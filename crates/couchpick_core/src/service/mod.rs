//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate query and sampling calls into the API UI layers consume.
//! - Keep presentation layers decoupled from loader and query details.

pub mod catalog_service;
