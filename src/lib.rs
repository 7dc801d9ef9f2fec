//! Voice-driven shoe search backend.
//!
//! Free text is turned into [`models::SearchFilters`] by a [`extract::FilterExtractor`], and the
//! filters are run against an in-memory [`catalog::Catalog`] by the [`matcher`]. When nothing
//! matches exactly, the matcher retries with only size and gender and flags the result as a
//! fallback.

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod models;
pub mod routes;
