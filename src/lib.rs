//! Terminal movie search client.
//!
//! Typed queries are debounced, sent to a TMDB-compatible catalog and the
//! results rendered as cards. Successful searches bump a per-term counter
//! in a document store, which feeds the trending panel.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod search;
pub mod trends;
pub mod ui;
