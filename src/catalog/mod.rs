//! Movie catalog client.
//!
//! Two endpoints are used: free-text search when the user has typed
//! something, and the popularity-sorted discover listing otherwise.

mod client;
mod error;
mod types;

pub use client::{endpoint_url, CatalogClient, MovieCatalog};
pub use error::{CatalogError, FALLBACK_BACKEND_MESSAGE, FETCH_FAILED_MESSAGE};
pub use types::{poster_url, CatalogResponse, Movie};
