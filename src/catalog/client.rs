use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{CatalogResponse, Movie};
use crate::config::{CatalogConfig, SecureString};

/// Source of movie results, injected into the search controller.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search by `query`, or list popular movies when it is absent or empty.
    async fn search(&self, query: Option<&str>) -> Result<Vec<Movie>, CatalogError>;
}

/// Selects the endpoint for `query`.
///
/// Empty and absent queries both use the discover listing. The query is
/// percent-encoded, spaces included.
pub fn endpoint_url(base_url: &str, query: Option<&str>) -> String {
    let base_url = base_url.trim_end_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{}/search/movie?query={}", base_url, urlencoding::encode(q)),
        None => format!("{}/discover/movie?sort_by=popularity.desc", base_url),
    }
}

/// HTTP client for a TMDB-compatible catalog.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: Option<SecureString>,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(CatalogError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MovieCatalog for CatalogClient {
    async fn search(&self, query: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        let url = endpoint_url(&self.base_url, query);
        tracing::debug!(url = %url, "Fetching movies");

        // An unset key still sends the header; the catalog answers 401 and
        // that surfaces as a transport failure.
        let token = self.api_key.as_ref().map(SecureString::expose).unwrap_or("");
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Catalog request rejected");
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;
        let payload: CatalogResponse = serde_json::from_slice(&body)?;
        payload.into_results()
    }
}
