use serde::{Deserialize, Serialize};

use crate::catalog::error::{CatalogError, FALLBACK_BACKEND_MESSAGE};

/// A movie as returned by the catalog's search and discover endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Average rating on a 0–10 scale.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// ISO date, e.g. "2022-03-01". The catalog sends "" for unknown dates.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: String,
}

/// Response body shared by the search and discover endpoints.
///
/// Besides `results`, two in-band failure conventions are recognized:
/// `{"success": false, "status_message": ...}` and
/// `{"Response": "False", "Error": ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default, rename = "Response")]
    pub response: Option<String>,
    #[serde(default, rename = "Error")]
    pub error: Option<String>,
}

impl CatalogResponse {
    /// True when the payload itself reports a failure.
    pub fn is_failure(&self) -> bool {
        self.success == Some(false) || self.response.as_deref() == Some("False")
    }

    /// Converts the payload into the result list or a backend error.
    ///
    /// A missing `results` field on a non-failure payload is an empty list.
    pub fn into_results(self) -> Result<Vec<Movie>, CatalogError> {
        if self.is_failure() {
            let message = self
                .error
                .or(self.status_message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_BACKEND_MESSAGE.to_string());
            return Err(CatalogError::Backend { message });
        }
        Ok(self.results.unwrap_or_default())
    }
}

/// Builds a poster URL by appending `poster_path` to `image_base`.
///
/// A missing path yields the bare base URL.
pub fn poster_url(image_base: &str, poster_path: Option<&str>) -> String {
    format!("{}{}", image_base, poster_path.unwrap_or(""))
}
