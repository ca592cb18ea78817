use thiserror::Error;

/// Shown for every transport-level failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies. Please try again later.";

/// Used when the catalog reports a failure without a message.
pub const FALLBACK_BACKEND_MESSAGE: &str = "Failed to fetch movies";

/// Errors returned by the catalog client.
///
/// Every variant except `Backend` is a transport failure: the request never
/// produced a usable payload.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, TLS or body read failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response.
    #[error("Catalog returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not the expected JSON.
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload itself signalled failure.
    #[error("Catalog reported failure: {message}")]
    Backend { message: String },
}

impl CatalogError {
    pub fn is_transport(&self) -> bool {
        !matches!(self, CatalogError::Backend { .. })
    }

    /// Text shown in the result view.
    pub fn user_message(&self) -> &str {
        match self {
            CatalogError::Backend { message } => message,
            _ => FETCH_FAILED_MESSAGE,
        }
    }
}
