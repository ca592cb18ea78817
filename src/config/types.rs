use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::credentials::SecureString;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub trends: TrendsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Movie catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL for the catalog API (e.g., "https://api.themoviedb.org/3").
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,
    /// Prefix for poster image URLs; the poster path is appended verbatim.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Bearer token sent as `Authorization: Bearer <key>`.
    #[serde(default)]
    pub api_key: Option<SecureString>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Remote document store used for search popularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsConfig {
    /// REST endpoint of the document database (e.g., "https://nyc.cloud.appwrite.io/v1").
    #[serde(default = "default_trends_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub database_id: Option<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
    /// Server API key. Optional; collections with public permissions work without it.
    #[serde(default)]
    pub api_key: Option<SecureString>,
    /// Number of terms shown in the trending panel.
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Quiet period before a typed query triggers a fetch.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Redraw interval when no events arrive.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_catalog_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_timeout_seconds() -> u32 {
    30
}

fn default_trends_endpoint() -> String {
    "https://nyc.cloud.appwrite.io/v1".to_string()
}

fn default_trending_limit() -> usize {
    5
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_base_url(),
            image_base_url: default_image_base_url(),
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_trends_endpoint(),
            project_id: None,
            database_id: None,
            collection_id: None,
            api_key: None,
            trending_limit: default_trending_limit(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }
}

impl TrendsConfig {
    /// True when none of the remote identifiers are set.
    ///
    /// Partially configured stores still count as remote so that the
    /// missing pieces surface as request errors in the log.
    pub fn is_unset(&self) -> bool {
        self.project_id.is_none() && self.database_id.is_none() && self.collection_id.is_none()
    }
}

impl UiConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
