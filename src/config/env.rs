//! Environment variable overrides.
//!
//! Each setting has a primary variable and the `VITE_`-prefixed name used by
//! older web deployments as a fallback. Empty values are ignored.

use crate::config::credentials::SecureString;
use crate::config::types::Config;

/// Recognized variables as `(primary, fallback)` pairs.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("TMDB_API_KEY", "VITE_TMDB_API_KEY"),
    ("APPWRITE_ENDPOINT", "VITE_APPWRITE_ENDPOINT"),
    ("APPWRITE_PROJECT_ID", "VITE_APPWRITE_PROJECT_ID"),
    ("APPWRITE_DATABASE_ID", "VITE_APPWRITE_DATABASE_ID"),
    ("APPWRITE_COLLECTION_ID", "VITE_APPWRITE_COLLECTION_ID"),
    ("APPWRITE_API_KEY", "VITE_APPWRITE_API_KEY"),
];

/// Apply overrides from `lookup` onto `config`.
///
/// `lookup` is usually `|name| std::env::var(name).ok()`; tests pass a map.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let resolve = |primary: &str, fallback: &str| {
        lookup(primary)
            .filter(|v| !v.is_empty())
            .or_else(|| lookup(fallback).filter(|v| !v.is_empty()))
    };

    for (primary, fallback) in ENV_OVERRIDES {
        let Some(value) = resolve(primary, fallback) else {
            continue;
        };
        match *primary {
            "TMDB_API_KEY" => config.catalog.api_key = Some(SecureString::new(value)),
            "APPWRITE_ENDPOINT" => config.trends.endpoint = value,
            "APPWRITE_PROJECT_ID" => config.trends.project_id = Some(value),
            "APPWRITE_DATABASE_ID" => config.trends.database_id = Some(value),
            "APPWRITE_COLLECTION_ID" => config.trends.collection_id = Some(value),
            "APPWRITE_API_KEY" => config.trends.api_key = Some(SecureString::new(value)),
            _ => {}
        }
    }
}
