//! Application configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! environment variables. Nothing is validated at startup: a missing API key
//! or collection id only shows up later as a failed request.

mod credentials;
mod env;
mod loader;
mod types;

pub use credentials::SecureString;
pub use env::{apply_env_overrides, ENV_OVERRIDES};
pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, TrendsConfig, UiConfig};
