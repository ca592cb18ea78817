use anyhow::Context;
use clap::Parser;
use moviescout::catalog::CatalogClient;
use moviescout::config::Config;
use moviescout::logging::init_tracing;
use moviescout::trends::{AppwriteBackend, DocumentBackend, MemoryBackend, TrendStore};
use moviescout::ui::runtime::{self, Services};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "moviescout", version, about = "Search movies from the terminal")]
struct Args {
    /// Path to config file (default: ~/.config/moviescout/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Quiet period in milliseconds before a typed query is searched
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Start with this query instead of the popular listing
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config_path = args.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_with_env(&config_path)?;
    if let Some(debounce_ms) = args.debounce_ms {
        config.ui.debounce_ms = debounce_ms;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let _enter = runtime.enter();

    let services = build_services(&config)?;
    tracing::info!(
        catalog = %config.catalog.base_url,
        trends = services.trends.backend_name(),
        "Starting moviescout"
    );

    runtime::run(&config, services, args.query)?;
    Ok(())
}

fn build_services(config: &Config) -> anyhow::Result<Services> {
    let catalog = CatalogClient::new(&config.catalog).context("Failed to create catalog client")?;

    let backend: Arc<dyn DocumentBackend> = if config.trends.is_unset() {
        tracing::warn!("Trend store not configured; search counts are kept in memory");
        Arc::new(MemoryBackend::new())
    } else {
        Arc::new(
            AppwriteBackend::new(&config.trends).context("Failed to create trend store client")?,
        )
    };
    let trends = TrendStore::new(backend, config.catalog.image_base_url.clone());

    Ok(Services {
        catalog: Arc::new(catalog),
        trends: Arc::new(trends),
    })
}
