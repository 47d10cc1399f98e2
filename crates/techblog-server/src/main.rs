//! Tech Blogs server binary.

use anyhow::Context;
use techblog_server::{
    AppState, Settings, metrics::init_metrics, run_server, settings::StoreBackend,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().context("Failed to load configuration")?;
    let addr = settings.socket_addr()?;

    tracing::info!("Starting Tech Blogs server v{}", techblog_server::version());
    tracing::info!("Store backend: {:?}", settings.store.backend);

    if settings.store.backend == StoreBackend::Mongo {
        tracing::info!("Database: {}", settings.store.database);
        tracing::info!("Collection: {}", settings.store.collection);
        if settings.store.uri.is_none() {
            tracing::warn!("No store URI configured (set MONGO_URI or BLOG_STORE__URI)");
        }
    }

    tracing::info!("Cache TTL: {}s", settings.cache.ttl_seconds);

    let prometheus_handle = init_metrics().context("Failed to install metrics recorder")?;

    let store = settings
        .build_store()
        .context("Failed to build post store")?;

    let state = AppState::new(store, settings.cache.to_cache_config())
        .with_credits(settings.credits.clone());

    run_server(addr, state, prometheus_handle).await?;

    Ok(())
}
