mod api;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState, SearchFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = steelseek_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = Arc::new(steelseek_core::load_catalog(&config.catalog_path)?);
    tracing::info!(
        hubs = catalog.hubs.len(),
        sellers = catalog.sellers.len(),
        products = catalog.products.len(),
        warehouses = catalog.warehouses.len(),
        "catalog loaded"
    );

    let fetcher = if config.scrape_enabled {
        let client = steelseek_scraper::SearchClient::new(
            &config.search_base_url,
            config.search_timeout_secs,
            &config.search_user_agent,
        )?;
        SearchFetcher::web(client, Duration::from_secs(config.search_timeout_secs))
    } else {
        tracing::info!("external search scraping disabled; serving known sellers only");
        SearchFetcher::Disabled
    };

    let app = build_app(AppState { catalog, fetcher }, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
