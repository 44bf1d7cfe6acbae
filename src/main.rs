use anyhow::Context;
use clap::Parser;
use project_recommender::catalog::Catalog;
use project_recommender::config::Config;
use project_recommender::search::engine::Recommender;
use project_recommender::search::handlers::router;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level()).into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1. Catalog:
    tracing::info!("Loading catalog from {}", config.catalog.display());
    let catalog = Catalog::from_path(&config.catalog)
        .with_context(|| format!("loading catalog {}", config.catalog.display()))?;
    tracing::info!("Loaded {} projects", catalog.len());

    // 2. Similarity model:
    let recommender = Arc::new(
        Recommender::new(catalog, config.neighbors).context("building recommender")?,
    );

    // 3. HTTP Router:
    let app = router(recommender);

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
