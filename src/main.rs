use anyhow::Context;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::database::{seed, ActivityRegistry};
use activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Config + catalog
    let config = AppConfig::from_env()?;
    let catalog = seed::catalog_from(config.seed_path.as_deref())?;
    tracing::info!(
        activities = catalog.len(),
        seed = ?config.seed_path,
        "activity catalog loaded"
    );
    let registry = ActivityRegistry::new(catalog);

    // 3. App
    let app = web::build_app(registry, &config.static_dir);

    // 4. Serve, falling back to the next port when the configured one is taken
    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_bind_addr()
                .ok_or_else(|| anyhow::anyhow!("could not bind {}: {}", addr, e))?;
            tracing::warn!("could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(&fallback)
                .await
                .with_context(|| format!("binding fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    tracing::info!("serving on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
