use eventsify::{app, config::ServerConfig, seed_catalog};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        share_base_url = %config.share_base_url,
        seed_path = ?config.seed_path,
        "Configuration loaded"
    );

    let event_dao = seed_catalog(&config).await?;
    info!(events = event_dao.len().await, "Event catalog ready");

    let app = app(event_dao, config.share_base_url.clone());

    info!("🚀 Eventsify server starting on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
