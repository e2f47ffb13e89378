use atorbazar::{AppConfig, AppState, router};
use sea_orm::Database;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    let config = AppConfig::from_env()?;
    let db = Database::connect(config.database_url.as_str()).await?;
    tracing::info!("Connected to database");

    let app = router(AppState::new(db, config.pagination)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
