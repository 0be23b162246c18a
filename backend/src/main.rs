use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod rest;

use config::ServerConfig;
use db::DbConnection;
use domain::ReservationService;
use rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    info!("Loaded configuration: {:?}", config);

    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;
    if db.seed_demo_data(chrono::Local::now().date_naive()).await? {
        info!("Database was empty, demo data inserted");
    }

    let state = AppState::new(ReservationService::new(db));
    let app = rest::create_router(state, &config.allowed_origin, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
