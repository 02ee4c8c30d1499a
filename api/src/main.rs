// Asset Compass API server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_compass_api::build_router;
use asset_compass_api::config::ApiConfig;
use asset_compass_api::db::DbPool;
use asset_compass_api::email::Mailer;
use asset_compass_api::handlers::AppContext;

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!("Configuration loaded");

    // Establish database connection pool
    let db_pool = DbPool::new(&config).await?;
    tracing::info!("Connected to database");

    let mailer = Mailer::new(&config)?;
    if mailer.is_mock() {
        tracing::warn!("RESEND_API_KEY not set; emails will only be logged");
    }

    let addr: SocketAddr = config.server_addr().parse()?;
    let app_state = Arc::new(AppContext::new(
        db_pool.get_connection().clone(),
        config,
        mailer,
    ));
    let app = build_router(app_state);

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
