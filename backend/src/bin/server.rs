//! Scan Analytics HTTP Server Binary
//!
//! Main entry point for the dashboard REST API. It loads configuration,
//! builds the event store, sets up the HTTP router and starts serving.
//!
//! # Usage
//!
//! ```bash
//! # Against the analytics API (default)
//! ANALYTICS_BASE_URL=http://localhost:3001/api/analytics \
//!   cargo run --bin scan-analytics-server
//!
//! # With an empty in-memory store
//! STORE_TYPE=local cargo run --bin scan-analytics-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path to a TOML config file (default: search for `dashboard.toml`)
//! - `STORE_TYPE`: `http` or `local`
//! - `ANALYTICS_BASE_URL`: Base URL of the analytics API
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use scan_analytics::config::DashboardConfig;
use scan_analytics::http::{create_router, AppState};
use scan_analytics::store::StoreFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting scan analytics server");

    let config = DashboardConfig::load()?;
    config.aggregation.validate()?;

    let store = StoreFactory::create(&config.store)?;
    info!("Event store initialized ({})", store.name());

    let state = AppState::new(store, config.aggregation.clone());
    let app = create_router(state);

    let addr = config.server.socket_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
