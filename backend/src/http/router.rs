//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::dashboard::GET_DASHBOARD;
use crate::routes::ranking::{GET_PAINTING_COMPARISON, GET_TOP_PAINTINGS};
use crate::routes::summary::GET_SUMMARY;
use crate::routes::trends::GET_TRENDS;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The dashboard is read-only and served to browsers on other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(GET_DASHBOARD, get(handlers::get_dashboard))
        .route(GET_TRENDS, get(handlers::get_trends))
        .route(GET_SUMMARY, get(handlers::get_summary))
        .route(GET_TOP_PAINTINGS, get(handlers::get_top_paintings))
        .route(GET_PAINTING_COMPARISON, get(handlers::get_painting_comparison));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AggregationSettings;
    use crate::store::{EventStore, LocalEventStore};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let store = Arc::new(LocalEventStore::new()) as Arc<dyn EventStore>;
        let state = AppState::new(store, AggregationSettings::default());
        let _router = create_router(state);
    }
}
