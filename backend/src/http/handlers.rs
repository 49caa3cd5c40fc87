//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! dashboard service for fetching and aggregation.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::debug;

use super::dto::{
    ComparisonQuery, DashboardData, DashboardQuery, HealthResponse, Leaderboard,
    PaintingComparison, ScanSummary, TrendSeries, TrendsQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::config::AggregationSettings;
use crate::routes::ranking::RankDirection;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn bucketing_settings(state: &AppState, query: &DashboardQuery) -> AggregationSettings {
    AggregationSettings {
        interval_minutes: query
            .interval_minutes
            .unwrap_or(state.settings.interval_minutes),
        utc_offset_minutes: query
            .utc_offset_minutes
            .unwrap_or(state.settings.utc_offset_minutes),
        ..state.settings.clone()
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the upstream
/// store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.store.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Dashboard Endpoints
// =============================================================================

/// GET /v1/dashboard
///
/// Every dashboard panel computed from one fetch of events and rankings.
pub async fn get_dashboard(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> HandlerResult<DashboardData> {
    let Query(query) = query?;
    let settings = bucketing_settings(&state, &query);
    debug!(
        interval = settings.interval_minutes,
        offset = settings.utc_offset_minutes,
        "dashboard request"
    );
    let data = services::get_dashboard(state.store.as_ref(), &settings).await?;
    Ok(Json(data))
}

/// GET /v1/trends
pub async fn get_trends(
    State(state): State<AppState>,
    query: Result<Query<TrendsQuery>, QueryRejection>,
) -> HandlerResult<TrendSeries> {
    let Query(query) = query?;
    let settings = bucketing_settings(&state, &query);
    let data = services::get_trends(
        state.store.as_ref(),
        settings.interval_minutes,
        settings.utc_offset_minutes,
    )
    .await?;
    Ok(Json(data))
}

/// GET /v1/summary
pub async fn get_summary(State(state): State<AppState>) -> HandlerResult<ScanSummary> {
    let data = services::get_summary(state.store.as_ref()).await?;
    Ok(Json(data))
}

/// GET /v1/paintings/top
///
/// Most-scanned leaderboard, ranked descending without truncation.
pub async fn get_top_paintings(State(state): State<AppState>) -> HandlerResult<Leaderboard> {
    let data = services::get_leaderboard(state.store.as_ref()).await?;
    Ok(Json(data))
}

/// GET /v1/paintings/comparison
///
/// Scans-by-painting ranked in the requested direction and cut to `top_n`.
pub async fn get_painting_comparison(
    State(state): State<AppState>,
    query: Result<Query<ComparisonQuery>, QueryRejection>,
) -> HandlerResult<PaintingComparison> {
    let Query(query) = query?;
    let direction = match query.direction.as_deref() {
        Some(raw) => raw.parse::<RankDirection>().map_err(AppError::BadRequest)?,
        None => state.settings.direction,
    };
    let top_n = query.top_n.unwrap_or(state.settings.top_n);

    let data = services::get_painting_comparison(state.store.as_ref(), direction, top_n).await?;
    Ok(Json(data))
}
