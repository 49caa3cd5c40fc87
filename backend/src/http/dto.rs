//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies are the view-model types from [`crate::routes`], which
//! already derive Serialize/Deserialize. This module only adds the health
//! response and the query parameter structs.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    DashboardData, Leaderboard, PaintingComparison, ScanSummary, TrendSeries,
};

/// Query parameters for the dashboard and trends endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BucketingQuery {
    /// Bucket width in minutes (1..=1440)
    #[serde(default)]
    pub interval_minutes: Option<u32>,
    /// Wall-clock offset from UTC in minutes
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

pub type DashboardQuery = BucketingQuery;
pub type TrendsQuery = BucketingQuery;

/// Query parameters for the painting comparison endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ComparisonQuery {
    /// `descending`/`desc` or `ascending`/`asc`
    #[serde(default)]
    pub direction: Option<String>,
    /// Number of paintings to return
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Upstream store status
    pub store: String,
}
