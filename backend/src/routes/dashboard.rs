use serde::{Deserialize, Serialize};

use super::overview::{ActivityOverview, ScanTypeBreakdown};
use super::ranking::Leaderboard;
use super::summary::ScanSummary;
use super::trends::TrendSeries;

/// Everything the dashboard page renders from one load cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub trends: TrendSeries,
    pub summary: ScanSummary,
    pub breakdown: ScanTypeBreakdown,
    pub overview: ActivityOverview,
    pub leaderboard: Leaderboard,
}

/// Route path for the dashboard endpoint (under `/v1`).
pub const GET_DASHBOARD: &str = "/dashboard";
