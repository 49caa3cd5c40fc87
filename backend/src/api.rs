//! Public API surface for the scan analytics backend.
//!
//! This file consolidates the DTO types for the HTTP API and the domain inputs.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::EventType;
pub use crate::models::PaintingCount;
pub use crate::models::RawPaintingCount;
pub use crate::models::RawScanEvent;
pub use crate::models::ScanEvent;
pub use crate::models::ScanType;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::overview::ActivityOverview;
pub use crate::routes::overview::BreakdownSlice;
pub use crate::routes::overview::ScanTypeBreakdown;
pub use crate::routes::ranking::ComparisonStats;
pub use crate::routes::ranking::Leaderboard;
pub use crate::routes::ranking::MedalTier;
pub use crate::routes::ranking::PaintingComparison;
pub use crate::routes::ranking::RankDirection;
pub use crate::routes::ranking::RankedPainting;
pub use crate::routes::summary::ImageQrRatio;
pub use crate::routes::summary::ScanSummary;
pub use crate::routes::summary::SuccessHealth;
pub use crate::routes::trends::TimeBucket;
pub use crate::routes::trends::TrendSeries;

use serde::{Deserialize, Serialize};

/// Painting identifier as assigned by the analytics backend.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PaintingId(pub String);

impl PaintingId {
    pub fn new(value: impl Into<String>) -> Self {
        PaintingId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaintingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PaintingId> for String {
    fn from(id: PaintingId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
