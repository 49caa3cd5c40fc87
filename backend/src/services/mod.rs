//! Service layer: aggregation and orchestration.
//!
//! The aggregators (`trends`, `summary`, `ranking`, `overview`) are pure
//! functions over normalized inputs. `dashboard` fetches from an
//! [`crate::store::EventStore`] and hands one snapshot to them.

pub mod dashboard;
pub mod error;
pub mod numeric;
pub mod overview;
pub mod ranking;
pub mod summary;
pub mod trends;

pub use dashboard::{
    compute_dashboard, get_dashboard, get_leaderboard, get_painting_comparison, get_summary,
    get_trends, load_snapshot, DashboardSnapshot,
};
pub use error::{AnalyticsError, AnalyticsResult};
pub use overview::{activity_overview, scan_type_breakdown};
pub use ranking::{bar_color, compare_paintings, comparison_stats, leaderboard, rank, BAR_PALETTE};
pub use summary::{summarize, HEALTHY_SUCCESS_RATE};
pub use trends::{
    bucket_events, bucket_events_with_offset, bucket_start, validate_interval,
    DEFAULT_INTERVAL_MINUTES, MAX_INTERVAL_MINUTES, MIN_INTERVAL_MINUTES,
};
