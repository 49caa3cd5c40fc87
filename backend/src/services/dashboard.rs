//! Dashboard orchestration: fetch once, aggregate everything from that snapshot.
//!
//! A fetch failure aborts the whole cycle; aggregators never see partial data.

use log::{debug, info};

use super::error::AnalyticsResult;
use super::overview::{activity_overview, scan_type_breakdown};
use super::ranking::{compare_paintings, leaderboard};
use super::summary::summarize;
use super::trends::bucket_events_with_offset;
use crate::config::AggregationSettings;
use crate::models::{PaintingCount, ScanEvent};
use crate::routes::dashboard::DashboardData;
use crate::routes::ranking::{Leaderboard, PaintingComparison, RankDirection};
use crate::routes::summary::ScanSummary;
use crate::routes::trends::TrendSeries;
use crate::store::EventStore;

/// Immutable inputs for one dashboard load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub events: Vec<ScanEvent>,
    pub most_scanned: Vec<PaintingCount>,
}

/// Fetch events and the most-scanned list concurrently.
pub async fn load_snapshot<S>(store: &S) -> AnalyticsResult<DashboardSnapshot>
where
    S: EventStore + ?Sized,
{
    let (events, most_scanned) =
        tokio::try_join!(store.fetch_events(), store.fetch_most_scanned())?;

    debug!(
        "Loaded snapshot from {} store: {} events, {} ranked paintings",
        store.name(),
        events.len(),
        most_scanned.len()
    );

    Ok(DashboardSnapshot {
        events,
        most_scanned,
    })
}

pub fn compute_dashboard(
    snapshot: &DashboardSnapshot,
    settings: &AggregationSettings,
) -> AnalyticsResult<DashboardData> {
    settings.validate()?;

    let trends = bucket_events_with_offset(
        &snapshot.events,
        settings.interval_minutes,
        settings.utc_offset_minutes,
    )?;
    let summary = summarize(&snapshot.events);
    let breakdown = scan_type_breakdown(&snapshot.events);
    let overview = activity_overview(&snapshot.events, &trends);
    let leaderboard = leaderboard(&snapshot.most_scanned);

    Ok(DashboardData {
        trends,
        summary,
        breakdown,
        overview,
        leaderboard,
    })
}

pub async fn get_dashboard<S>(
    store: &S,
    settings: &AggregationSettings,
) -> AnalyticsResult<DashboardData>
where
    S: EventStore + ?Sized,
{
    // Reject bad parameters before touching the network
    settings.validate()?;
    let snapshot = load_snapshot(store).await?;
    let data = compute_dashboard(&snapshot, settings)?;
    info!(
        "Dashboard computed: {} events, {} buckets, {} paintings",
        data.summary.total_events,
        data.trends.buckets.len(),
        data.leaderboard.total
    );
    Ok(data)
}

pub async fn get_trends<S>(
    store: &S,
    interval_minutes: u32,
    utc_offset_minutes: i32,
) -> AnalyticsResult<TrendSeries>
where
    S: EventStore + ?Sized,
{
    AggregationSettings {
        interval_minutes,
        utc_offset_minutes,
        ..Default::default()
    }
    .validate()?;
    let events = store.fetch_events().await?;
    bucket_events_with_offset(&events, interval_minutes, utc_offset_minutes)
}

pub async fn get_summary<S>(store: &S) -> AnalyticsResult<ScanSummary>
where
    S: EventStore + ?Sized,
{
    let events = store.fetch_events().await?;
    Ok(summarize(&events))
}

pub async fn get_leaderboard<S>(store: &S) -> AnalyticsResult<Leaderboard>
where
    S: EventStore + ?Sized,
{
    let most_scanned = store.fetch_most_scanned().await?;
    Ok(leaderboard(&most_scanned))
}

pub async fn get_painting_comparison<S>(
    store: &S,
    direction: RankDirection,
    top_n: usize,
) -> AnalyticsResult<PaintingComparison>
where
    S: EventStore + ?Sized,
{
    let counts = store.fetch_scans_by_painting().await?;
    Ok(compare_paintings(&counts, direction, top_n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventType, ScanType};
    use crate::services::error::AnalyticsError;
    use crate::store::{LocalEventStore, StoreError};
    use chrono::{TimeZone, Utc};

    fn seeded_store() -> LocalEventStore {
        let store = LocalEventStore::new();
        store.seed_events(vec![
            ScanEvent::new(
                Utc.with_ymd_and_hms(2024, 1, 1, 10, 5, 0).unwrap(),
                ScanType::Image,
                EventType::ScanSuccess,
            ),
            ScanEvent::new(
                Utc.with_ymd_and_hms(2024, 1, 1, 10, 50, 0).unwrap(),
                ScanType::Qr,
                EventType::ScanSuccess,
            ),
            ScanEvent::new(
                Utc.with_ymd_and_hms(2024, 1, 1, 11, 10, 0).unwrap(),
                ScanType::Image,
                EventType::ScanFail,
            ),
        ]);
        store.seed_most_scanned(vec![
            PaintingCount::new("A", 2),
            PaintingCount::new("B", 6),
        ]);
        store.seed_scans_by_painting(vec![
            PaintingCount::new("A", 2),
            PaintingCount::new("B", 6),
            PaintingCount::new("C", 1),
        ]);
        store
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let store = seeded_store();
        let data = get_dashboard(&store, &AggregationSettings::default())
            .await
            .unwrap();

        assert_eq!(data.trends.buckets.len(), 2);
        assert_eq!(data.summary.total_success_scans, 2);
        assert_eq!(data.summary.success_rate_percent, 67);
        assert_eq!(data.breakdown.image, 2);
        assert_eq!(data.overview.active_periods, 2);
        assert_eq!(data.leaderboard.entries[0].id.as_str(), "B");
    }

    #[tokio::test]
    async fn test_get_dashboard_fetch_failure_aborts() {
        let store = seeded_store();
        store.set_available(false);
        let err = get_dashboard(&store, &AggregationSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::Store(StoreError::UnavailableError { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_settings_checked_before_fetch() {
        let store = seeded_store();
        store.set_available(false);
        let settings = AggregationSettings {
            interval_minutes: 0,
            ..Default::default()
        };
        let err = get_dashboard(&store, &settings).await.unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInterval(0)));
    }

    #[tokio::test]
    async fn test_get_trends_and_summary() {
        let store = seeded_store();
        let trends = get_trends(&store, 30, 0).await.unwrap();
        assert_eq!(trends.buckets.len(), 3);

        let summary = get_summary(&store).await.unwrap();
        assert_eq!(summary.failures, 1);
    }

    #[tokio::test]
    async fn test_get_painting_comparison() {
        let store = seeded_store();
        let comparison = get_painting_comparison(&store, RankDirection::Ascending, 2)
            .await
            .unwrap();
        assert_eq!(comparison.entries.len(), 2);
        assert_eq!(comparison.entries[0].id.as_str(), "C");
        assert_eq!(comparison.stats.total_scans, 3);
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let store: std::sync::Arc<dyn EventStore> = std::sync::Arc::new(seeded_store());
        let board = get_leaderboard(store.as_ref()).await.unwrap();
        assert_eq!(board.total, 2);
    }

    #[test]
    fn test_compute_dashboard_empty_snapshot() {
        let data =
            compute_dashboard(&DashboardSnapshot::default(), &AggregationSettings::default())
                .unwrap();
        assert!(data.trends.is_empty());
        assert_eq!(data.summary.failure_rate_percent, 100);
        assert_eq!(data.overview.active_periods, 0);
        assert!(data.leaderboard.entries.is_empty());
    }
}
