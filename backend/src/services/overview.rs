use crate::models::{ScanEvent, ScanType};
use crate::routes::overview::{ActivityOverview, ScanTypeBreakdown};
use crate::routes::trends::TrendSeries;

/// Count every event by scan type, whatever its outcome.
pub fn scan_type_breakdown(events: &[ScanEvent]) -> ScanTypeBreakdown {
    events
        .iter()
        .fold(ScanTypeBreakdown::default(), |mut acc, event| {
            match event.scan_type {
                ScanType::Image => acc.image += 1,
                ScanType::Qr => acc.qr += 1,
                ScanType::Other(_) => acc.other += 1,
            }
            acc
        })
}

/// Headline counts; `active_periods` is the number of non-empty buckets.
pub fn activity_overview(events: &[ScanEvent], trends: &TrendSeries) -> ActivityOverview {
    let breakdown = scan_type_breakdown(events);
    ActivityOverview {
        total_events: events.len(),
        image_events: breakdown.image,
        qr_events: breakdown.qr,
        active_periods: trends.buckets.len(),
    }
}
