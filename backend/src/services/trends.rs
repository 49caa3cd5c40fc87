//! Time bucketing of scan events for the trend chart.
//!
//! Buckets are found by flooring the minute-of-hour to a multiple of the
//! interval while year, month, day and hour stay fixed. Intervals that do
//! not divide 60 are therefore clipped at the hour boundary (a 45 minute
//! bucket starting at :45 only spans 15 minutes), and intervals of an hour
//! or more collapse to hourly buckets. Buckets are sparse: periods without
//! events produce nothing.

use chrono::{DateTime, Duration, FixedOffset, Timelike, Utc};
use log::{debug, warn};
use std::collections::BTreeMap;

use super::error::{AnalyticsError, AnalyticsResult};
use crate::models::{clock_label, offset_from_minutes, ScanEvent, ScanType};
use crate::routes::trends::{TimeBucket, TrendSeries};

pub const MIN_INTERVAL_MINUTES: u32 = 1;
pub const MAX_INTERVAL_MINUTES: u32 = 24 * 60;
pub const DEFAULT_INTERVAL_MINUTES: u32 = 60;

pub fn validate_interval(interval_minutes: u32) -> AnalyticsResult<()> {
    if (MIN_INTERVAL_MINUTES..=MAX_INTERVAL_MINUTES).contains(&interval_minutes) {
        Ok(())
    } else {
        Err(AnalyticsError::InvalidInterval(interval_minutes))
    }
}

/// Start of the bucket containing `instant`, with wall-clock fields taken in `offset`.
///
/// `interval_minutes` must already be validated (non-zero).
pub fn bucket_start(
    instant: DateTime<Utc>,
    interval_minutes: u32,
    offset: FixedOffset,
) -> DateTime<Utc> {
    let local = instant.with_timezone(&offset);
    let excess_minutes = local.minute() % interval_minutes;
    instant
        - Duration::minutes(i64::from(excess_minutes))
        - Duration::seconds(i64::from(local.second()))
        - Duration::nanoseconds(i64::from(local.nanosecond()))
}

#[derive(Default)]
struct BucketCounts {
    total: usize,
    image: usize,
    qr: usize,
}

/// Bucket events on the UTC wall clock.
pub fn bucket_events(events: &[ScanEvent], interval_minutes: u32) -> AnalyticsResult<TrendSeries> {
    bucket_events_with_offset(events, interval_minutes, 0)
}

/// Bucket events on the wall clock of a fixed UTC offset.
///
/// Events without a usable timestamp are left out and reported in
/// [`TrendSeries::malformed_timestamps`].
pub fn bucket_events_with_offset(
    events: &[ScanEvent],
    interval_minutes: u32,
    utc_offset_minutes: i32,
) -> AnalyticsResult<TrendSeries> {
    validate_interval(interval_minutes)?;
    let offset = offset_from_minutes(utc_offset_minutes)
        .ok_or(AnalyticsError::InvalidOffset(utc_offset_minutes))?;

    let mut counts: BTreeMap<DateTime<Utc>, BucketCounts> = BTreeMap::new();
    let mut malformed = 0usize;

    for event in events {
        let Some(timestamp) = event.timestamp else {
            malformed += 1;
            continue;
        };

        let entry = counts
            .entry(bucket_start(timestamp, interval_minutes, offset))
            .or_default();
        entry.total += 1;
        match event.scan_type {
            ScanType::Image => entry.image += 1,
            ScanType::Qr => entry.qr += 1,
            ScanType::Other(_) => {}
        }
    }

    if malformed > 0 {
        warn!(
            "{} of {} events have no usable timestamp and were not bucketed",
            malformed,
            events.len()
        );
    }

    let buckets: Vec<TimeBucket> = counts
        .into_iter()
        .map(|(start, c)| TimeBucket {
            label: clock_label(start, offset),
            bucket_start: start,
            total: c.total,
            image_count: c.image,
            qr_count: c.qr,
        })
        .collect();

    debug!(
        "Bucketed {} events into {} buckets of {} min (offset {} min)",
        events.len() - malformed,
        buckets.len(),
        interval_minutes,
        utc_offset_minutes
    );

    Ok(TrendSeries {
        interval_minutes,
        utc_offset_minutes,
        buckets,
        malformed_timestamps: malformed,
    })
}

#[cfg(test)]
#[path = "trends_tests.rs"]
mod trends_tests;
