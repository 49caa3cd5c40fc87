use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// Trends types
// =========================================================

/// Scan counts for one time bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBucket {
    /// Bucket start on a 12-hour clock, e.g. "10:00 AM".
    pub label: String,
    /// Floored instant identifying the bucket.
    pub bucket_start: DateTime<Utc>,
    pub total: usize,
    pub image_count: usize,
    pub qr_count: usize,
}

impl TimeBucket {
    /// Events in the bucket that are neither image nor QR scans.
    pub fn other_count(&self) -> usize {
        self.total - self.image_count - self.qr_count
    }
}

/// Sparse, ascending series of time buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub interval_minutes: u32,
    pub utc_offset_minutes: i32,
    pub buckets: Vec<TimeBucket>,
    /// Events left out because their timestamp was missing or unparseable.
    pub malformed_timestamps: usize,
}

impl TrendSeries {
    /// Number of events that landed in a bucket.
    pub fn bucketed_events(&self) -> usize {
        self.buckets.iter().map(|b| b.total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Route path for the trends endpoint (under `/v1`).
pub const GET_TRENDS: &str = "/trends";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bucket(total: usize, image: usize, qr: usize) -> TimeBucket {
        TimeBucket {
            label: "10:00 AM".to_string(),
            bucket_start: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            total,
            image_count: image,
            qr_count: qr,
        }
    }

    #[test]
    fn test_other_count() {
        assert_eq!(bucket(5, 2, 1).other_count(), 2);
        assert_eq!(bucket(3, 2, 1).other_count(), 0);
    }

    #[test]
    fn test_series_bucketed_events() {
        let series = TrendSeries {
            interval_minutes: 60,
            utc_offset_minutes: 0,
            buckets: vec![bucket(2, 1, 1), bucket(1, 1, 0)],
            malformed_timestamps: 4,
        };
        assert_eq!(series.bucketed_events(), 3);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_bucket_serializes_camel_case() {
        let value = serde_json::to_value(bucket(2, 1, 1)).unwrap();
        assert_eq!(value["bucketStart"], "2024-01-01T10:00:00Z");
        assert_eq!(value["imageCount"], 1);
        assert_eq!(value["qrCount"], 1);
    }
}
