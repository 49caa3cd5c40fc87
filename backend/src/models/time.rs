use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Naive layouts accepted when the source omits the UTC offset. Read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an instant reported by the analytics backend.
///
/// RFC 3339 strings (`2024-01-01T10:05:00Z`, `2024-01-01T10:05:00.123+02:00`)
/// are tried first, then the naive layouts in [`NAIVE_FORMATS`].
/// Returns `None` for blank or unparseable input.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Build the fixed offset used for wall-clock bucketing.
///
/// Accepts offsets strictly within one day; `None` otherwise.
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    if minutes.unsigned_abs() >= 24 * 60 {
        return None;
    }
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}

/// 12-hour clock label for a bucket start, e.g. `"10:00 AM"`.
pub fn clock_label(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant.with_timezone(&offset).format("%I:%M %p").to_string()
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
