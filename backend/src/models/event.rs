//! Scan events as reported by the analytics backend.
//!
//! [`RawScanEvent`] mirrors the wire record, where every field may be missing.
//! [`ScanEvent`] is the normalized form consumed by the aggregation services.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::parse_instant;

/// How a visitor identified the painting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScanType {
    Image,
    Qr,
    /// Any value the dashboard does not chart separately.
    Other(String),
}

impl ScanType {
    pub fn as_str(&self) -> &str {
        match self {
            ScanType::Image => "image",
            ScanType::Qr => "qr",
            ScanType::Other(value) => value,
        }
    }
}

impl From<&str> for ScanType {
    fn from(value: &str) -> Self {
        match value {
            "image" => ScanType::Image,
            "qr" => ScanType::Qr,
            other => ScanType::Other(other.to_string()),
        }
    }
}

impl From<String> for ScanType {
    fn from(value: String) -> Self {
        ScanType::from(value.as_str())
    }
}

impl From<ScanType> for String {
    fn from(value: ScanType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome or interaction recorded by the scanner app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    ScanSuccess,
    ScanFail,
    PlayAudioGuide,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::ScanSuccess => "scan_success",
            EventType::ScanFail => "scan_fail",
            EventType::PlayAudioGuide => "play_audio_guide",
            EventType::Other(value) => value,
        }
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        match value {
            "scan_success" => EventType::ScanSuccess,
            "scan_fail" => EventType::ScanFail,
            "play_audio_guide" => EventType::PlayAudioGuide,
            other => EventType::Other(other.to_string()),
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        EventType::from(value.as_str())
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scan event record exactly as the backend serves it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScanEvent {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub scan_type: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
}

/// Normalized scan event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    /// `None` when the source value was missing or could not be parsed.
    pub timestamp: Option<DateTime<Utc>>,
    pub scan_type: ScanType,
    pub event_type: EventType,
}

impl ScanEvent {
    pub fn new(timestamp: DateTime<Utc>, scan_type: ScanType, event_type: EventType) -> Self {
        Self {
            timestamp: Some(timestamp),
            scan_type,
            event_type,
        }
    }

    /// Whether the timestamp is usable for time bucketing.
    pub fn has_valid_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }
}

impl From<RawScanEvent> for ScanEvent {
    fn from(raw: RawScanEvent) -> Self {
        let timestamp = raw.timestamp.as_deref().and_then(parse_instant);
        ScanEvent {
            timestamp,
            scan_type: ScanType::from(raw.scan_type.unwrap_or_default()),
            event_type: EventType::from(raw.event_type.unwrap_or_default()),
        }
    }
}

/// Normalize a batch of wire events.
///
/// Malformed timestamps are kept (as `None`) so the summary still counts the
/// event; one warning is logged per batch.
pub fn normalize_events(raw: Vec<RawScanEvent>) -> Vec<ScanEvent> {
    let events: Vec<ScanEvent> = raw.into_iter().map(ScanEvent::from).collect();

    let malformed = events.iter().filter(|e| !e.has_valid_timestamp()).count();
    if malformed > 0 {
        warn!(
            "{} of {} scan events have a missing or malformed timestamp",
            malformed,
            events.len()
        );
    }

    events
}
