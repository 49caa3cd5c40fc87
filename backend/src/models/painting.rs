//! Per-painting scan counts.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use super::time::parse_instant;
use crate::api::PaintingId;

/// Identifier used when the backend reports neither `_id` nor `id`.
pub const UNKNOWN_PAINTING_ID: &str = "Unknown";

/// Painting count record exactly as the backend serves it.
///
/// The scans-by-painting endpoint groups by `_id`; older payloads use `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaintingCount {
    #[serde(default, rename = "_id")]
    pub document_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub painting_name: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub last_scanned: Option<String>,
}

/// Normalized per-painting scan count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintingCount {
    pub id: PaintingId,
    pub painting_name: String,
    pub count: u64,
    pub last_scanned: Option<DateTime<Utc>>,
}

impl PaintingCount {
    /// Count without a display name; the name falls back to the id.
    pub fn new(id: impl Into<String>, count: u64) -> Self {
        let id = PaintingId::new(id);
        Self {
            painting_name: id.as_str().to_string(),
            id,
            count,
            last_scanned: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.painting_name = name.into();
        self
    }

    pub fn with_last_scanned(mut self, last_scanned: DateTime<Utc>) -> Self {
        self.last_scanned = Some(last_scanned);
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<RawPaintingCount> for PaintingCount {
    fn from(raw: RawPaintingCount) -> Self {
        let id = non_empty(raw.document_id)
            .or_else(|| non_empty(raw.id))
            .unwrap_or_else(|| UNKNOWN_PAINTING_ID.to_string());

        let count = match raw.count {
            Some(n) if n < 0 => {
                warn!("Painting {} reported negative scan count {}; using 0", id, n);
                0
            }
            Some(n) => n as u64,
            None => 0,
        };

        let last_scanned = match raw.last_scanned.as_deref() {
            Some(value) => {
                let parsed = parse_instant(value);
                if parsed.is_none() {
                    warn!("Painting {} has unparseable lastScanned '{}'", id, value);
                }
                parsed
            }
            None => None,
        };

        let painting_name = non_empty(raw.painting_name).unwrap_or_else(|| id.clone());

        PaintingCount {
            id: PaintingId::new(id),
            painting_name,
            count,
            last_scanned,
        }
    }
}

/// Normalize a batch of wire painting counts.
pub fn normalize_painting_counts(raw: Vec<RawPaintingCount>) -> Vec<PaintingCount> {
    raw.into_iter().map(PaintingCount::from).collect()
}
