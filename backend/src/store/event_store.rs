//! EventStore trait: the data source the dashboard aggregates over.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::models::{PaintingCount, ScanEvent};

/// Source of raw scan data.
///
/// Implementations return normalized records: wire-level fallbacks
/// (`_id`/`id`, missing counts, unparseable timestamps) are resolved before
/// the data leaves the store.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fetch every recorded scan event.
    ///
    /// # Returns
    /// * `Ok(Vec<ScanEvent>)` - All events, possibly empty
    /// * `Err(StoreError)` - If the fetch fails
    async fn fetch_events(&self) -> StoreResult<Vec<ScanEvent>>;

    /// Fetch per-painting scan counts (unordered).
    async fn fetch_scans_by_painting(&self) -> StoreResult<Vec<PaintingCount>>;

    /// Fetch the backend's pre-ranked most-scanned list.
    async fn fetch_most_scanned(&self) -> StoreResult<Vec<PaintingCount>>;

    /// Check whether the store can currently serve requests.
    async fn health_check(&self) -> StoreResult<bool>;

    /// Short name used in logs and health responses.
    fn name(&self) -> &str;
}
