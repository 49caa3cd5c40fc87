//! In-memory local event store.
//!
//! This module provides a local implementation of [`EventStore`] suitable for
//! unit testing and local development. All data is held in memory, giving
//! fast, deterministic and isolated execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use super::error::{ErrorContext, StoreError, StoreResult};
use super::event_store::EventStore;
use crate::models::{PaintingCount, ScanEvent};

/// In-memory event store.
///
/// # Example
/// ```
/// use scan_analytics::store::{EventStore, LocalEventStore};
///
/// #[tokio::main]
/// async fn main() {
///     let store = LocalEventStore::new();
///     store.seed_events(vec![]);
///
///     let events = store.fetch_events().await.unwrap();
///     assert!(events.is_empty());
/// }
/// ```
#[derive(Clone, Default)]
pub struct LocalEventStore {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    events: Vec<ScanEvent>,
    scans_by_painting: Vec<PaintingCount>,
    most_scanned: Vec<PaintingCount>,

    // Availability switch for simulating fetch failures
    available: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            scans_by_painting: Vec::new(),
            most_scanned: Vec::new(),
            available: true,
        }
    }
}

impl LocalEventStore {
    /// Create a new empty local store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored scan events.
    pub fn seed_events(&self, events: Vec<ScanEvent>) {
        self.data.write().events = events;
    }

    /// Replace the stored per-painting counts.
    pub fn seed_scans_by_painting(&self, counts: Vec<PaintingCount>) {
        self.data.write().scans_by_painting = counts;
    }

    /// Replace the stored most-scanned list.
    pub fn seed_most_scanned(&self, counts: Vec<PaintingCount>) {
        self.data.write().most_scanned = counts;
    }

    /// Append a single event.
    pub fn push_event(&self, event: ScanEvent) {
        self.data.write().events.push(event);
    }

    /// Toggle availability for testing fetch failures.
    pub fn set_available(&self, available: bool) {
        self.data.write().available = available;
    }

    /// Clear all data, keeping the availability flag.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            available: data.available,
            ..Default::default()
        };
    }

    pub fn event_count(&self) -> usize {
        self.data.read().events.len()
    }

    fn ensure_available(&self, operation: &str) -> StoreResult<()> {
        if self.data.read().available {
            Ok(())
        } else {
            Err(StoreError::unavailable_with_context(
                "Local store is switched off",
                ErrorContext::new(operation).with_endpoint("local"),
            ))
        }
    }
}

#[async_trait]
impl EventStore for LocalEventStore {
    async fn fetch_events(&self) -> StoreResult<Vec<ScanEvent>> {
        self.ensure_available("fetch_events")?;
        Ok(self.data.read().events.clone())
    }

    async fn fetch_scans_by_painting(&self) -> StoreResult<Vec<PaintingCount>> {
        self.ensure_available("fetch_scans_by_painting")?;
        Ok(self.data.read().scans_by_painting.clone())
    }

    async fn fetch_most_scanned(&self) -> StoreResult<Vec<PaintingCount>> {
        self.ensure_available("fetch_most_scanned")?;
        Ok(self.data.read().most_scanned.clone())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(self.data.read().available)
    }

    fn name(&self) -> &str {
        "local"
    }
}
