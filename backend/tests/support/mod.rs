#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use scan_analytics::models::{EventType, PaintingCount, ScanEvent, ScanType};
use scan_analytics::store::LocalEventStore;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores variables on unwind and serializes access to the process
/// environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn scan(timestamp: &str, scan_type: &str, event_type: &str) -> ScanEvent {
    ScanEvent::new(
        at(timestamp),
        ScanType::from(scan_type),
        EventType::from(event_type),
    )
}

/// Three events over two hours: image success, QR success, image failure.
pub fn sample_events() -> Vec<ScanEvent> {
    vec![
        scan("2024-01-01T10:05:00Z", "image", "scan_success"),
        scan("2024-01-01T10:50:00Z", "qr", "scan_success"),
        scan("2024-01-01T11:10:00Z", "image", "scan_fail"),
    ]
}

pub fn sample_counts() -> Vec<PaintingCount> {
    vec![
        PaintingCount::new("mona-lisa", 12).with_name("Mona Lisa"),
        PaintingCount::new("starry-night", 7).with_name("The Starry Night"),
        PaintingCount::new("the-scream", 7),
        PaintingCount::new("girl-with-pearl", 2),
    ]
}

pub fn seeded_store() -> LocalEventStore {
    let store = LocalEventStore::new();
    store.seed_events(sample_events());
    store.seed_most_scanned(sample_counts());
    store.seed_scans_by_painting(sample_counts());
    store
}
