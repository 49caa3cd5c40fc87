//! # Scan Analytics Backend
//!
//! Aggregation engine behind the museum painting-scan dashboard.
//!
//! The crate fetches scan events and per-painting scan counts from the
//! analytics API and turns them into the view-models the dashboard renders:
//! time-bucketed trends, success/failure summaries and painting leaderboards.
//!
//! ## Architecture
//!
//! - [`api`]: Public types and identifier newtypes
//! - [`models`]: Wire records and their normalized domain forms
//! - [`routes`]: View-model types per dashboard panel and endpoint paths
//! - [`services`]: Pure aggregators and the dashboard orchestrator
//! - [`store`]: Event store trait with HTTP and in-memory implementations
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use scan_analytics::models::{EventType, ScanEvent, ScanType};
//! use scan_analytics::services::{bucket_events, summarize};
//!
//! let events = vec![ScanEvent::new(
//!     Utc.with_ymd_and_hms(2024, 1, 1, 10, 5, 0).unwrap(),
//!     ScanType::Image,
//!     EventType::ScanSuccess,
//! )];
//!
//! let trends = bucket_events(&events, 60).unwrap();
//! assert_eq!(trends.buckets[0].label, "10:00 AM");
//! assert_eq!(summarize(&events).success_rate_percent, 100);
//! ```

// StoreError carries a structured context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
