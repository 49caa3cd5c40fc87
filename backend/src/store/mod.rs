//! Event store module: where the raw scan data comes from.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, dashboard service)        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  EventStore Trait (event_store.rs) - Abstract Interface │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────┐     ┌──────────▼──────────────┐
//! │ HttpEventStore   │     │ LocalEventStore         │
//! │ (analytics API)  │     │ (in-memory)             │
//! └──────────────────┘     └─────────────────────────┘
//! ```
//!
//! Stores hand out normalized [`crate::models::ScanEvent`] and
//! [`crate::models::PaintingCount`] values; the aggregation services never
//! see wire records.

pub mod error;
pub mod event_store;
pub mod factory;
#[cfg(feature = "http-store")]
pub mod http;
pub mod local;

pub use error::{ErrorContext, StoreError, StoreResult};
pub use event_store::EventStore;
pub use factory::{StoreFactory, StoreType};
#[cfg(feature = "http-store")]
pub use http::{HttpEventStore, StoreEndpoints};
pub use local::LocalEventStore;
