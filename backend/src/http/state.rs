//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AggregationSettings;
use crate::store::EventStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of scan events and painting counts
    pub store: Arc<dyn EventStore>,
    /// Defaults for query parameters the client leaves out
    pub settings: AggregationSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>, settings: AggregationSettings) -> Self {
        Self { store, settings }
    }
}
