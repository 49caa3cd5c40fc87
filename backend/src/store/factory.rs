//! Event store factory for dependency injection.
//!
//! This module provides utilities for creating event store instances based
//! on runtime configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use super::error::StoreResult;
use super::event_store::EventStore;
#[cfg(feature = "http-store")]
use super::http::HttpEventStore;
use super::local::LocalEventStore;
use crate::config::StoreSettings;

/// Event store type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    /// Analytics REST API
    #[default]
    Http,
    /// In-memory local store
    Local,
}

impl FromStr for StoreType {
    type Err = String;

    /// Parse store type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("http", "remote", "local", "memory")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" | "remote" => Ok(Self::Http),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }
}

/// Factory for creating event store instances.
///
/// # Example
/// ```ignore
/// use scan_analytics::config::StoreSettings;
/// use scan_analytics::store::StoreFactory;
///
/// let settings = StoreSettings::default();
/// let store = StoreFactory::create(&settings)?;
/// ```
pub struct StoreFactory;

impl StoreFactory {
    /// Create an event store from settings.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn EventStore>)` - The configured store
    /// * `Err(StoreError)` - If the store cannot be built
    pub fn create(settings: &StoreSettings) -> StoreResult<Arc<dyn EventStore>> {
        match settings.store_type {
            StoreType::Http => Self::create_http(settings),
            StoreType::Local => Ok(Self::create_local()),
        }
    }

    #[cfg(feature = "http-store")]
    pub fn create_http(settings: &StoreSettings) -> StoreResult<Arc<dyn EventStore>> {
        Ok(Arc::new(HttpEventStore::from_settings(settings)?))
    }

    #[cfg(not(feature = "http-store"))]
    pub fn create_http(_settings: &StoreSettings) -> StoreResult<Arc<dyn EventStore>> {
        Err(super::error::StoreError::configuration(
            "HTTP store requested but the `http-store` feature is disabled",
        ))
    }

    /// Create an empty in-memory store.
    pub fn create_local() -> Arc<dyn EventStore> {
        Arc::new(LocalEventStore::new())
    }
}
