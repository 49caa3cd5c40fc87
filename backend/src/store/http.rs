//! Remote event store backed by the analytics REST API.

use async_trait::async_trait;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::error::{ErrorContext, StoreError, StoreResult};
use super::event_store::EventStore;
use crate::config::StoreSettings;
use crate::models::{
    normalize_events, normalize_painting_counts, PaintingCount, RawPaintingCount, RawScanEvent,
    ScanEvent,
};

/// Longest slice of an error body copied into the error context.
const MAX_ERROR_BODY: usize = 256;

/// Fully resolved endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEndpoints {
    pub events: String,
    pub summary: String,
    pub scans_by_painting: String,
}

impl StoreEndpoints {
    pub fn from_settings(settings: &StoreSettings) -> Self {
        Self {
            events: settings.events_endpoint(),
            summary: settings.summary_endpoint(),
            scans_by_painting: settings.scans_by_painting_endpoint(),
        }
    }
}

/// `GET /summary` response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    #[serde(default)]
    most_scanned_paintings: Option<Vec<RawPaintingCount>>,
}

/// Event store that reads from the analytics backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEventStore {
    client: reqwest::Client,
    endpoints: StoreEndpoints,
}

impl HttpEventStore {
    pub fn new(endpoints: StoreEndpoints, timeout: Duration) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            "HTTP event store configured (events={}, summary={}, scans_by_painting={})",
            endpoints.events, endpoints.summary, endpoints.scans_by_painting
        );

        Ok(Self { client, endpoints })
    }

    pub fn from_settings(settings: &StoreSettings) -> StoreResult<Self> {
        Self::new(
            StoreEndpoints::from_settings(settings),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn endpoints(&self) -> &StoreEndpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: &str, url: &str) -> StoreResult<T> {
        let context = ErrorContext::new(operation).with_endpoint(url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(e, context.clone()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, context.clone()))?;

        if !status.is_success() {
            let excerpt: String = String::from_utf8_lossy(&body)
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            return Err(StoreError::request_with_context(
                format!("HTTP {}", status),
                context.with_status(status.as_u16()).with_details(excerpt.trim()),
            ));
        }

        let mut deserializer = serde_json::Deserializer::from_slice(&body);
        let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            StoreError::decode_with_context(
                format!("{} at '{}'", e.inner(), e.path()),
                context.clone(),
            )
        })?;

        debug!("{}: {} bytes from {}", operation, body.len(), url);
        Ok(value)
    }
}

fn transport_error(err: reqwest::Error, context: ErrorContext) -> StoreError {
    if err.is_timeout() {
        StoreError::timeout_with_context(err.to_string(), context)
    } else if err.is_decode() || err.is_body() {
        StoreError::decode_with_context(err.to_string(), context)
    } else {
        StoreError::connection_with_context(err.to_string(), context)
    }
}

#[async_trait]
impl EventStore for HttpEventStore {
    async fn fetch_events(&self) -> StoreResult<Vec<ScanEvent>> {
        let raw: Option<Vec<RawScanEvent>> =
            self.get_json("fetch_events", &self.endpoints.events).await?;
        Ok(normalize_events(raw.unwrap_or_default()))
    }

    async fn fetch_scans_by_painting(&self) -> StoreResult<Vec<PaintingCount>> {
        let raw: Option<Vec<RawPaintingCount>> = self
            .get_json("fetch_scans_by_painting", &self.endpoints.scans_by_painting)
            .await?;
        Ok(normalize_painting_counts(raw.unwrap_or_default()))
    }

    async fn fetch_most_scanned(&self) -> StoreResult<Vec<PaintingCount>> {
        let summary: SummaryResponse = self
            .get_json("fetch_most_scanned", &self.endpoints.summary)
            .await?;
        Ok(normalize_painting_counts(
            summary.most_scanned_paintings.unwrap_or_default(),
        ))
    }

    async fn health_check(&self) -> StoreResult<bool> {
        match self.client.get(&self.endpoints.summary).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                debug!("Health check against {} failed: {}", self.endpoints.summary, e);
                Ok(false)
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_response_missing_list() {
        let parsed: SummaryResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.most_scanned_paintings.is_none());

        let parsed: SummaryResponse =
            serde_json::from_str(r#"{"mostScannedPaintings":null}"#).unwrap();
        assert!(parsed.most_scanned_paintings.is_none());
    }

    #[test]
    fn test_summary_response_with_list() {
        let parsed: SummaryResponse = serde_json::from_str(
            r#"{"totalScans":9,"mostScannedPaintings":[{"_id":"A","count":5}]}"#,
        )
        .unwrap();
        let list = parsed.most_scanned_paintings.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].document_id.as_deref(), Some("A"));
    }

    #[test]
    fn test_endpoints_from_settings() {
        let settings = StoreSettings {
            base_url: "http://example.test/api/analytics/".to_string(),
            ..Default::default()
        };
        let endpoints = StoreEndpoints::from_settings(&settings);
        assert_eq!(endpoints.events, "http://example.test/api/analytics/all");
        assert_eq!(endpoints.summary, "http://example.test/api/analytics/summary");
        assert_eq!(
            endpoints.scans_by_painting,
            "http://example.test/api/analytics/scans-by-painting"
        );
    }
}
