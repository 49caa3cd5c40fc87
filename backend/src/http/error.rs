//! HTTP error handling and response types.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::AnalyticsError;
use crate::store::StoreError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Aggregation or upstream store error
    Analytics(AnalyticsError),
}

fn store_error_response(err: StoreError) -> (StatusCode, ApiError) {
    let details = err.context().to_string();
    let (status, code) = match &err {
        StoreError::TimeoutError { .. } => (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT"),
        StoreError::ConfigurationError { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
        _ => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE"),
    };
    (
        status,
        ApiError::new(code, err.message()).with_details(details),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Analytics(AnalyticsError::Store(e)) => store_error_response(e),
            AppError::Analytics(e) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", e.to_string()),
            ),
        };

        if status.is_server_error() {
            tracing::error!(code = %error.code, "{}", error.message);
        } else {
            tracing::debug!(code = %error.code, "{}", error.message);
        }

        (status, Json(error)).into_response()
    }
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        AppError::Analytics(err)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ErrorContext;

    #[test]
    fn test_status_mapping() {
        let cases = vec![
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Analytics(AnalyticsError::InvalidInterval(0)),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Analytics(AnalyticsError::Store(StoreError::unavailable("down"))),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Analytics(AnalyticsError::Store(StoreError::timeout_with_context(
                    "slow",
                    ErrorContext::new("fetch_events"),
                ))),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                AppError::Analytics(AnalyticsError::Store(StoreError::configuration(
                    "bad client",
                ))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_api_error_skips_empty_details() {
        let json = serde_json::to_value(ApiError::new("BAD_REQUEST", "nope")).unwrap();
        assert!(json.get("details").is_none());

        let json =
            serde_json::to_value(ApiError::new("BAD_REQUEST", "nope").with_details("more")).unwrap();
        assert_eq!(json["details"], "more");
    }
}
