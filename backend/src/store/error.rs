//! Error types for event store operations.
//!
//! Every fetch failure carries an [`ErrorContext`] describing which store
//! operation failed, against which endpoint, and whether trying again on the
//! next load cycle is likely to help.

use std::fmt;

/// Result type for event store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Structured context for store errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "fetch_events")
    pub operation: Option<String>,
    /// Endpoint or store name involved
    pub endpoint: Option<String>,
    /// HTTP status returned by the upstream, if any
    pub status: Option<u16>,
    /// Additional details about the error
    pub details: Option<String>,
    /// Whether a later load cycle may succeed
    pub retryable: bool,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref endpoint) = self.endpoint {
            parts.push(format!("endpoint={}", endpoint));
        }
        if let Some(status) = self.status {
            parts.push(format!("status={}", status));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for event store operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The upstream could not be reached.
    #[error("Connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// The upstream answered with a non-success status.
    #[error("Request error: {message} {context}")]
    RequestError {
        message: String,
        context: ErrorContext,
    },

    /// The response body did not match the expected shape.
    #[error("Decode error: {message} {context}")]
    DecodeError {
        message: String,
        context: ErrorContext,
    },

    /// The store is switched off (local store) or reports itself unhealthy.
    #[error("Store unavailable: {message} {context}")]
    UnavailableError {
        message: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// The upstream did not answer within the configured timeout.
    #[error("Timeout error: {message} {context}")]
    TimeoutError {
        message: String,
        context: ErrorContext,
    },
}

impl StoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: ErrorContext::default().retryable(),
        }
    }

    pub fn connection_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: context.retryable(),
        }
    }

    /// Server errors (5xx) are marked retryable, client errors are not.
    pub fn request_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        let context = match context.status {
            Some(status) if status >= 500 => context.retryable(),
            _ => context,
        };
        Self::RequestError {
            message: message.into(),
            context,
        }
    }

    pub fn decode_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::DecodeError {
            message: message.into(),
            context,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::UnavailableError {
            message: message.into(),
            context: ErrorContext::default().retryable(),
        }
    }

    pub fn unavailable_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::UnavailableError {
            message: message.into(),
            context: context.retryable(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn timeout_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::TimeoutError {
            message: message.into(),
            context: context.retryable(),
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::ConnectionError { context, .. }
            | Self::RequestError { context, .. }
            | Self::DecodeError { context, .. }
            | Self::UnavailableError { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::TimeoutError { context, .. } => context,
        }
    }

    /// Get the error message without context.
    pub fn message(&self) -> &str {
        match self {
            Self::ConnectionError { message, .. }
            | Self::RequestError { message, .. }
            | Self::DecodeError { message, .. }
            | Self::UnavailableError { message, .. }
            | Self::ConfigurationError { message, .. }
            | Self::TimeoutError { message, .. } => message,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.context().retryable
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimeoutError { .. })
    }
}
