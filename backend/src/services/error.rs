//! Errors raised by the aggregation services.

use thiserror::Error;

use crate::store::StoreError;

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[derive(Debug, Clone, Error)]
pub enum AnalyticsError {
    #[error("Bucket interval must be between 1 and 1440 minutes, got {0}")]
    InvalidInterval(u32),

    #[error("UTC offset must be strictly within one day, got {0} minutes")]
    InvalidOffset(i32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AnalyticsError {
    /// Whether the caller supplied bad parameters (as opposed to a fetch failure).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AnalyticsError::InvalidInterval(_) | AnalyticsError::InvalidOffset(_)
        )
    }
}
