use serde::{Deserialize, Serialize};
use std::fmt;

// =========================================================
// Summary types
// =========================================================

/// Ratio of image scans to QR scans.
///
/// `Undefined` when there are no QR scans. Serializes as a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageQrRatio {
    Defined(f64),
    Undefined,
}

impl ImageQrRatio {
    pub fn value(&self) -> Option<f64> {
        match self {
            ImageQrRatio::Defined(v) => Some(*v),
            ImageQrRatio::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, ImageQrRatio::Defined(_))
    }
}

impl fmt::Display for ImageQrRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageQrRatio::Defined(v) => write!(f, "{:.2}", v),
            ImageQrRatio::Undefined => f.write_str("N/A"),
        }
    }
}

/// Health badge for the success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessHealth {
    Healthy,
    Degraded,
}

/// Scan-type summary for the statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub total_events: usize,
    pub total_success_scans: usize,
    /// Successful image scans.
    pub image_scans: usize,
    /// Successful QR scans.
    pub qr_scans: usize,
    pub audio_plays: usize,
    pub failures: usize,
    pub total_attempts: usize,
    pub success_rate_percent: u32,
    pub failure_rate_percent: u32,
    pub image_to_qr_ratio: ImageQrRatio,
    pub avg_attempts_per_minute: f64,
    pub health: SuccessHealth,
}

/// Route path for the summary endpoint (under `/v1`).
pub const GET_SUMMARY: &str = "/summary";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_display() {
        assert_eq!(ImageQrRatio::Defined(1.5).to_string(), "1.50");
        assert_eq!(ImageQrRatio::Defined(2.0 / 3.0).to_string(), "0.67");
        assert_eq!(ImageQrRatio::Undefined.to_string(), "N/A");
    }

    #[test]
    fn test_ratio_serialization() {
        assert_eq!(
            serde_json::to_value(ImageQrRatio::Defined(2.0)).unwrap(),
            serde_json::json!(2.0)
        );
        assert_eq!(
            serde_json::to_value(ImageQrRatio::Undefined).unwrap(),
            serde_json::Value::Null
        );

        let parsed: ImageQrRatio = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, ImageQrRatio::Undefined);
        let parsed: ImageQrRatio = serde_json::from_str("0.5").unwrap();
        assert_eq!(parsed.value(), Some(0.5));
    }

    #[test]
    fn test_ratio_zero_is_defined() {
        let ratio = ImageQrRatio::Defined(0.0);
        assert!(ratio.is_defined());
        assert_ne!(ratio, ImageQrRatio::Undefined);
    }
}
