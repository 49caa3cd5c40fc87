use serde::{Deserialize, Serialize};

// =========================================================
// Overview types
// =========================================================

/// Scan counts by type over all events, regardless of outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanTypeBreakdown {
    pub image: usize,
    pub qr: usize,
    pub other: usize,
}

/// One labelled slice of the scan-type pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub name: String,
    pub value: usize,
}

impl ScanTypeBreakdown {
    /// Pie slices in display order. `other` is not charted.
    pub fn entries(&self) -> Vec<BreakdownSlice> {
        vec![
            BreakdownSlice {
                name: "Image Scan".to_string(),
                value: self.image,
            },
            BreakdownSlice {
                name: "QR Code Scan".to_string(),
                value: self.qr,
            },
        ]
    }

    pub fn total(&self) -> usize {
        self.image + self.qr + self.other
    }
}

/// Headline numbers for the charts panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOverview {
    pub total_events: usize,
    pub image_events: usize,
    pub qr_events: usize,
    /// Non-empty time buckets.
    pub active_periods: usize,
}
