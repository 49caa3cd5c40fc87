use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::PaintingId;

// =========================================================
// Ranking types
// =========================================================

/// Sort direction for painting rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankDirection {
    #[default]
    Descending,
    Ascending,
}

impl RankDirection {
    pub fn toggled(self) -> Self {
        match self {
            RankDirection::Descending => RankDirection::Ascending,
            RankDirection::Ascending => RankDirection::Descending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankDirection::Descending => "descending",
            RankDirection::Ascending => "ascending",
        }
    }
}

impl FromStr for RankDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "descending" | "desc" => Ok(Self::Descending),
            "ascending" | "asc" => Ok(Self::Ascending),
            _ => Err(format!("Unknown rank direction: {}", s)),
        }
    }
}

impl fmt::Display for RankDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Podium tier shown next to a ranked painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedalTier {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl MedalTier {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            0 => MedalTier::Gold,
            1 => MedalTier::Silver,
            2 => MedalTier::Bronze,
            _ => MedalTier::Standard,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MedalTier::Gold => "#FFD700",
            MedalTier::Silver => "#C0C0C0",
            MedalTier::Bronze => "#CD7F32",
            MedalTier::Standard => "#6A1B9A",
        }
    }

    /// Badge text: a medal for the podium, `#n` (1-based) after it.
    pub fn badge(&self, rank: usize) -> String {
        match self {
            MedalTier::Gold => "🥇".to_string(),
            MedalTier::Silver => "🥈".to_string(),
            MedalTier::Bronze => "🥉".to_string(),
            MedalTier::Standard => format!("#{}", rank + 1),
        }
    }
}

/// A painting count with its position and share of scans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPainting {
    pub id: PaintingId,
    pub painting_name: String,
    pub count: u64,
    pub last_scanned: Option<DateTime<Utc>>,
    /// 0-based position after sorting, before truncation.
    pub rank: usize,
    /// Share of all scans in the ranked set, one decimal.
    pub percentage_of_total: f64,
    /// Share relative to the most-scanned painting in the set.
    pub percentage_of_max: f64,
    pub medal: MedalTier,
    pub badge: String,
    pub bar_color: String,
}

/// Most-scanned leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub entries: Vec<RankedPainting>,
    pub total: usize,
}

/// Aggregates over the visible slice of a painting comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub paintings_shown: usize,
    pub total_scans: u64,
    /// Mean scans per shown painting, one decimal.
    pub average_scans: f64,
    pub top_painting: Option<RankedPainting>,
}

/// Scans-by-painting comparison chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintingComparison {
    pub direction: RankDirection,
    pub entries: Vec<RankedPainting>,
    pub stats: ComparisonStats,
}

/// Route path for the leaderboard endpoint (under `/v1`).
pub const GET_TOP_PAINTINGS: &str = "/paintings/top";
/// Route path for the comparison endpoint (under `/v1`).
pub const GET_PAINTING_COMPARISON: &str = "/paintings/comparison";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("descending".parse::<RankDirection>(), Ok(RankDirection::Descending));
        assert_eq!("ASC".parse::<RankDirection>(), Ok(RankDirection::Ascending));
        assert!("sideways".parse::<RankDirection>().is_err());
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(RankDirection::Descending.toggled(), RankDirection::Ascending);
        assert_eq!(RankDirection::Ascending.toggled(), RankDirection::Descending);
        assert_eq!(RankDirection::default(), RankDirection::Descending);
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&RankDirection::Ascending).unwrap();
        assert_eq!(json, "\"ascending\"");
    }

    #[test]
    fn test_medal_tiers() {
        assert_eq!(MedalTier::for_rank(0), MedalTier::Gold);
        assert_eq!(MedalTier::for_rank(1), MedalTier::Silver);
        assert_eq!(MedalTier::for_rank(2), MedalTier::Bronze);
        assert_eq!(MedalTier::for_rank(3), MedalTier::Standard);
        assert_eq!(MedalTier::for_rank(40), MedalTier::Standard);
    }

    #[test]
    fn test_medal_badges_and_colors() {
        assert_eq!(MedalTier::Gold.badge(0), "🥇");
        assert_eq!(MedalTier::Standard.badge(3), "#4");
        assert_eq!(MedalTier::Gold.color(), "#FFD700");
        assert_eq!(MedalTier::Standard.color(), "#6A1B9A");
    }
}
