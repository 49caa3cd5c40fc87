//! Painting rankings for the leaderboard and the comparison chart.

use log::debug;

use super::numeric::{percentage, round1};
use crate::models::PaintingCount;
use crate::routes::ranking::{
    ComparisonStats, Leaderboard, MedalTier, PaintingComparison, RankDirection, RankedPainting,
};

/// Bar colors assigned by position, cycling after ten entries.
pub const BAR_PALETTE: [&str; 10] = [
    "#6A1B9A", "#AB47BC", "#CE93D8", "#E1BEE7", "#FF6F00", "#FFB74D", "#2196F3", "#64B5F6",
    "#4CAF50", "#81C784",
];

pub fn bar_color(position: usize) -> &'static str {
    BAR_PALETTE[position % BAR_PALETTE.len()]
}

/// Sort paintings by count and keep the first `top_n`.
///
/// The sort is stable, so ties keep their input order in both directions.
/// Percentages and ranks are computed over the whole set before truncation.
/// `percentage_of_total` is rounded to one decimal; both percentages are 0
/// when the total (or maximum) is 0.
pub fn rank(
    counts: &[PaintingCount],
    direction: RankDirection,
    top_n: usize,
) -> Vec<RankedPainting> {
    let mut sorted: Vec<&PaintingCount> = counts.iter().collect();
    match direction {
        RankDirection::Descending => sorted.sort_by(|a, b| b.count.cmp(&a.count)),
        RankDirection::Ascending => sorted.sort_by(|a, b| a.count.cmp(&b.count)),
    }

    let total = counts
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.count));
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);

    sorted
        .into_iter()
        .enumerate()
        .take(top_n)
        .map(|(rank, painting)| {
            let medal = MedalTier::for_rank(rank);
            RankedPainting {
                id: painting.id.clone(),
                painting_name: painting.painting_name.clone(),
                count: painting.count,
                last_scanned: painting.last_scanned,
                rank,
                percentage_of_total: round1(percentage(painting.count as f64, total as f64)),
                percentage_of_max: percentage(painting.count as f64, max as f64),
                medal,
                badge: medal.badge(rank),
                bar_color: bar_color(rank).to_string(),
            }
        })
        .collect()
}

/// The most-scanned list, ranked descending without truncation.
pub fn leaderboard(most_scanned: &[PaintingCount]) -> Leaderboard {
    let entries = rank(most_scanned, RankDirection::Descending, most_scanned.len());
    Leaderboard {
        total: entries.len(),
        entries,
    }
}

/// Totals over the visible slice of a comparison.
pub fn comparison_stats(entries: &[RankedPainting]) -> ComparisonStats {
    let total_scans = entries
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(e.count));
    let average_scans = if entries.is_empty() {
        0.0
    } else {
        round1(total_scans as f64 / entries.len() as f64)
    };

    ComparisonStats {
        paintings_shown: entries.len(),
        total_scans,
        average_scans,
        top_painting: entries.first().cloned(),
    }
}

pub fn compare_paintings(
    counts: &[PaintingCount],
    direction: RankDirection,
    top_n: usize,
) -> PaintingComparison {
    let entries = rank(counts, direction, top_n);
    let stats = comparison_stats(&entries);
    debug!(
        "Compared {} paintings ({}), showing {}",
        counts.len(),
        direction,
        entries.len()
    );
    PaintingComparison {
        direction,
        entries,
        stats,
    }
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
