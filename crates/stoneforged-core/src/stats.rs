use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::prospect::Prospect;

/// Scores at or above this count as high readiness.
pub const HIGH_READINESS_THRESHOLD: f64 = 8.0;

/// Aggregates shown above the prospect table.
///
/// Always computed over the full snapshot, never the filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProspectStats {
    pub total: usize,
    pub high_readiness: usize,
    /// Arithmetic mean of all scores; `0.0` when there are none.
    pub average_score: f64,
}

impl ProspectStats {
    #[must_use]
    pub fn compute(prospects: &[Prospect]) -> Self {
        let total = prospects.len();
        let high_readiness = prospects
            .iter()
            .filter(|p| p.score >= HIGH_READINESS_THRESHOLD)
            .count();
        let average_score = if total == 0 {
            0.0
        } else {
            let sum: f64 = prospects.iter().map(|p| p.score).sum();
            #[allow(clippy::cast_precision_loss)]
            let count = total as f64;
            sum / count
        };

        Self {
            total,
            high_readiness,
            average_score,
        }
    }

    /// Average score with one decimal, rounding halves away from zero.
    ///
    /// The rounding happens on the shortest decimal form of the mean, so a
    /// mean of `8.95` shows as `9.0` even though its binary value sits just
    /// below the midpoint.
    #[must_use]
    pub fn average_display(&self) -> String {
        if self.total == 0 {
            return "0.0".to_string();
        }
        match Decimal::from_str(&self.average_score.to_string()) {
            Ok(mean) => {
                let mut rounded =
                    mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
                rounded.rescale(1);
                rounded.to_string()
            }
            // NaN, infinities and values beyond Decimal's range.
            Err(_) => format!("{:.1}", self.average_score),
        }
    }
}
