use serde::{Deserialize, Serialize};

use crate::triggers::TriggerCategory;

/// Readiness every draft starts from before a trigger bonus is added.
pub const BASE_SCORE: f64 = 5.0;

/// A sales lead as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    pub id: i64,
    pub brand: String,
    pub trigger: String,
    pub score: f64,
    pub decision_maker: String,
    pub next_action: String,
}

impl Prospect {
    #[must_use]
    pub fn readiness(&self) -> ReadinessBand {
        ReadinessBand::from_score(self.score)
    }
}

/// Draft of a prospect that has not been persisted yet.
///
/// Nothing here is validated: the score may leave 0 to 10 and any string may be
/// empty. Callers that want a non-empty brand check [`NewProspect::has_brand`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProspect {
    pub brand: String,
    pub trigger: String,
    pub score: f64,
    pub decision_maker: String,
    pub next_action: String,
}

impl Default for NewProspect {
    fn default() -> Self {
        Self {
            brand: String::new(),
            trigger: String::new(),
            score: BASE_SCORE,
            decision_maker: String::new(),
            next_action: String::new(),
        }
    }
}

impl NewProspect {
    /// Tag the draft with a trigger category and reset its score to the
    /// category default. The score can still be overwritten afterwards.
    pub fn select_trigger(&mut self, category: TriggerCategory) {
        category.value().clone_into(&mut self.trigger);
        self.score = category.default_score();
    }

    #[must_use]
    pub fn has_brand(&self) -> bool {
        !self.brand.trim().is_empty()
    }
}

/// Display band for a readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessBand {
    High,
    Medium,
    Low,
}

impl ReadinessBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            ReadinessBand::High
        } else if score >= 6.0 {
            ReadinessBand::Medium
        } else {
            ReadinessBand::Low
        }
    }
}

impl std::fmt::Display for ReadinessBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadinessBand::High => write!(f, "high"),
            ReadinessBand::Medium => write!(f, "medium"),
            ReadinessBand::Low => write!(f, "low"),
        }
    }
}
