//! Filter and sort derivations over a prospect snapshot.
//!
//! Both functions borrow their input and return new vectors of references;
//! the snapshot itself is never reordered or trimmed.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prospect::Prospect;
use crate::CoreError;

/// Returns the prospects whose text fields contain `term`, case-insensitively.
///
/// The term is trimmed first. A blank term keeps every prospect in its
/// original order.
#[must_use]
pub fn filter_prospects<'a>(prospects: &'a [Prospect], term: &str) -> Vec<&'a Prospect> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return prospects.iter().collect();
    }

    prospects
        .iter()
        .filter(|p| {
            [&p.brand, &p.trigger, &p.decision_maker, &p.next_action]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    Brand,
    Trigger,
    Score,
    DecisionMaker,
    NextAction,
}

impl SortKey {
    fn compare(self, a: &Prospect, b: &Prospect) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Brand => a.brand.cmp(&b.brand),
            SortKey::Trigger => a.trigger.cmp(&b.trigger),
            SortKey::Score => a.score.total_cmp(&b.score),
            SortKey::DecisionMaker => a.decision_maker.cmp(&b.decision_maker),
            SortKey::NextAction => a.next_action.cmp(&b.next_action),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Brand => "brand",
            SortKey::Trigger => "trigger",
            SortKey::Score => "score",
            SortKey::DecisionMaker => "decision_maker",
            SortKey::NextAction => "next_action",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "id" => Ok(SortKey::Id),
            "brand" => Ok(SortKey::Brand),
            "trigger" => Ok(SortKey::Trigger),
            "score" => Ok(SortKey::Score),
            "decision_maker" => Ok(SortKey::DecisionMaker),
            "next_action" => Ok(SortKey::NextAction),
            _ => Err(CoreError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(CoreError::UnknownSortDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    #[must_use]
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }
}

/// Next sort state after a click on `key`.
///
/// Clicking the active ascending key flips it to descending; anything else
/// (a new key, or the active key while descending) sorts ascending.
#[must_use]
pub fn request_sort(current: Option<SortConfig>, key: SortKey) -> SortConfig {
    match current {
        Some(SortConfig {
            key: active,
            direction: SortDirection::Asc,
        }) if active == key => SortConfig {
            key,
            direction: SortDirection::Desc,
        },
        _ => SortConfig::ascending(key),
    }
}

/// Stable sort of `items` by `config`; `None` keeps the incoming order.
#[must_use]
pub fn sort_prospects<'a>(items: &[&'a Prospect], config: Option<SortConfig>) -> Vec<&'a Prospect> {
    let mut sorted = items.to_vec();
    if let Some(SortConfig { key, direction }) = config {
        sorted.sort_by(|a, b| {
            let ord = key.compare(a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
    sorted
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
