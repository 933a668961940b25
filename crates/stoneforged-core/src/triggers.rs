//! Trigger categories and the readiness bonus each one carries.

use std::str::FromStr;

use serde::Serialize;

use crate::CoreError;

/// A business event that justifies outreach.
///
/// Variants are declared in display order; [`TriggerCategory::ALL`] mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCategory {
    RdHire,
    FacilityExpansion,
    Reformulation,
    ProductLaunch,
    CoPacker,
    FundingRound,
    Other,
}

impl TriggerCategory {
    pub const ALL: [TriggerCategory; 7] = [
        TriggerCategory::RdHire,
        TriggerCategory::FacilityExpansion,
        TriggerCategory::Reformulation,
        TriggerCategory::ProductLaunch,
        TriggerCategory::CoPacker,
        TriggerCategory::FundingRound,
        TriggerCategory::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TriggerCategory::RdHire => "New R&D hire / Formulation Specialist",
            TriggerCategory::FacilityExpansion => "Facility / Line expansion",
            TriggerCategory::Reformulation => "Reformulation / Ingredient change",
            TriggerCategory::ProductLaunch => "New product launch (sleep/energy/functional)",
            TriggerCategory::CoPacker => "New co-packer partnership",
            TriggerCategory::FundingRound => "Funding round / Investment",
            TriggerCategory::Other => "Other / Custom",
        }
    }

    /// The string stored in a prospect's `trigger` field.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            TriggerCategory::RdHire => "New R&D hire",
            TriggerCategory::FacilityExpansion => "Facility expansion",
            TriggerCategory::Reformulation => "Reformulation",
            TriggerCategory::ProductLaunch => "New product launch",
            TriggerCategory::CoPacker => "New co-packer",
            TriggerCategory::FundingRound => "Funding round",
            TriggerCategory::Other => "",
        }
    }

    #[must_use]
    pub fn bonus(self) -> u8 {
        match self {
            TriggerCategory::Reformulation => 4,
            TriggerCategory::RdHire
            | TriggerCategory::FacilityExpansion
            | TriggerCategory::ProductLaunch => 3,
            TriggerCategory::CoPacker | TriggerCategory::FundingRound => 2,
            TriggerCategory::Other => 0,
        }
    }

    /// Short command-line name.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            TriggerCategory::RdHire => "rd-hire",
            TriggerCategory::FacilityExpansion => "facility-expansion",
            TriggerCategory::Reformulation => "reformulation",
            TriggerCategory::ProductLaunch => "product-launch",
            TriggerCategory::CoPacker => "co-packer",
            TriggerCategory::FundingRound => "funding",
            TriggerCategory::Other => "other",
        }
    }

    /// Default readiness score for a draft tagged with this category.
    #[must_use]
    pub fn default_score(self) -> f64 {
        crate::prospect::BASE_SCORE + f64::from(self.bonus())
    }

    /// Maps a stored trigger value back to its category.
    ///
    /// Free-text triggers have no category and return `None`; the empty
    /// string maps to [`TriggerCategory::Other`].
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

impl std::fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for TriggerCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == needle)
            .ok_or_else(|| CoreError::UnknownTrigger(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_table_matches_categories() {
        let table: Vec<(&str, u8)> = TriggerCategory::ALL
            .iter()
            .map(|c| (c.value(), c.bonus()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("New R&D hire", 3),
                ("Facility expansion", 3),
                ("Reformulation", 4),
                ("New product launch", 3),
                ("New co-packer", 2),
                ("Funding round", 2),
                ("", 0),
            ]
        );
    }

    #[test]
    fn default_score_is_base_plus_bonus() {
        assert!((TriggerCategory::Reformulation.default_score() - 9.0).abs() < f64::EPSILON);
        assert!((TriggerCategory::CoPacker.default_score() - 7.0).abs() < f64::EPSILON);
        assert!((TriggerCategory::Other.default_score() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_value_round_trips_every_category() {
        for category in TriggerCategory::ALL {
            assert_eq!(TriggerCategory::from_value(category.value()), Some(category));
        }
    }

    #[test]
    fn from_value_rejects_free_text() {
        assert_eq!(TriggerCategory::from_value("Reformulation announced"), None);
    }

    #[test]
    fn parses_slugs_case_insensitively() {
        assert_eq!(
            "Funding".parse::<TriggerCategory>(),
            Ok(TriggerCategory::FundingRound)
        );
        assert_eq!(
            " rd-hire ".parse::<TriggerCategory>(),
            Ok(TriggerCategory::RdHire)
        );
    }

    #[test]
    fn parse_unknown_slug_is_error() {
        assert_eq!(
            "merger".parse::<TriggerCategory>(),
            Err(CoreError::UnknownTrigger("merger".to_string()))
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&TriggerCategory::CoPacker).expect("serialize");
        assert_eq!(json, "\"co_packer\"");
    }
}
