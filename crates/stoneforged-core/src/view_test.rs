use super::*;

fn prospect(id: i64, brand: &str, trigger: &str, score: f64, dm: &str, action: &str) -> Prospect {
    Prospect {
        id,
        brand: brand.to_string(),
        trigger: trigger.to_string(),
        score,
        decision_maker: dm.to_string(),
        next_action: action.to_string(),
    }
}

fn sample() -> Vec<Prospect> {
    vec![
        prospect(3, "PureRest", "Reformulation announced", 9.8, "Formulation Lead", "Personalized message"),
        prospect(1, "VitalSleep", "New R&D hire", 9.2, "R&D Director", "Send sample"),
        prospect(2, "EnergyBoost", "Facility expansion", 8.7, "Innovation Manager", "Technical call"),
        prospect(4, "Calmwave", "", 8.7, "", ""),
    ]
}

fn ids(items: &[&Prospect]) -> Vec<i64> {
    items.iter().map(|p| p.id).collect()
}

// ---------------------------------------------------------------------------
// filter_prospects
// ---------------------------------------------------------------------------

#[test]
fn blank_term_keeps_everything_in_order() {
    let all = sample();
    for term in ["", "   ", "\t\n"] {
        assert_eq!(ids(&filter_prospects(&all, term)), vec![3, 1, 2, 4]);
    }
}

#[test]
fn term_matches_case_insensitively_after_trim() {
    let all = sample();
    assert_eq!(ids(&filter_prospects(&all, "  vitalSLEEP ")), vec![1]);
}

#[test]
fn term_matches_any_text_field() {
    let all = sample();
    assert_eq!(ids(&filter_prospects(&all, "facility")), vec![2]);
    assert_eq!(ids(&filter_prospects(&all, "director")), vec![1]);
    assert_eq!(ids(&filter_prospects(&all, "technical")), vec![2]);
    // "r&d" appears in both trigger and decision maker of the same row.
    assert_eq!(ids(&filter_prospects(&all, "r&d")), vec![1]);
}

#[test]
fn term_does_not_match_score_or_id() {
    let all = sample();
    assert!(filter_prospects(&all, "9.8").is_empty());
}

#[test]
fn filtered_rows_are_a_subset_containing_the_term() {
    let all = sample();
    for term in ["e", "ma", "sample", "zzz", "REST"] {
        let needle = term.to_lowercase();
        let hits = filter_prospects(&all, term);
        assert!(hits.len() <= all.len());
        for hit in &hits {
            assert!(all.iter().any(|p| p == *hit));
            let fields = [&hit.brand, &hit.trigger, &hit.decision_maker, &hit.next_action];
            assert!(
                fields.iter().any(|f| f.to_lowercase().contains(&needle)),
                "{} does not contain {term}",
                hit.brand
            );
        }
    }
}

#[test]
fn filter_leaves_snapshot_untouched() {
    let all = sample();
    let before = all.clone();
    let _ = filter_prospects(&all, "boost");
    assert_eq!(all, before);
}

// ---------------------------------------------------------------------------
// request_sort
// ---------------------------------------------------------------------------

#[test]
fn first_click_sorts_ascending() {
    assert_eq!(
        request_sort(None, SortKey::Brand),
        SortConfig::ascending(SortKey::Brand)
    );
}

#[test]
fn same_key_toggles_direction_and_back() {
    let first = request_sort(None, SortKey::Score);
    let second = request_sort(Some(first), SortKey::Score);
    let third = request_sort(Some(second), SortKey::Score);
    assert_eq!(second.direction, SortDirection::Desc);
    assert_eq!(third.direction, SortDirection::Asc);
}

#[test]
fn different_key_resets_to_ascending() {
    let desc = SortConfig {
        key: SortKey::Score,
        direction: SortDirection::Desc,
    };
    assert_eq!(
        request_sort(Some(desc), SortKey::Brand),
        SortConfig::ascending(SortKey::Brand)
    );
}

// ---------------------------------------------------------------------------
// sort_prospects
// ---------------------------------------------------------------------------

#[test]
fn no_sort_keeps_incoming_order() {
    let all = sample();
    let refs: Vec<&Prospect> = all.iter().collect();
    assert_eq!(ids(&sort_prospects(&refs, None)), vec![3, 1, 2, 4]);
}

#[test]
fn brand_sort_is_lexicographic() {
    let all = sample();
    let refs: Vec<&Prospect> = all.iter().collect();
    let sorted = sort_prospects(&refs, Some(SortConfig::ascending(SortKey::Brand)));
    let brands: Vec<&str> = sorted.iter().map(|p| p.brand.as_str()).collect();
    assert_eq!(brands, vec!["Calmwave", "EnergyBoost", "PureRest", "VitalSleep"]);
}

#[test]
fn score_sort_is_numeric_and_stable() {
    let all = sample();
    let refs: Vec<&Prospect> = all.iter().collect();

    let asc = sort_prospects(&refs, Some(SortConfig::ascending(SortKey::Score)));
    // 2 and 4 tie at 8.7 and keep their input order.
    assert_eq!(ids(&asc), vec![2, 4, 1, 3]);

    let desc = sort_prospects(
        &refs,
        Some(SortConfig {
            key: SortKey::Score,
            direction: SortDirection::Desc,
        }),
    );
    assert_eq!(ids(&desc), vec![3, 1, 2, 4]);
}

#[test]
fn ascending_and_descending_are_reverses_for_strict_keys() {
    let all = sample();
    let refs: Vec<&Prospect> = all.iter().collect();
    let asc = sort_prospects(&refs, Some(SortConfig::ascending(SortKey::Id)));
    let mut desc = sort_prospects(
        &refs,
        Some(SortConfig {
            key: SortKey::Id,
            direction: SortDirection::Desc,
        }),
    );
    desc.reverse();
    assert_eq!(ids(&asc), ids(&desc));
}

#[test]
fn empty_strings_sort_first() {
    let all = sample();
    let refs: Vec<&Prospect> = all.iter().collect();
    let sorted = sort_prospects(&refs, Some(SortConfig::ascending(SortKey::Trigger)));
    assert_eq!(sorted[0].id, 4);
}

// ---------------------------------------------------------------------------
// parsing
// ---------------------------------------------------------------------------

#[test]
fn sort_key_accepts_dashes_and_underscores() {
    assert_eq!("decision-maker".parse::<SortKey>(), Ok(SortKey::DecisionMaker));
    assert_eq!("next_action".parse::<SortKey>(), Ok(SortKey::NextAction));
    assert_eq!(
        "revenue".parse::<SortKey>(),
        Err(CoreError::UnknownSortKey("revenue".to_string()))
    );
}

#[test]
fn sort_direction_parses() {
    assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
    assert!("sideways".parse::<SortDirection>().is_err());
}
