//! Plain-text rendering of the dashboard for the terminal.

use std::fmt::Write as _;

use stoneforged_core::{DashboardView, Prospect, ProspectStats, SortKey, TriggerCategory};

const COLUMNS: [(SortKey, &str, usize); 6] = [
    (SortKey::Id, "ID", 6),
    (SortKey::Brand, "BRAND", 20),
    (SortKey::Trigger, "TRIGGER", 26),
    (SortKey::Score, "SCORE", 14),
    (SortKey::DecisionMaker, "DECISION MAKER", 22),
    (SortKey::NextAction, "NEXT ACTION", 0),
];

/// Visible rows as a table, or the empty-view message when there are none.
pub(crate) fn render_table(view: &DashboardView) -> String {
    let rows = view.visible();
    if rows.is_empty() {
        return format!("{}\n", view.empty_message());
    }

    let mut out = String::new();
    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(key, title, width)| pad(&format!("{title}{}", view.sort_indicator(*key)), *width))
        .collect();
    let _ = writeln!(out, "{}", header.concat().trim_end());

    for p in rows {
        let _ = writeln!(out, "{}", render_row(p).trim_end());
    }
    out
}

fn render_row(p: &Prospect) -> String {
    let cells = [
        p.id.to_string(),
        truncate(&p.brand, 18),
        truncate(&p.trigger, 24),
        format!("{:.1} ({})", p.score, p.readiness()),
        truncate(&p.decision_maker, 20),
        p.next_action.clone(),
    ];
    cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, _, width))| pad(cell, *width))
        .collect()
}

/// One-line summary, always over the full snapshot.
pub(crate) fn render_stats(stats: &ProspectStats) -> String {
    format!(
        "Total: {}  High readiness: {}  Avg score: {}",
        stats.total,
        stats.high_readiness,
        stats.average_display()
    )
}

pub(crate) fn render_triggers() -> String {
    let mut out = format!("{:<20}{:<8}{:<8}LABEL\n", "SLUG", "BONUS", "SCORE");
    for category in TriggerCategory::ALL {
        let _ = writeln!(
            out,
            "{:<20}{:<8}{:<8.1}{}",
            category.slug(),
            format!("+{}", category.bonus()),
            category.default_score(),
            category.label()
        );
    }
    out
}

fn pad(cell: &str, width: usize) -> String {
    if width == 0 {
        cell.to_string()
    } else {
        format!("{cell:<width$}")
    }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        format!("{}...", value.chars().take(max - 3).collect::<String>())
    } else {
        value.to_string()
    }
}
