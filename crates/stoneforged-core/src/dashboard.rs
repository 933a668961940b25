//! In-memory dashboard state: a prospect snapshot plus the user's search and
//! sort settings. Every derived view is recomputed from the snapshot on
//! demand.

use crate::export::{prospects_to_csv, select_export_rows, ExportError};
use crate::prospect::Prospect;
use crate::stats::ProspectStats;
use crate::view::{filter_prospects, request_sort, sort_prospects, SortConfig, SortKey};

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    snapshot: Vec<Prospect>,
    search: String,
    sort: Option<SortConfig>,
}

impl DashboardView {
    #[must_use]
    pub fn new(snapshot: Vec<Prospect>) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    /// Swap in a freshly fetched snapshot. Search and sort settings survive.
    pub fn replace_snapshot(&mut self, snapshot: Vec<Prospect>) {
        self.snapshot = snapshot;
    }

    #[must_use]
    pub fn snapshot(&self) -> &[Prospect] {
        &self.snapshot
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Apply a column-header click and return the resulting sort.
    pub fn click_sort(&mut self, key: SortKey) -> SortConfig {
        let next = request_sort(self.sort, key);
        self.sort = Some(next);
        next
    }

    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort;
    }

    #[must_use]
    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    /// Arrow shown next to a column header, if that column drives the sort.
    #[must_use]
    pub fn sort_indicator(&self, key: SortKey) -> &'static str {
        match self.sort {
            Some(config) if config.key == key => config.direction.arrow(),
            _ => "",
        }
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&Prospect> {
        filter_prospects(&self.snapshot, &self.search)
    }

    /// Filtered rows in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Prospect> {
        sort_prospects(&self.filtered(), self.sort)
    }

    #[must_use]
    pub fn stats(&self) -> ProspectStats {
        ProspectStats::compute(&self.snapshot)
    }

    /// Placeholder text for an empty table.
    #[must_use]
    pub fn empty_message(&self) -> &'static str {
        if self.search.trim().is_empty() {
            "No prospects yet, add one!"
        } else {
            "No matches found"
        }
    }

    /// CSV for the visible rows, or for the whole snapshot when the view is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Empty`] when there is nothing at all to export.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        let visible = self.visible();
        let rows = select_export_rows(&visible, &self.snapshot)?;
        Ok(prospects_to_csv(&rows))
    }
}
