//! Client-side dashboard: a cached prospect snapshot kept in sync with the
//! service.
//!
//! The snapshot is fetched once on load and again after every mutation.
//! Filtering, sorting, stats and CSV export all run locally against it.

use std::path::{Path, PathBuf};

use stoneforged_core::{export_filename_today, DashboardView, NewProspect};

use crate::client::ProspectClient;
use crate::error::ClientError;

pub(crate) struct Dashboard {
    client: ProspectClient,
    view: DashboardView,
}

impl Dashboard {
    pub(crate) fn new(client: ProspectClient) -> Self {
        Self {
            client,
            view: DashboardView::default(),
        }
    }

    /// Refetches the snapshot.
    ///
    /// A failed fetch is logged and the previous snapshot stays in place, so
    /// callers always have something to render. Returns whether the fetch
    /// succeeded.
    pub(crate) async fn load(&mut self) -> bool {
        match self.client.list_prospects().await {
            Ok(prospects) => {
                tracing::debug!(count = prospects.len(), "prospects loaded");
                self.view.replace_snapshot(prospects);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load prospects; keeping previous snapshot");
                false
            }
        }
    }

    pub(crate) fn view(&self) -> &DashboardView {
        &self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut DashboardView {
        &mut self.view
    }

    /// Submits a draft, then refreshes whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BrandRequired`] for a blank brand, in which
    /// case nothing is sent and nothing is refetched. Otherwise returns the
    /// request error after the refetch.
    pub(crate) async fn add(&mut self, draft: &NewProspect) -> Result<i64, ClientError> {
        if !draft.has_brand() {
            return Err(ClientError::BrandRequired);
        }
        let result = self.client.create_prospect(draft).await;
        match &result {
            Ok(id) => tracing::info!(id, brand = %draft.brand, "prospect added"),
            Err(e) => tracing::warn!(error = %e, brand = %draft.brand, "prospect add failed"),
        }
        self.load().await;
        result
    }

    /// Deletes by id, then refreshes whatever the outcome. `false` means the
    /// id did not exist.
    ///
    /// # Errors
    ///
    /// Returns the request error after the refetch.
    pub(crate) async fn delete(&mut self, id: i64) -> Result<bool, ClientError> {
        let result = self.client.delete_prospect(id).await;
        match &result {
            Ok(removed) => tracing::info!(id, removed, "prospect delete requested"),
            Err(e) => tracing::warn!(error = %e, id, "prospect delete failed"),
        }
        self.load().await;
        result
    }

    /// Seeds the example prospects, then refreshes whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns the request error after the refetch.
    pub(crate) async fn seed(&mut self) -> Result<usize, ClientError> {
        let result = self.client.seed().await;
        match &result {
            Ok(inserted) => tracing::info!(inserted, "example prospects seeded"),
            Err(e) => tracing::warn!(error = %e, "seeding failed"),
        }
        self.load().await;
        result
    }

    /// Writes the current view as CSV into `dir` under today's export name.
    ///
    /// # Errors
    ///
    /// Fails when there is nothing to export or the file cannot be written.
    pub(crate) fn export_to(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        let csv = self.view.export_csv()?;
        let path = dir.join(export_filename_today());
        std::fs::write(&path, csv)?;
        tracing::info!(path = %path.display(), "prospects exported");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
