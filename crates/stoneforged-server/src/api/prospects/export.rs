use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Extension,
};
use serde::Deserialize;
use stoneforged_core::{
    export_filename_today, DashboardView, ExportError, SortConfig, SortDirection, SortKey,
};

use crate::middleware::RequestId;

use super::super::{ApiError, AppState};
use super::load_snapshot;

#[derive(Debug, Deserialize)]
pub(in crate::api) struct ExportQuery {
    /// Search term, matched like the dashboard search box.
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl ExportQuery {
    fn sort_config(&self, rid: &str) -> Result<Option<SortConfig>, ApiError> {
        let Some(raw_key) = self.sort.as_deref() else {
            return Ok(None);
        };
        let key = raw_key
            .parse::<SortKey>()
            .map_err(|e| ApiError::new(rid, "validation_error", e.to_string()))?;
        let direction = match self.dir.as_deref() {
            Some(raw) => raw
                .parse::<SortDirection>()
                .map_err(|e| ApiError::new(rid, "validation_error", e.to_string()))?,
            None => SortDirection::Asc,
        };
        Ok(Some(SortConfig { key, direction }))
    }
}

/// GET /api/v1/prospects/export.csv: CSV of the filtered, sorted view.
///
/// Falls back to every prospect when the search matches nothing; 404s when
/// there are no prospects at all.
pub(in crate::api) async fn export_csv(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rid = &req_id.0;
    let sort = query.sort_config(rid)?;
    let snapshot = load_snapshot(&state.pool, rid).await?;

    let mut view = DashboardView::new(snapshot);
    if let Some(term) = query.q {
        view.set_search(term);
    }
    view.set_sort(sort);

    let csv = view.export_csv().map_err(|e| match e {
        ExportError::Empty => ApiError::new(rid, "nothing_to_export", e.to_string()),
    })?;
    let filename = export_filename_today();
    tracing::info!(%filename, bytes = csv.len(), "prospects exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}
