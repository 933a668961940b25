use axum::{extract::State, Extension, Json};
use serde::Serialize;
use stoneforged_core::{Prospect, ProspectStats};

use crate::middleware::RequestId;

use super::super::{ApiError, ApiResponse, AppState, ResponseMeta};
use super::load_snapshot;

#[derive(Debug, Serialize)]
pub(in crate::api) struct StatsResponse {
    #[serde(flatten)]
    pub stats: ProspectStats,
    pub average_display: String,
}

/// GET /api/v1/prospects: every prospect, highest score first.
pub(in crate::api) async fn list_prospects(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<Prospect>>>, ApiError> {
    let data = load_snapshot(&state.pool, &req_id.0).await?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// GET /api/v1/prospects/stats: aggregates over the full set.
pub(in crate::api) async fn prospect_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<StatsResponse>>, ApiError> {
    let snapshot = load_snapshot(&state.pool, &req_id.0).await?;
    let stats = ProspectStats::compute(&snapshot);
    let average_display = stats.average_display();

    Ok(Json(ApiResponse {
        data: StatsResponse {
            stats,
            average_display,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
