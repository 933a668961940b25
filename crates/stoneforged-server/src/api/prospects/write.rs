//! Prospect write handlers: create, delete, seed.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use stoneforged_db::NewProspectRow;

use crate::middleware::RequestId;

use super::super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /api/v1/prospects`. Missing fields are stored as NULL and
/// nothing is validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(in crate::api) struct CreateProspectRequest {
    pub brand: Option<String>,
    pub trigger: Option<String>,
    pub score: Option<f64>,
    pub decision_maker: Option<String>,
    pub next_action: Option<String>,
}

impl From<CreateProspectRequest> for NewProspectRow {
    fn from(body: CreateProspectRequest) -> Self {
        NewProspectRow {
            brand: body.brand,
            trigger: body.trigger,
            score: body.score,
            decision_maker: body.decision_maker,
            next_action: body.next_action,
        }
    }
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(in crate::api) struct CreateProspectResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct DeleteProspectResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct SeedResponse {
    pub message: &'static str,
    pub inserted: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/prospects: insert a prospect exactly as received.
pub(in crate::api) async fn create_prospect(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateProspectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateProspectResponse>>), ApiError> {
    let rid = &req_id.0;
    let row = NewProspectRow::from(body);

    let id = stoneforged_db::insert_prospect(&state.pool, &row)
        .await
        .map_err(|e| map_db_error(rid.clone(), &e))?;
    tracing::info!(id, brand = row.brand.as_deref().unwrap_or(""), "prospect created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: CreateProspectResponse { success: true, id },
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

/// DELETE /api/v1/prospects/{id}: a missing id is `success: false`, not 404.
pub(in crate::api) async fn delete_prospect(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeleteProspectResponse>>, ApiError> {
    let success = stoneforged_db::delete_prospect(&state.pool, id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    tracing::info!(id, success, "prospect delete");

    Ok(Json(ApiResponse {
        data: DeleteProspectResponse { success },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// GET|POST /api/v1/seed: insert the example prospects that are missing.
pub(in crate::api) async fn seed_prospects(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<SeedResponse>>, ApiError> {
    let inserted = stoneforged_db::seed_example_prospects(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: SeedResponse {
            message: "Examples added!",
            inserted,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
