//! GET /api/v1/triggers: trigger categories and their score bonuses.

use axum::{Extension, Json};
use serde::Serialize;
use stoneforged_core::TriggerCategory;

use crate::middleware::RequestId;

use super::{ApiResponse, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct TriggerItem {
    pub category: TriggerCategory,
    pub label: &'static str,
    pub value: &'static str,
    pub bonus: u8,
    pub default_score: f64,
}

pub(super) async fn list_triggers(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<TriggerItem>>> {
    let data = TriggerCategory::ALL
        .into_iter()
        .map(|category| TriggerItem {
            category,
            label: category.label(),
            value: category.value(),
            bonus: category.bonus(),
            default_score: category.default_score(),
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
