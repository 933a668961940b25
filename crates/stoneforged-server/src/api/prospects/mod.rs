//! Prospect API handlers.
//!
//! - `GET    /api/v1/prospects`: full list, highest score first
//! - `POST   /api/v1/prospects`: insert a prospect as given
//! - `DELETE /api/v1/prospects/{id}`: delete by id, reporting success
//! - `GET    /api/v1/prospects/stats`: totals and average score
//! - `GET    /api/v1/prospects/export.csv`: CSV download of a filtered view
//! - `GET|POST /api/v1/seed`: insert the example prospects

mod export;
mod list;
mod write;

pub(super) use export::export_csv;
pub(super) use list::{list_prospects, prospect_stats};
pub(super) use write::{create_prospect, delete_prospect, seed_prospects};

use stoneforged_core::Prospect;

use super::{map_db_error, ApiError};

/// Load the full prospect snapshot in list order.
async fn load_snapshot(
    pool: &sqlx::SqlitePool,
    request_id: &str,
) -> Result<Vec<Prospect>, ApiError> {
    let rows = stoneforged_db::list_prospects(pool)
        .await
        .map_err(|e| map_db_error(request_id.to_owned(), &e))?;
    Ok(rows.into_iter().map(Prospect::from).collect())
}
