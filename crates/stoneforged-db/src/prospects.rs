//! Database operations for the `prospects` table.

use sqlx::SqlitePool;
use stoneforged_core::{NewProspect, Prospect};

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `prospects` table with NULL columns coalesced to empty
/// strings and a zero score.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProspectRow {
    pub id: i64,
    pub brand: String,
    pub trigger: String,
    pub score: f64,
    pub decision_maker: String,
    pub next_action: String,
}

impl From<ProspectRow> for Prospect {
    fn from(row: ProspectRow) -> Self {
        Prospect {
            id: row.id,
            brand: row.brand,
            trigger: row.trigger,
            score: row.score,
            decision_maker: row.decision_maker,
            next_action: row.next_action,
        }
    }
}

/// Column values for a new row. Every column may be NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProspectRow {
    pub brand: Option<String>,
    pub trigger: Option<String>,
    pub score: Option<f64>,
    pub decision_maker: Option<String>,
    pub next_action: Option<String>,
}

impl From<NewProspect> for NewProspectRow {
    fn from(draft: NewProspect) -> Self {
        Self {
            brand: Some(draft.brand),
            trigger: Some(draft.trigger),
            score: Some(draft.score),
            decision_maker: Some(draft.decision_maker),
            next_action: Some(draft.next_action),
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns every prospect, highest score first. Ties fall back to id order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_prospects(pool: &SqlitePool) -> Result<Vec<ProspectRow>, DbError> {
    let rows = sqlx::query_as::<_, ProspectRow>(
        "SELECT id, \
                COALESCE(brand, '') AS brand, \
                COALESCE(\"trigger\", '') AS \"trigger\", \
                CAST(COALESCE(score, 0.0) AS REAL) AS score, \
                COALESCE(decision_maker, '') AS decision_maker, \
                COALESCE(next_action, '') AS next_action \
         FROM prospects \
         ORDER BY score DESC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Inserts a prospect as given and returns its new id.
///
/// No validation happens here; empty brands and out-of-range scores are
/// stored unchanged.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_prospect(pool: &SqlitePool, new: &NewProspectRow) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO prospects (brand, \"trigger\", score, decision_maker, next_action) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         RETURNING id",
    )
    .bind(&new.brand)
    .bind(&new.trigger)
    .bind(new.score)
    .bind(&new.decision_maker)
    .bind(&new.next_action)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Deletes a prospect by id. Returns `true` iff a row was removed.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the delete fails.
pub async fn delete_prospect(pool: &SqlitePool, id: i64) -> Result<bool, DbError> {
    let result = sqlx::query("DELETE FROM prospects WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_into_prospect() {
        let row = ProspectRow {
            id: 7,
            brand: "Calmwave".to_string(),
            trigger: "Funding round".to_string(),
            score: 7.0,
            decision_maker: "CEO".to_string(),
            next_action: "Intro email".to_string(),
        };
        let prospect = Prospect::from(row);
        assert_eq!(prospect.id, 7);
        assert_eq!(prospect.brand, "Calmwave");
        assert_eq!(prospect.next_action, "Intro email");
    }

    #[test]
    fn draft_converts_into_fully_populated_row() {
        let draft = NewProspect {
            brand: "Calmwave".to_string(),
            ..NewProspect::default()
        };
        let row = NewProspectRow::from(draft);
        assert_eq!(row.brand.as_deref(), Some("Calmwave"));
        assert_eq!(row.trigger.as_deref(), Some(""));
        assert_eq!(row.score, Some(5.0));
    }
}
