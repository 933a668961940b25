use sqlx::SqlitePool;

use crate::DbError;

/// A fixed demonstration prospect.
#[derive(Debug, Clone, Copy)]
pub struct ExampleProspect {
    pub id: i64,
    pub brand: &'static str,
    pub trigger: &'static str,
    pub score: f64,
    pub decision_maker: &'static str,
    pub next_action: &'static str,
}

/// Demonstration rows. Their ids are fixed so re-seeding is a no-op.
pub const EXAMPLE_PROSPECTS: [ExampleProspect; 3] = [
    ExampleProspect {
        id: 1,
        brand: "VitalSleep",
        trigger: "New R&D hire",
        score: 9.2,
        decision_maker: "R&D Director",
        next_action: "Send sample",
    },
    ExampleProspect {
        id: 2,
        brand: "EnergyBoost",
        trigger: "Facility expansion",
        score: 8.7,
        decision_maker: "Innovation Manager",
        next_action: "Technical call",
    },
    ExampleProspect {
        id: 3,
        brand: "PureRest",
        trigger: "Reformulation announced",
        score: 9.8,
        decision_maker: "Formulation Lead",
        next_action: "Personalized message",
    },
];

/// Insert the example prospects, skipping any whose id is already taken.
///
/// Returns the number of rows actually inserted. Existing rows that share an
/// example id are left as they are, even if their contents differ.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any insert fails; the batch is rolled back.
pub async fn seed_example_prospects(pool: &SqlitePool) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0usize;

    for example in &EXAMPLE_PROSPECTS {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO prospects \
                 (id, brand, \"trigger\", score, decision_maker, next_action) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(example.id)
        .bind(example.brand)
        .bind(example.trigger)
        .bind(example.score)
        .bind(example.decision_maker)
        .bind(example.next_action)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
        }
    }

    tx.commit().await?;
    tracing::info!(inserted, "example prospects seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_ids_are_unique() {
        let mut ids: Vec<i64> = EXAMPLE_PROSPECTS.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EXAMPLE_PROSPECTS.len());
    }

    #[test]
    fn examples_are_high_readiness() {
        assert!(EXAMPLE_PROSPECTS.iter().all(|e| e.score >= 8.0));
    }
}
