//! Live integration tests for stoneforged-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated SQLite database from the sqlx test
//! harness. The `migrations` path is relative to the crate root
//! (`crates/stoneforged-db/`), so `"../../migrations"` resolves to the
//! workspace migration directory.

use sqlx::SqlitePool;
use stoneforged_db::{
    delete_prospect, health_check, insert_prospect, list_prospects, seed_example_prospects,
    NewProspectRow,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_row(brand: &str, score: f64) -> NewProspectRow {
    NewProspectRow {
        brand: Some(brand.to_string()),
        trigger: Some("Funding round".to_string()),
        score: Some(score),
        decision_maker: Some("CEO".to_string()),
        next_action: Some("Intro email".to_string()),
    }
}

async fn count_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prospects")
        .fetch_one(pool)
        .await
        .expect("count prospects")
}

// ---------------------------------------------------------------------------
// health
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn health_check_succeeds_on_fresh_database(pool: SqlitePool) {
    health_check(&pool).await.expect("health check");
}

// ---------------------------------------------------------------------------
// insert / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn insert_returns_distinct_ids(pool: SqlitePool) {
    let a = insert_prospect(&pool, &new_row("Alpha", 6.0))
        .await
        .expect("insert alpha");
    let b = insert_prospect(&pool, &new_row("Beta", 7.0))
        .await
        .expect("insert beta");
    assert_ne!(a, b);
    assert_eq!(count_rows(&pool).await, 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_orders_by_score_descending(pool: SqlitePool) {
    for (brand, score) in [("Low", 3.5), ("High", 9.9), ("Mid", 6.1)] {
        insert_prospect(&pool, &new_row(brand, score))
            .await
            .expect("insert");
    }

    let rows = list_prospects(&pool).await.expect("list");
    let brands: Vec<&str> = rows.iter().map(|r| r.brand.as_str()).collect();
    assert_eq!(brands, vec!["High", "Mid", "Low"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_breaks_score_ties_by_id(pool: SqlitePool) {
    let first = insert_prospect(&pool, &new_row("First", 8.0))
        .await
        .expect("insert first");
    let second = insert_prospect(&pool, &new_row("Second", 8.0))
        .await
        .expect("insert second");

    let rows = list_prospects(&pool).await.expect("list");
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn insert_stores_unvalidated_values(pool: SqlitePool) {
    let row = NewProspectRow {
        brand: Some(String::new()),
        score: Some(42.0),
        ..NewProspectRow::default()
    };
    let id = insert_prospect(&pool, &row).await.expect("insert");

    let rows = list_prospects(&pool).await.expect("list");
    let stored = rows.iter().find(|r| r.id == id).expect("stored row");
    assert_eq!(stored.brand, "");
    assert!((stored.score - 42.0).abs() < f64::EPSILON);
}

#[sqlx::test(migrations = "../../migrations")]
async fn null_columns_read_back_as_defaults(pool: SqlitePool) {
    let id = insert_prospect(&pool, &NewProspectRow::default())
        .await
        .expect("insert all-null row");

    let rows = list_prospects(&pool).await.expect("list");
    let stored = rows.iter().find(|r| r.id == id).expect("stored row");
    assert_eq!(stored.brand, "");
    assert_eq!(stored.trigger, "");
    assert_eq!(stored.decision_maker, "");
    assert_eq!(stored.next_action, "");
    assert!(stored.score.abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn delete_reports_whether_a_row_was_removed(pool: SqlitePool) {
    let id = insert_prospect(&pool, &new_row("Doomed", 5.0))
        .await
        .expect("insert");

    assert!(delete_prospect(&pool, id).await.expect("first delete"));
    assert!(!delete_prospect(&pool, id).await.expect("second delete"));
    assert!(!delete_prospect(&pool, 9_999).await.expect("unknown id"));
    assert_eq!(count_rows(&pool).await, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn deleted_ids_are_not_reused(pool: SqlitePool) {
    let first = insert_prospect(&pool, &new_row("One", 5.0))
        .await
        .expect("insert");
    delete_prospect(&pool, first).await.expect("delete");
    let second = insert_prospect(&pool, &new_row("Two", 5.0))
        .await
        .expect("insert");
    assert!(second > first);
}

// ---------------------------------------------------------------------------
// seed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn seeding_inserts_three_examples(pool: SqlitePool) {
    let inserted = seed_example_prospects(&pool).await.expect("seed");
    assert_eq!(inserted, 3);

    let rows = list_prospects(&pool).await.expect("list");
    let brands: Vec<&str> = rows.iter().map(|r| r.brand.as_str()).collect();
    assert_eq!(brands, vec!["PureRest", "VitalSleep", "EnergyBoost"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn seeding_twice_does_not_duplicate(pool: SqlitePool) {
    seed_example_prospects(&pool).await.expect("first seed");
    let second = seed_example_prospects(&pool).await.expect("second seed");
    assert_eq!(second, 0);
    assert_eq!(count_rows(&pool).await, 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn seeding_skips_examples_whose_id_is_taken(pool: SqlitePool) {
    // Occupies id 1 before any seeding.
    let id = insert_prospect(&pool, &new_row("Manual", 4.0))
        .await
        .expect("insert");
    assert_eq!(id, 1);

    let inserted = seed_example_prospects(&pool).await.expect("seed");
    assert_eq!(inserted, 2);

    let rows = list_prospects(&pool).await.expect("list");
    assert!(rows.iter().any(|r| r.brand == "Manual"));
    assert!(!rows.iter().any(|r| r.brand == "VitalSleep"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn inserts_after_seeding_get_fresh_ids(pool: SqlitePool) {
    seed_example_prospects(&pool).await.expect("seed");
    let id = insert_prospect(&pool, &new_row("After", 5.0))
        .await
        .expect("insert");
    assert!(id > 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn reseeding_restores_a_deleted_example(pool: SqlitePool) {
    seed_example_prospects(&pool).await.expect("seed");
    assert!(delete_prospect(&pool, 2).await.expect("delete"));

    let inserted = seed_example_prospects(&pool).await.expect("reseed");
    assert_eq!(inserted, 1);
    assert_eq!(count_rows(&pool).await, 3);
}
