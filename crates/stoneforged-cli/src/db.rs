//! Local database maintenance, run straight against `DATABASE_URL` without
//! going through the service.

use clap::Subcommand;
use sqlx::SqlitePool;
use stoneforged_core::AppConfig;

/// Sub-commands available under `db`.
#[derive(Debug, Subcommand)]
pub enum DbCommands {
    /// Apply pending migrations
    Migrate,
    /// Insert the example prospects (skips ids already taken)
    Seed,
    /// Check the database connection
    Ping,
}

pub(crate) async fn run_db_command(config: &AppConfig, command: DbCommands) -> anyhow::Result<()> {
    let pool = stoneforged_db::connect_pool(
        &config.database_url,
        stoneforged_db::PoolConfig::from_app_config(config),
    )
    .await?;

    match command {
        DbCommands::Migrate => run_db_migrate(&pool).await,
        DbCommands::Seed => run_db_seed(&pool).await,
        DbCommands::Ping => run_db_ping(&pool).await,
    }
}

async fn run_db_migrate(pool: &SqlitePool) -> anyhow::Result<()> {
    let applied = stoneforged_db::run_migrations(pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

async fn run_db_seed(pool: &SqlitePool) -> anyhow::Result<()> {
    stoneforged_db::run_migrations(pool).await?;
    let inserted = stoneforged_db::seed_example_prospects(pool).await?;
    println!(
        "inserted {inserted} of {} example prospects",
        stoneforged_db::EXAMPLE_PROSPECTS.len()
    );
    Ok(())
}

async fn run_db_ping(pool: &SqlitePool) -> anyhow::Result<()> {
    stoneforged_db::health_check(pool).await?;
    println!("database ok");
    Ok(())
}
