use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS wh_daily_seed (
        date DATE PRIMARY KEY,
        seed BIGINT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS wh_scores (
        id          UUID PRIMARY KEY,
        user_id     TEXT NOT NULL,
        username    TEXT NOT NULL,
        date        DATE NOT NULL,
        score       INTEGER NOT NULL,
        words_found INTEGER NOT NULL,
        found_words TEXT[] NOT NULL DEFAULT '{}',
        updated_at  TIMESTAMPTZ NOT NULL,
        CONSTRAINT wh_scores_user_date_key UNIQUE (user_id, date)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS wh_scores_date_score_idx ON wh_scores (date, score DESC)",
];

/// Creates the word-hunt tables and indexes if they do not exist yet.
/// The unique constraints are what resolve concurrent first-time writes.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("failed to apply word-hunt schema")?;
    }
    info!("Word-hunt schema ready");
    Ok(())
}
