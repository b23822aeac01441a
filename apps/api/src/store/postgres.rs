use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::wordhunt::{DailySeedRow, ScoreRow};
use crate::store::{ScoreStore, SeedStore, StoreError};

/// PostgreSQL-backed store. Uniqueness comes from the table constraints
/// created in `db::ensure_schema`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeedStore for PgStore {
    async fn find_seed(&self, date: NaiveDate) -> Result<Option<DailySeedRow>, StoreError> {
        Ok(
            sqlx::query_as::<_, DailySeedRow>("SELECT date, seed FROM wh_daily_seed WHERE date = $1")
                .bind(date)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn insert_seed(&self, row: &DailySeedRow) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO wh_daily_seed (date, seed) VALUES ($1, $2)")
            .bind(row.date)
            .bind(row.seed)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ScoreStore for PgStore {
    async fn find_score(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ScoreRow>, StoreError> {
        Ok(sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT id, user_id, username, date, score, words_found, found_words, updated_at
            FROM wh_scores
            WHERE user_id = $1 AND date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_score(&self, row: &ScoreRow) -> Result<(), StoreError> {
        // Append-only: INSERT once, never UPDATE
        sqlx::query(
            r#"
            INSERT INTO wh_scores
                (id, user_id, username, date, score, words_found, found_words, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(row.id)
        .bind(&row.user_id)
        .bind(&row.username)
        .bind(row.date)
        .bind(row.score)
        .bind(row.words_found)
        .bind(&row.found_words)
        .bind(row.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn top_scores(&self, date: NaiveDate, limit: i64) -> Result<Vec<ScoreRow>, StoreError> {
        Ok(sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT id, user_id, username, date, score, words_found, found_words, updated_at
            FROM wh_scores
            WHERE date = $1
            ORDER BY score DESC
            LIMIT $2
            "#,
        )
        .bind(date)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}
