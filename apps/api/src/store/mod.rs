//! Storage capabilities for the word-hunt collections.
//!
//! The service only needs get-by-key, insert-with-uniqueness and an ordered
//! top-N query. Concurrency control is left to the backend's uniqueness
//! enforcement: callers that lose an insert race get `StoreError::Duplicate`
//! and re-read the winner.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::wordhunt::{DailySeedRow, ScoreRow};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert collided with an existing row on a unique key.
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate(db_err.message().to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}

/// Daily seed collection, unique on `date`.
#[async_trait]
pub trait SeedStore: Send + Sync {
    async fn find_seed(&self, date: NaiveDate) -> Result<Option<DailySeedRow>, StoreError>;

    /// Fails with `StoreError::Duplicate` if a seed for the date already exists.
    async fn insert_seed(&self, row: &DailySeedRow) -> Result<(), StoreError>;
}

/// Score collection, unique on `(user_id, date)`.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn find_score(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ScoreRow>, StoreError>;

    /// Fails with `StoreError::Duplicate` if the user already has a row for the date.
    async fn insert_score(&self, row: &ScoreRow) -> Result<(), StoreError>;

    /// Rows for `date` ordered by score descending, at most `limit` of them.
    /// Order among equal scores is backend-defined.
    async fn top_scores(&self, date: NaiveDate, limit: i64) -> Result<Vec<ScoreRow>, StoreError>;
}
