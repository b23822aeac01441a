use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One seed per calendar date. Created lazily, never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DailySeedRow {
    pub date: NaiveDate,
    pub seed: i64,
}

/// A user's scored submission for one date.
/// Unique per (user_id, date) and append-only: rows are inserted once and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ScoreRow {
    pub id: Uuid,
    pub user_id: String,
    pub username: String,
    pub date: NaiveDate,
    pub score: i32,
    pub words_found: i32,
    pub found_words: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
