use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::models::wordhunt::{DailySeedRow, ScoreRow};
use crate::store::{ScoreStore, SeedStore, StoreError};

/// In-process store with the same uniqueness rules as the Postgres tables.
/// Used by tests and by `STORE_BACKEND=memory`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    seeds: Arc<RwLock<HashMap<NaiveDate, DailySeedRow>>>,
    scores: Arc<RwLock<HashMap<(String, NaiveDate), ScoreRow>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn find_seed(&self, date: NaiveDate) -> Result<Option<DailySeedRow>, StoreError> {
        Ok(self.seeds.read().await.get(&date).cloned())
    }

    async fn insert_seed(&self, row: &DailySeedRow) -> Result<(), StoreError> {
        let mut seeds = self.seeds.write().await;
        if seeds.contains_key(&row.date) {
            return Err(StoreError::Duplicate(format!("wh_daily_seed.date = {}", row.date)));
        }
        seeds.insert(row.date, row.clone());
        Ok(())
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn find_score(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ScoreRow>, StoreError> {
        Ok(self
            .scores
            .read()
            .await
            .get(&(user_id.to_string(), date))
            .cloned())
    }

    async fn insert_score(&self, row: &ScoreRow) -> Result<(), StoreError> {
        let mut scores = self.scores.write().await;
        let key = (row.user_id.clone(), row.date);
        if scores.contains_key(&key) {
            return Err(StoreError::Duplicate(format!(
                "wh_scores(user_id, date) = ({}, {})",
                row.user_id, row.date
            )));
        }
        scores.insert(key, row.clone());
        Ok(())
    }

    async fn top_scores(&self, date: NaiveDate, limit: i64) -> Result<Vec<ScoreRow>, StoreError> {
        let scores = self.scores.read().await;
        let mut rows: Vec<ScoreRow> = scores.values().filter(|r| r.date == date).cloned().collect();
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn row(user: &str, date: NaiveDate, score: i32) -> ScoreRow {
        ScoreRow {
            id: Uuid::new_v4(),
            user_id: user.to_string(),
            username: user.to_string(),
            date,
            score,
            words_found: 0,
            found_words: vec![],
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_seed_insert_is_unique_per_date() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let seed = DailySeedRow { date, seed: 1 };
        store.insert_seed(&seed).await.unwrap();

        let err = store
            .insert_seed(&DailySeedRow { date, seed: 2 })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
        assert_eq!(store.find_seed(date).await.unwrap(), Some(seed));
    }

    #[tokio::test]
    async fn test_score_insert_is_unique_per_user_and_date() {
        let store = MemoryStore::new();
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();

        store.insert_score(&row("alice", d1, 3)).await.unwrap();
        store.insert_score(&row("alice", d2, 4)).await.unwrap();
        store.insert_score(&row("bob", d1, 5)).await.unwrap();
        let err = store.insert_score(&row("alice", d1, 9)).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));

        let kept = store.find_score("alice", d1).await.unwrap().unwrap();
        assert_eq!(kept.score, 3);
    }

    #[tokio::test]
    async fn test_top_scores_filters_by_date_and_limits() {
        let store = MemoryStore::new();
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        store.insert_score(&row("a", d1, 1)).await.unwrap();
        store.insert_score(&row("b", d1, 7)).await.unwrap();
        store.insert_score(&row("c", d1, 4)).await.unwrap();
        store.insert_score(&row("d", d2, 99)).await.unwrap();

        let top = store.top_scores(d1, 2).await.unwrap();
        let users: Vec<_> = top.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(users, vec!["b", "c"]);
    }
}
