use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::wordhunt::ScoreRow;
use crate::store::{ScoreStore, StoreError};

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i32,
    pub words_found: i32,
}

impl From<ScoreRow> for LeaderboardEntry {
    fn from(row: ScoreRow) -> Self {
        Self {
            username: row.username,
            score: row.score,
            words_found: row.words_found,
        }
    }
}

/// Clamps a requested row count into `[1, MAX_LIMIT]`, defaulting to `DEFAULT_LIMIT`.
pub fn clamp_limit(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Read-only queries over stored scores.
#[derive(Clone)]
pub struct LeaderboardRanker {
    scores: Arc<dyn ScoreStore>,
}

impl LeaderboardRanker {
    pub fn new(scores: Arc<dyn ScoreStore>) -> Self {
        Self { scores }
    }

    /// Highest scores for `date`, best first.
    ///
    /// Ordering among equal scores is not deterministic: it is whatever the
    /// store returns and may differ between calls.
    pub async fn top(
        &self,
        date: NaiveDate,
        limit: Option<i64>,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let rows = self.scores.top_scores(date, clamp_limit(limit)).await?;
        Ok(rows.into_iter().map(LeaderboardEntry::from).collect())
    }

    /// The caller's own record for `date`, if they have submitted.
    pub async fn me(&self, date: NaiveDate, user_id: &str) -> Result<Option<ScoreRow>, StoreError> {
        self.scores.find_score(user_id, date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Utc;
    use uuid::Uuid;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    async fn seeded_store(n: usize) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        for i in 0..n {
            store
                .insert_score(&ScoreRow {
                    id: Uuid::new_v4(),
                    user_id: format!("user-{i}"),
                    username: format!("Player {i}"),
                    date: jan_15(),
                    score: ((i * 7) % 13) as i32,
                    words_found: i as i32,
                    found_words: vec![],
                    updated_at: Utc::now(),
                })
                .await
                .unwrap();
        }
        store
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None), 50);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
        assert_eq!(clamp_limit(Some(10)), 10);
        assert_eq!(clamp_limit(Some(10_000)), 200);
    }

    #[tokio::test]
    async fn test_top_is_sorted_and_limited() {
        let ranker = LeaderboardRanker::new(seeded_store(20).await);

        let top = ranker.top(jan_15(), Some(5)).await.unwrap();
        assert_eq!(top.len(), 5);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(top[0].score, 12);
    }

    #[tokio::test]
    async fn test_top_defaults_and_other_dates() {
        let ranker = LeaderboardRanker::new(seeded_store(3).await);
        assert_eq!(ranker.top(jan_15(), None).await.unwrap().len(), 3);

        let other = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        assert!(ranker.top(other, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_me() {
        let ranker = LeaderboardRanker::new(seeded_store(3).await);
        let mine = ranker.me(jan_15(), "user-2").await.unwrap().unwrap();
        assert_eq!(mine.username, "Player 2");
        assert!(ranker.me(jan_15(), "nobody").await.unwrap().is_none());
    }
}
