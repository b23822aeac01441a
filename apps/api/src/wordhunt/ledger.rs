//! One scored submission per user per day.
//!
//! Per (user, date) the ledger moves from unsubmitted to submitted exactly
//! once. The first submission is scored against the day's board and stored as
//! an immutable row; every later attempt gets `SubmitOutcome::Duplicate`
//! carrying that row. Concurrent first submissions are settled by the store's
//! unique key: the loser re-reads and reports the winner's row.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::wordhunt::ScoreRow;
use crate::store::{ScoreStore, StoreError};
use crate::wordhunt::dictionary::Dictionary;
use crate::wordhunt::grid::DEFAULT_GRID_SIZE;
use crate::wordhunt::path;
use crate::wordhunt::scoring::total_score;
use crate::wordhunt::seed::SeedProvider;

pub const MIN_WORD_LEN: usize = 3;
pub const DUPLICATE_MESSAGE: &str = "Already submitted today.";
pub const ACCEPTED_MESSAGE: &str = "OK";

#[derive(Debug, Clone)]
pub struct Submission {
    pub date: NaiveDate,
    pub user_id: String,
    /// Shown on the leaderboard. Falls back to `user_id` when blank.
    pub display_name: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// First submission for the day; the freshly stored row.
    Accepted(ScoreRow),
    /// A row already existed; returned unchanged.
    Duplicate(ScoreRow),
}

impl SubmitOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Accepted(_) => ACCEPTED_MESSAGE,
            SubmitOutcome::Duplicate(_) => DUPLICATE_MESSAGE,
        }
    }

    pub fn record(&self) -> &ScoreRow {
        match self {
            SubmitOutcome::Accepted(row) | SubmitOutcome::Duplicate(row) => row,
        }
    }
}

/// Trims, uppercases and de-duplicates candidates, dropping anything shorter
/// than `MIN_WORD_LEN` characters. Output is sorted.
pub fn normalize_words<S: AsRef<str>>(words: &[S]) -> BTreeSet<String> {
    words
        .iter()
        .map(|w| w.as_ref().trim().to_uppercase())
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .collect()
}

#[derive(Clone)]
pub struct SubmissionLedger {
    seeds: SeedProvider,
    scores: Arc<dyn ScoreStore>,
    dictionary: Arc<dyn Dictionary>,
}

impl SubmissionLedger {
    pub fn new(
        seeds: SeedProvider,
        scores: Arc<dyn ScoreStore>,
        dictionary: Arc<dyn Dictionary>,
    ) -> Self {
        Self {
            seeds,
            scores,
            dictionary,
        }
    }

    pub async fn submit(&self, submission: Submission) -> Result<SubmitOutcome, AppError> {
        let user_id = submission.user_id.trim();
        if user_id.is_empty() {
            return Err(AppError::Validation("userId is required".to_string()));
        }
        let date = submission.date;

        if let Some(existing) = self.scores.find_score(user_id, date).await? {
            debug!("Rejecting repeat submission from {user_id} for {date}");
            return Ok(SubmitOutcome::Duplicate(existing));
        }

        let candidates = normalize_words(&submission.words);
        // Submissions are always scored on the default-size board for the day.
        let puzzle = self.seeds.daily_puzzle(date, DEFAULT_GRID_SIZE).await?;

        let found_words: Vec<String> = candidates
            .into_iter()
            .filter(|w| self.dictionary.contains(w) && path::exists(w, &puzzle.grid))
            .collect();
        let score = total_score(&found_words);

        let display_name = submission.display_name.trim();
        let row = ScoreRow {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            username: if display_name.is_empty() {
                user_id.to_string()
            } else {
                display_name.to_string()
            },
            date,
            score: score as i32,
            words_found: found_words.len() as i32,
            found_words,
            updated_at: Utc::now(),
        };

        match self.scores.insert_score(&row).await {
            Ok(()) => {
                info!(
                    "Recorded {} points ({} words) for {user_id} on {date}",
                    row.score, row.words_found
                );
                Ok(SubmitOutcome::Accepted(row))
            }
            Err(StoreError::Duplicate(detail)) => {
                warn!("Concurrent submission from {user_id} for {date}; keeping the first");
                match self.scores.find_score(user_id, date).await? {
                    Some(winner) => Ok(SubmitOutcome::Duplicate(winner)),
                    None => Err(StoreError::Duplicate(detail).into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}
