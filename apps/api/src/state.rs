use std::sync::Arc;

use crate::store::{ScoreStore, SeedStore};
use crate::wordhunt::dictionary::Dictionary;
use crate::wordhunt::leaderboard::LeaderboardRanker;
use crate::wordhunt::ledger::SubmissionLedger;
use crate::wordhunt::seed::SeedProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; everything mutable lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub seeds: SeedProvider,
    pub ledger: SubmissionLedger,
    pub leaderboard: LeaderboardRanker,
}

impl AppState {
    pub fn new(
        seed_store: Arc<dyn SeedStore>,
        score_store: Arc<dyn ScoreStore>,
        dictionary: Arc<dyn Dictionary>,
    ) -> Self {
        let seeds = SeedProvider::new(seed_store);
        Self {
            ledger: SubmissionLedger::new(seeds.clone(), score_store.clone(), dictionary),
            leaderboard: LeaderboardRanker::new(score_store),
            seeds,
        }
    }
}
