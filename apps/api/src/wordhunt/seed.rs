use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::wordhunt::DailySeedRow;
use crate::store::{SeedStore, StoreError};
use crate::wordhunt::grid::{self, Grid};

/// Seed for a calendar date: `year * 10000 + month * 100 + day`.
/// Depends on the date fields only, never on the clock.
pub fn derive_seed(date: NaiveDate) -> i64 {
    date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64
}

/// The board shown for a date.
#[derive(Debug, Clone, Serialize)]
pub struct DailyPuzzle {
    pub seed: i64,
    pub size: usize,
    pub grid: Grid,
}

/// Resolves the persisted seed for a date, creating it on first access.
#[derive(Clone)]
pub struct SeedProvider {
    store: Arc<dyn SeedStore>,
}

impl SeedProvider {
    pub fn new(store: Arc<dyn SeedStore>) -> Self {
        Self { store }
    }

    /// Returns the stored seed for `date`, inserting `derive_seed(date)` on a miss.
    ///
    /// If another writer inserts first, the duplicate-key failure is treated as
    /// "already exists" and the winner's row is re-read. Any other storage
    /// failure is returned to the caller.
    pub async fn get_or_create_seed(&self, date: NaiveDate) -> Result<i64, StoreError> {
        if let Some(existing) = self.store.find_seed(date).await? {
            debug!("Seed for {date} found: {}", existing.seed);
            return Ok(existing.seed);
        }

        let row = DailySeedRow {
            date,
            seed: derive_seed(date),
        };
        match self.store.insert_seed(&row).await {
            Ok(()) => {
                info!("Created daily seed {} for {date}", row.seed);
                Ok(row.seed)
            }
            Err(StoreError::Duplicate(detail)) => {
                warn!("Lost seed creation race for {date}; re-reading winner");
                match self.store.find_seed(date).await? {
                    Some(winner) => Ok(winner.seed),
                    None => Err(StoreError::Duplicate(detail)),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Seed and board for `date` at the (already clamped) `size`.
    pub async fn daily_puzzle(
        &self,
        date: NaiveDate,
        size: usize,
    ) -> Result<DailyPuzzle, StoreError> {
        let seed = self.get_or_create_seed(date).await?;
        let grid = grid::generate(seed, size);
        Ok(DailyPuzzle {
            seed,
            size: grid.size(),
            grid,
        })
    }
}
