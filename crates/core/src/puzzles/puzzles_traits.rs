use async_trait::async_trait;
use chrono::NaiveDate;
use rand::RngCore;

use super::eligibility::EligibilityRules;
use super::puzzles_model::{DailyPuzzle, DailyPuzzleOutcome, NewDailyPuzzle, PuzzleInsertOutcome};
use crate::errors::Result;

/// Persistence for daily puzzles and the candidate ranking query.
#[async_trait]
pub trait PuzzleRepositoryTrait: Send + Sync {
    /// Ticker of the puzzle stored for `date`, if any.
    fn get_puzzle_ticker(&self, date: NaiveDate) -> Result<Option<String>>;

    fn get_puzzle(&self, date: NaiveDate) -> Result<Option<DailyPuzzle>>;

    /// The puzzle with the most recent date.
    fn latest_puzzle(&self) -> Result<Option<DailyPuzzle>>;

    /// Candidate tickers by descending market cap (unknown caps last),
    /// without tickers used inside the lookback window, capped to the pool size.
    fn get_eligible_tickers(&self, today: NaiveDate, rules: &EligibilityRules)
        -> Result<Vec<String>>;

    /// Inserts the puzzle unless one already exists for its date.
    async fn insert_puzzle_if_absent(&self, puzzle: NewDailyPuzzle)
        -> Result<PuzzleInsertOutcome>;
}

#[async_trait]
pub trait PuzzleServiceTrait: Send + Sync {
    /// Creates the puzzle for `date` once. Later calls for the same date
    /// report the stored ticker and write nothing.
    async fn create_daily_puzzle(
        &self,
        date: NaiveDate,
        rng: &mut (dyn RngCore + Send),
    ) -> Result<DailyPuzzleOutcome>;

    fn get_puzzle(&self, date: NaiveDate) -> Result<Option<DailyPuzzle>>;

    fn latest_puzzle(&self) -> Result<Option<DailyPuzzle>>;
}
