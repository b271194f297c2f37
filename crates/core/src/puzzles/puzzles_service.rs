use async_trait::async_trait;
use chrono::NaiveDate;
use log::{info, warn};
use rand::RngCore;
use std::sync::Arc;

use super::distribution::synthesize_distribution;
use super::eligibility::EligibilityRules;
use super::puzzles_model::{DailyPuzzle, DailyPuzzleOutcome, NewDailyPuzzle, PuzzleInsertOutcome};
use super::puzzles_traits::{PuzzleRepositoryTrait, PuzzleServiceTrait};
use super::selector::select_puzzle_ticker;
use crate::errors::Result;
use crate::market_data::{HistoryRange, MarketDataGatewayTrait};

/// Runs the daily puzzle step against a repository and a gateway.
pub struct PuzzleService {
    repository: Arc<dyn PuzzleRepositoryTrait>,
    gateway: Arc<dyn MarketDataGatewayTrait>,
    rules: EligibilityRules,
    history_range: HistoryRange,
}

impl PuzzleService {
    pub fn new(
        repository: Arc<dyn PuzzleRepositoryTrait>,
        gateway: Arc<dyn MarketDataGatewayTrait>,
    ) -> Self {
        Self {
            repository,
            gateway,
            rules: EligibilityRules::default(),
            history_range: HistoryRange::default(),
        }
    }

    pub fn with_rules(mut self, rules: EligibilityRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_history_range(mut self, range: HistoryRange) -> Self {
        self.history_range = range;
        self
    }
}

#[async_trait]
impl PuzzleServiceTrait for PuzzleService {
    async fn create_daily_puzzle(
        &self,
        date: NaiveDate,
        rng: &mut (dyn RngCore + Send),
    ) -> Result<DailyPuzzleOutcome> {
        if let Some(ticker) = self.repository.get_puzzle_ticker(date)? {
            info!("Puzzle already set for {}: {}", date, ticker);
            return Ok(DailyPuzzleOutcome::AlreadyExists { ticker });
        }

        let pool = self.repository.get_eligible_tickers(date, &self.rules)?;
        let ticker = match select_puzzle_ticker(&pool, &mut *rng) {
            Some(ticker) => ticker.clone(),
            None => {
                warn!("No eligible stocks found for {}", date);
                return Ok(DailyPuzzleOutcome::NoEligibleCandidates);
            }
        };
        info!("Selected ticker: {} (pool of {})", ticker, pool.len());

        info!("Fetching {} of price history...", self.history_range);
        let price_history = self
            .gateway
            .fetch_price_history(&ticker, self.history_range)
            .await?;
        info!("Got {} days of data", price_history.len());

        let distribution = synthesize_distribution(rng)?;
        let bars = price_history.len();
        let puzzle = NewDailyPuzzle::new(date, ticker.clone(), price_history, distribution);
        let total_plays = puzzle.total_plays;

        match self.repository.insert_puzzle_if_absent(puzzle).await? {
            PuzzleInsertOutcome::Inserted => {
                info!("Daily puzzle set: {} for {}", ticker, date);
                Ok(DailyPuzzleOutcome::Created {
                    ticker,
                    bars,
                    total_plays,
                })
            }
            PuzzleInsertOutcome::AlreadyExists { ticker } => {
                info!("Puzzle already set for {}: {}", date, ticker);
                Ok(DailyPuzzleOutcome::AlreadyExists { ticker })
            }
        }
    }

    fn get_puzzle(&self, date: NaiveDate) -> Result<Option<DailyPuzzle>> {
        self.repository.get_puzzle(date)
    }

    fn latest_puzzle(&self) -> Result<Option<DailyPuzzle>> {
        self.repository.latest_puzzle()
    }
}
