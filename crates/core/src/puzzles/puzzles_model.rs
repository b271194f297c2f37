//! Daily puzzle domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISTRIBUTION_BUCKETS;
use crate::errors::{Error, ValidationError};

/// One trading day of a puzzle's price history.
///
/// Serialized as `{"date":"YYYY-MM-DD","open":..,"high":..,"low":..,"close":..,"volume":..}`
/// with prices as JSON numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

/// Simulated guess counts, one bucket per outcome from 0 through 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u32>", try_from = "Vec<i64>")]
pub struct GuessDistribution([u32; DISTRIBUTION_BUCKETS]);

impl GuessDistribution {
    pub fn from_buckets(buckets: [u32; DISTRIBUTION_BUCKETS]) -> Self {
        Self(buckets)
    }

    pub fn buckets(&self) -> &[u32; DISTRIBUTION_BUCKETS] {
        &self.0
    }

    /// Adds one play to `bucket`. Out of range buckets are ignored.
    pub fn record(&mut self, bucket: usize) {
        if let Some(count) = self.0.get_mut(bucket) {
            *count += 1;
        }
    }

    /// Number of simulated plays.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl From<GuessDistribution> for Vec<u32> {
    fn from(distribution: GuessDistribution) -> Self {
        distribution.0.to_vec()
    }
}

impl TryFrom<Vec<i64>> for GuessDistribution {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        if values.len() != DISTRIBUTION_BUCKETS {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "distribution must have {} buckets, got {}",
                DISTRIBUTION_BUCKETS,
                values.len()
            ))));
        }

        let mut buckets = [0u32; DISTRIBUTION_BUCKETS];
        for (slot, value) in buckets.iter_mut().zip(values) {
            *slot = u32::try_from(value).map_err(|_| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "distribution bucket out of range: {}",
                    value
                )))
            })?;
        }
        Ok(Self(buckets))
    }
}

/// A persisted daily puzzle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPuzzle {
    pub puzzle_date: NaiveDate,
    pub ticker: String,
    pub price_history: Vec<PriceBar>,
    pub distribution: GuessDistribution,
    pub total_plays: u32,
}

/// Input model for creating a daily puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDailyPuzzle {
    pub puzzle_date: NaiveDate,
    pub ticker: String,
    pub price_history: Vec<PriceBar>,
    pub distribution: GuessDistribution,
    pub total_plays: u32,
}

impl NewDailyPuzzle {
    /// `total_plays` is taken from the distribution.
    pub fn new(
        puzzle_date: NaiveDate,
        ticker: impl Into<String>,
        price_history: Vec<PriceBar>,
        distribution: GuessDistribution,
    ) -> Self {
        Self {
            puzzle_date,
            ticker: ticker.into(),
            price_history,
            total_plays: distribution.total(),
            distribution,
        }
    }
}

impl From<NewDailyPuzzle> for DailyPuzzle {
    fn from(puzzle: NewDailyPuzzle) -> Self {
        Self {
            puzzle_date: puzzle.puzzle_date,
            ticker: puzzle.ticker,
            price_history: puzzle.price_history,
            distribution: puzzle.distribution,
            total_plays: puzzle.total_plays,
        }
    }
}

/// Result of an insert-if-absent on the puzzle date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleInsertOutcome {
    Inserted,
    AlreadyExists { ticker: String },
}

/// Result of the daily puzzle step.
#[derive(Debug, Clone, PartialEq)]
pub enum DailyPuzzleOutcome {
    Created {
        ticker: String,
        bars: usize,
        total_plays: u32,
    },
    AlreadyExists {
        ticker: String,
    },
    NoEligibleCandidates,
}
