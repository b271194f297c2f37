//! Database models for daily puzzles.

use chrono::NaiveDate;
use diesel::prelude::*;
use stockle_core::errors::{Error, ValidationError};
use stockle_core::puzzles::{DailyPuzzle, GuessDistribution, NewDailyPuzzle, PriceBar};

/// Database model for a stored puzzle.
///
/// `price_history` and `distribution` are JSON arrays held in text columns.
#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::daily_puzzles)]
#[diesel(primary_key(puzzle_date))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PuzzleDB {
    pub puzzle_date: NaiveDate,
    pub ticker: String,
    pub price_history: String,
    pub distribution: String,
    pub total_plays: i32,
}

/// Database model for creating a puzzle
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::daily_puzzles)]
pub struct NewPuzzleDB {
    pub puzzle_date: NaiveDate,
    pub ticker: String,
    pub price_history: String,
    pub distribution: String,
    pub total_plays: i32,
}

impl TryFrom<NewDailyPuzzle> for NewPuzzleDB {
    type Error = Error;

    fn try_from(puzzle: NewDailyPuzzle) -> Result<Self, Self::Error> {
        Ok(Self {
            puzzle_date: puzzle.puzzle_date,
            ticker: puzzle.ticker,
            price_history: serde_json::to_string(&puzzle.price_history)?,
            distribution: serde_json::to_string(&puzzle.distribution)?,
            total_plays: i32::try_from(puzzle.total_plays).map_err(|_| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "total plays out of range: {}",
                    puzzle.total_plays
                )))
            })?,
        })
    }
}

impl TryFrom<PuzzleDB> for DailyPuzzle {
    type Error = Error;

    fn try_from(db: PuzzleDB) -> Result<Self, Self::Error> {
        let price_history: Vec<PriceBar> = serde_json::from_str(&db.price_history)?;
        let distribution: GuessDistribution = serde_json::from_str(&db.distribution)?;
        let total_plays = u32::try_from(db.total_plays).map_err(|_| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "negative total plays for {}: {}",
                db.puzzle_date, db.total_plays
            )))
        })?;

        Ok(Self {
            puzzle_date: db.puzzle_date,
            ticker: db.ticker,
            price_history,
            distribution,
            total_plays,
        })
    }
}
