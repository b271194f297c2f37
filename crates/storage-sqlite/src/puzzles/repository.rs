use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::{debug, warn};
use std::sync::Arc;

use super::model::{NewPuzzleDB, PuzzleDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{daily_puzzles, equities};
use stockle_core::puzzles::{
    DailyPuzzle, EligibilityRules, NewDailyPuzzle, PuzzleInsertOutcome, PuzzleRepositoryTrait,
};
use stockle_core::errors::{DatabaseError, Error};
use stockle_core::Result;

pub struct PuzzleRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PuzzleRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        PuzzleRepository { pool, writer }
    }
}

fn find_ticker(conn: &mut SqliteConnection, date: NaiveDate) -> Result<Option<String>> {
    Ok(daily_puzzles::table
        .find(date)
        .select(daily_puzzles::ticker)
        .first::<String>(conn)
        .optional()
        .map_err(StorageError::from)?)
}

/// Outcome after `ON CONFLICT DO NOTHING` skipped the insert.
fn existing_outcome(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> Result<PuzzleInsertOutcome> {
    match find_ticker(conn, date)? {
        Some(ticker) => Ok(PuzzleInsertOutcome::AlreadyExists { ticker }),
        None => Err(Error::Database(DatabaseError::Internal(format!(
            "Insert for {} was skipped but no puzzle row exists",
            date
        )))),
    }
}

#[async_trait]
impl PuzzleRepositoryTrait for PuzzleRepository {
    fn get_puzzle_ticker(&self, date: NaiveDate) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        find_ticker(&mut conn, date)
    }

    fn get_puzzle(&self, date: NaiveDate) -> Result<Option<DailyPuzzle>> {
        let mut conn = get_connection(&self.pool)?;
        daily_puzzles::table
            .find(date)
            .select(PuzzleDB::as_select())
            .first::<PuzzleDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(DailyPuzzle::try_from)
            .transpose()
    }

    fn latest_puzzle(&self) -> Result<Option<DailyPuzzle>> {
        let mut conn = get_connection(&self.pool)?;
        daily_puzzles::table
            .order(daily_puzzles::puzzle_date.desc())
            .select(PuzzleDB::as_select())
            .first::<PuzzleDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(DailyPuzzle::try_from)
            .transpose()
    }

    fn get_eligible_tickers(
        &self,
        today: NaiveDate,
        rules: &EligibilityRules,
    ) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;

        let recently_used = daily_puzzles::table
            .filter(daily_puzzles::puzzle_date.ge(rules.window_start(today)))
            .filter(daily_puzzles::puzzle_date.le(today))
            .select(daily_puzzles::ticker);

        let tickers = equities::table
            .filter(equities::ticker.ne_all(recently_used))
            .order((
                equities::market_cap.is_null().asc(),
                equities::market_cap.desc(),
                equities::ticker.asc(),
            ))
            .limit(rules.pool_size)
            .select(equities::ticker)
            .load::<String>(&mut conn)
            .map_err(StorageError::from)?;

        debug!(
            "{} eligible tickers for {} (window from {})",
            tickers.len(),
            today,
            rules.window_start(today)
        );
        Ok(tickers)
    }

    /// The existence check and the insert share one immediate transaction on
    /// the writer connection. `ON CONFLICT DO NOTHING` backs up the check.
    async fn insert_puzzle_if_absent(
        &self,
        puzzle: NewDailyPuzzle,
    ) -> Result<PuzzleInsertOutcome> {
        let row = NewPuzzleDB::try_from(puzzle)?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<PuzzleInsertOutcome> {
                if let Some(ticker) = find_ticker(conn, row.puzzle_date)? {
                    return Ok(PuzzleInsertOutcome::AlreadyExists { ticker });
                }

                let inserted = diesel::insert_into(daily_puzzles::table)
                    .values(&row)
                    .on_conflict(daily_puzzles::puzzle_date)
                    .do_nothing()
                    .execute(conn)
                    .map_err(StorageError::from)?;

                if inserted == 0 {
                    warn!("Puzzle for {} was inserted concurrently", row.puzzle_date);
                    return existing_outcome(conn, row.puzzle_date);
                }
                Ok(PuzzleInsertOutcome::Inserted)
            })
            .await
    }
}
