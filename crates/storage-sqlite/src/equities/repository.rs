use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::EquityDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::equities;
use stockle_core::equities::{Equity, EquityRepositoryTrait};
use stockle_core::Result;

pub struct EquityRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl EquityRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        EquityRepository { pool, writer }
    }
}

#[async_trait]
impl EquityRepositoryTrait for EquityRepository {
    fn get_equity(&self, ticker: &str) -> Result<Option<Equity>> {
        let mut conn = get_connection(&self.pool)?;
        let row = equities::table
            .find(ticker)
            .select(EquityDB::as_select())
            .first::<EquityDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(Equity::try_from).transpose()
    }

    fn list_equities(&self) -> Result<Vec<Equity>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = equities::table
            .select(EquityDB::as_select())
            .order(equities::ticker.asc())
            .load::<EquityDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Equity::try_from).collect()
    }

    /// Inserts the row or overwrites every column of the existing one.
    async fn upsert_equity(&self, equity: Equity) -> Result<Equity> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Equity> {
                let row: EquityDB = equity.into();
                debug!("Upserting equity {}", row.ticker);

                let saved = diesel::insert_into(equities::table)
                    .values(&row)
                    .on_conflict(equities::ticker)
                    .do_update()
                    .set(&row)
                    .returning(EquityDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Equity::try_from(saved)
            })
            .await
    }
}
