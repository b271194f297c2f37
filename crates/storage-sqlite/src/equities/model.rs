//! Database models for the equity catalog.

use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use stockle_core::equities::Equity;
use stockle_core::errors::Error;

/// Database model for one catalog row.
///
/// Decimals are stored as text so that no precision is lost.
#[derive(Queryable, Selectable, Insertable, AsChangeset, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::equities)]
#[diesel(primary_key(ticker))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EquityDB {
    pub ticker: String,
    pub company_name: String,
    pub sector: String,
    pub industry: String,
    pub market_cap: Option<i64>,
    pub current_price: String,
    pub pe_ratio: Option<String>,
    pub dividend_yield: Option<String>,
}

/// Stored decimals that no longer parse are reported, not replaced.
impl TryFrom<EquityDB> for Equity {
    type Error = Error;

    fn try_from(db: EquityDB) -> Result<Self, Self::Error> {
        Ok(Self {
            current_price: Decimal::from_str(&db.current_price)?,
            pe_ratio: db.pe_ratio.as_deref().map(Decimal::from_str).transpose()?,
            dividend_yield: db
                .dividend_yield
                .as_deref()
                .map(Decimal::from_str)
                .transpose()?,
            market_cap: db.market_cap.unwrap_or(0),
            ticker: db.ticker,
            company_name: db.company_name,
            sector: db.sector,
            industry: db.industry,
        })
    }
}

impl From<Equity> for EquityDB {
    fn from(equity: Equity) -> Self {
        Self {
            ticker: equity.ticker,
            company_name: equity.company_name,
            sector: equity.sector,
            industry: equity.industry,
            market_cap: Some(equity.market_cap),
            current_price: equity.current_price.to_string(),
            pe_ratio: equity.pe_ratio.map(|v| v.to_string()),
            dividend_yield: equity.dividend_yield.map(|v| v.to_string()),
        }
    }
}
