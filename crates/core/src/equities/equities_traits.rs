use crate::equities::equities_model::{Equity, RefreshOutcome, RefreshSummary};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for equity catalog persistence
#[async_trait]
pub trait EquityRepositoryTrait: Send + Sync {
    fn get_equity(&self, ticker: &str) -> Result<Option<Equity>>;
    fn list_equities(&self) -> Result<Vec<Equity>>;
    /// Inserts or replaces the row keyed by ticker, in its own transaction.
    async fn upsert_equity(&self, equity: Equity) -> Result<Equity>;
}

/// Trait for catalog refresh operations
#[async_trait]
pub trait EquityServiceTrait: Send + Sync {
    async fn refresh_equity(&self, ticker: &str) -> RefreshOutcome;
    async fn refresh_catalog(&self, tickers: &[String]) -> RefreshSummary;
}
