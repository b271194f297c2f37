use async_trait::async_trait;

use crate::equities::Equity;
use crate::errors::Result;
use crate::puzzles::PriceBar;
use stockle_market_data::HistoryRange;

/// Domain-facing market data access.
///
/// Implementations return values already rounded and defaulted, ready to be
/// persisted.
#[async_trait]
pub trait MarketDataGatewayTrait: Send + Sync {
    /// Current metadata for a ticker.
    async fn fetch_equity(&self, ticker: &str) -> Result<Equity>;

    /// Daily bars for a ticker, oldest first. Empty when the provider has none.
    async fn fetch_price_history(&self, ticker: &str, range: HistoryRange)
        -> Result<Vec<PriceBar>>;
}
