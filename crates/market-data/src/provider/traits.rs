//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{EquitySummary, HistoricalBar, HistoryRange};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockle_market_data::{EquitySummary, HistoricalBar, HistoryRange, MarketDataError};
/// use stockle_market_data::provider::MarketDataProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement the fetch methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the current summary for a symbol.
    async fn get_equity_summary(&self, symbol: &str) -> Result<EquitySummary, MarketDataError>;

    /// Fetch daily bars for a symbol over the given range.
    ///
    /// Bars are ordered by timestamp ascending. An empty vector means the
    /// provider has no data for the range, which is not an error.
    async fn get_price_history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Vec<HistoricalBar>, MarketDataError>;
}
