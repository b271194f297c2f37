//! Market data module - the gateway between the provider and the domain.

mod market_data_gateway;
mod market_data_traits;

pub use market_data_gateway::{equity_from_summary, price_bar_from_historical, MarketDataGateway};
pub use market_data_traits::MarketDataGatewayTrait;

// Re-export provider types the services are configured with
pub use stockle_market_data::{HistoryRange, MarketDataProvider};
