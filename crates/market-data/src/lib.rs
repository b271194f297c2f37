//! Stockle Market Data Crate
//!
//! Provider-agnostic access to the two pieces of market data the daily
//! fetcher needs:
//! - a point-in-time equity summary (names, classification, size, price,
//!   valuation ratios), and
//! - a daily OHLCV history over a lookback range.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   stockle-core   |  (rounding, fallbacks, persistence)
//! +------------------+
//!          |
//!          v
//! +--------------------+
//! | MarketDataProvider |  (trait)
//! +--------------------+
//!          |
//!          v
//! +------------------+
//! |  YahooProvider   |  (quoteSummary + chart API)
//! +------------------+
//! ```
//!
//! Values leave this crate exactly as the provider reported them. Rounding
//! and defaulting belong to the caller.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{EquitySummary, HistoricalBar, HistoryRange};
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
