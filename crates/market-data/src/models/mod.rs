//! Market data models
//!
//! - `summary` - Point-in-time equity summary (EquitySummary)
//! - `bar` - Daily OHLCV bar (HistoricalBar)
//! - `range` - Lookback range for history requests (HistoryRange)

mod bar;
mod range;
mod summary;

pub use bar::HistoricalBar;
pub use range::HistoryRange;
pub use summary::EquitySummary;
