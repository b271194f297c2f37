use async_trait::async_trait;
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::market_data_traits::MarketDataGatewayTrait;
use crate::constants::UNKNOWN_CLASSIFICATION;
use crate::equities::Equity;
use crate::errors::Result;
use crate::puzzles::PriceBar;
use crate::utils::decimal_utils::{fraction_to_percent, round_price};
use crate::utils::time_utils::{market_date_from_utc, EXCHANGE_TZ};
use stockle_market_data::{EquitySummary, HistoricalBar, HistoryRange, MarketDataProvider};

/// Wraps a [`MarketDataProvider`] and turns its raw figures into domain
/// values.
pub struct MarketDataGateway {
    provider: Arc<dyn MarketDataProvider>,
}

impl MarketDataGateway {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl MarketDataGatewayTrait for MarketDataGateway {
    async fn fetch_equity(&self, ticker: &str) -> Result<Equity> {
        let summary = self.provider.get_equity_summary(ticker).await?;
        Ok(equity_from_summary(ticker, &summary))
    }

    async fn fetch_price_history(
        &self,
        ticker: &str,
        range: HistoryRange,
    ) -> Result<Vec<PriceBar>> {
        let bars = self.provider.get_price_history(ticker, range).await?;
        debug!(
            "{} returned {} bars for {} over {}",
            self.provider.id(),
            bars.len(),
            ticker,
            range
        );

        let mut price_bars: Vec<PriceBar> =
            bars.iter().filter_map(price_bar_from_historical).collect();
        price_bars.sort_by_key(|b| b.date);
        Ok(price_bars)
    }
}

/// Builds an [`Equity`] from a provider summary.
///
/// Fallbacks: long name, then short name, then the ticker; live price, then
/// regular market price, then zero; trailing P/E, then forward P/E. Market
/// cap is zero when unknown. Dividend yield is turned into a percentage.
pub fn equity_from_summary(ticker: &str, summary: &EquitySummary) -> Equity {
    let company_name = summary
        .long_name
        .clone()
        .or_else(|| summary.short_name.clone())
        .unwrap_or_else(|| ticker.to_string());

    let current_price = finite(summary.current_price)
        .or(finite(summary.regular_market_price))
        .and_then(round_price)
        .unwrap_or(Decimal::ZERO);

    let pe_ratio = finite(summary.trailing_pe)
        .or(finite(summary.forward_pe))
        .and_then(round_price);

    let dividend_yield = finite(summary.dividend_yield).and_then(fraction_to_percent);

    let market_cap = summary
        .market_cap
        .and_then(|cap| cap.round().to_i64())
        .unwrap_or(0);

    Equity {
        ticker: ticker.to_string(),
        company_name,
        sector: summary
            .sector
            .clone()
            .unwrap_or_else(|| UNKNOWN_CLASSIFICATION.to_string()),
        industry: summary
            .industry
            .clone()
            .unwrap_or_else(|| UNKNOWN_CLASSIFICATION.to_string()),
        market_cap,
        current_price,
        pe_ratio,
        dividend_yield,
    }
}

/// Builds a [`PriceBar`] dated in the exchange timezone. Bars with
/// non-finite prices are dropped.
pub fn price_bar_from_historical(bar: &HistoricalBar) -> Option<PriceBar> {
    Some(PriceBar {
        date: market_date_from_utc(bar.timestamp, EXCHANGE_TZ),
        open: round_price(bar.open)?,
        high: round_price(bar.high)?,
        low: round_price(bar.low)?,
        close: round_price(bar.close)?,
        volume: bar.volume,
    })
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
