//! Yahoo Finance market data provider.
//!
//! Equity summaries come from the quoteSummary API (cookie + crumb
//! authenticated), daily history from the chart API through
//! `yahoo_finance_api`.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use reqwest::header;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{EquitySummary, HistoricalBar, HistoryRange};
use crate::provider::MarketDataProvider;

use models::{raw, YahooQuoteSummaryResponse, YahooQuoteSummaryResult};

const PROVIDER_ID: &str = "YAHOO";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const SUMMARY_MODULES: &str = "price,summaryProfile,summaryDetail,financialData";
const DAILY_INTERVAL: &str = "1d";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to initialize Yahoo connector: {}", e),
            )
        })?;
        Ok(Self {
            connector,
            client: reqwest::Client::new(),
        })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        if let Ok(guard) = YAHOO_CRUMB.read() {
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Failed to get cookie: {}", e)))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::provider(PROVIDER_ID, "Failed to parse Yahoo cookie"))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Failed to get crumb: {}", e)))?
            .text()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Failed to read crumb: {}", e)))?;

        let crumb_data = CrumbData { cookie, crumb };

        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = Some(crumb_data.clone());
        }

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = None;
        }
    }

    // ========================================================================
    // Summary Fetching
    // ========================================================================

    async fn fetch_quote_summary(
        &self,
        symbol: &str,
    ) -> Result<YahooQuoteSummaryResult, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            encode(symbol),
            SUMMARY_MODULES,
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Summary request failed: {}", e)))?;

        match response.status() {
            reqwest::StatusCode::UNAUTHORIZED => {
                self.clear_crumb();
                return Err(MarketDataError::provider(
                    PROVIDER_ID,
                    "Yahoo authentication expired",
                ));
            }
            reqwest::StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            _ => {}
        }

        let data: YahooQuoteSummaryResponse = response.json().await.map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to parse summary response: {}", e),
            )
        })?;

        data.quote_summary
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }

    /// Convert a chart API quote into a bar.
    fn yahoo_quote_to_bar(yahoo_quote: yahoo::Quote) -> Result<HistoricalBar, MarketDataError> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid timestamp: {}", yahoo_quote.timestamp),
            })?;

        let bar = HistoricalBar::new(
            timestamp,
            yahoo_quote.open,
            yahoo_quote.high,
            yahoo_quote.low,
            yahoo_quote.close,
            yahoo_quote.volume,
        );

        if !bar.is_finite() {
            return Err(MarketDataError::ValidationFailed {
                message: format!("Non-finite price in bar at {}", timestamp),
            });
        }

        Ok(bar)
    }
}

/// Map a quoteSummary result into a summary, keeping raw figures.
fn map_quote_summary(symbol: &str, result: &YahooQuoteSummaryResult) -> EquitySummary {
    let price = result.price.as_ref();
    let profile = result.summary_profile.as_ref();
    let detail = result.summary_detail.as_ref();
    let financial = result.financial_data.as_ref();

    EquitySummary {
        symbol: symbol.to_string(),
        source: Some(PROVIDER_ID.to_string()),
        long_name: price.and_then(|p| non_empty(p.long_name.as_deref())),
        short_name: price.and_then(|p| non_empty(p.short_name.as_deref())),
        sector: profile
            .and_then(|s| non_empty(s.sector.as_deref()))
            .map(|s| format_sector(&s)),
        industry: profile.and_then(|s| non_empty(s.industry.as_deref())),
        market_cap: detail.and_then(|d| raw(&d.market_cap)),
        current_price: financial.and_then(|f| raw(&f.current_price)),
        regular_market_price: price.and_then(|p| raw(&p.regular_market_price)),
        trailing_pe: detail.and_then(|d| raw(&d.trailing_pe)),
        forward_pe: detail.and_then(|d| raw(&d.forward_pe)),
        dividend_yield: detail.and_then(|d| raw(&d.dividend_yield)),
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_equity_summary(&self, symbol: &str) -> Result<EquitySummary, MarketDataError> {
        debug!("Fetching summary for {} from Yahoo", symbol);
        let result = self.fetch_quote_summary(symbol).await?;
        Ok(map_quote_summary(symbol, &result))
    }

    async fn get_price_history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<Vec<HistoricalBar>, MarketDataError> {
        debug!("Fetching {} of daily history for {} from Yahoo", range, symbol);

        let response = self
            .connector
            .get_quote_range(symbol, DAILY_INTERVAL, range.as_str())
            .await
            .map_err(|e| match e {
                yahoo::YahooError::NoResult => MarketDataError::SymbolNotFound(symbol.to_string()),
                other => MarketDataError::provider(PROVIDER_ID, other.to_string()),
            })?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let mut bars: Vec<HistoricalBar> = yahoo_quotes
                    .into_iter()
                    .filter_map(|q| match Self::yahoo_quote_to_bar(q) {
                        Ok(bar) => Some(bar),
                        Err(e) => {
                            warn!("Skipping bar for {} due to conversion error: {}", symbol, e);
                            None
                        }
                    })
                    .collect();
                bars.sort_by_key(|b| b.timestamp);
                Ok(bars)
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!("No historical quotes returned for '{}' over {}", symbol, range);
                Ok(Vec::new())
            }
            Err(e) => Err(MarketDataError::provider(PROVIDER_ID, e.to_string())),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Convert snake_case sector to Title Case.
fn format_sector(sector: &str) -> String {
    sector
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use models::YahooQuoteSummaryResponse;

    fn parse_result(json: &str) -> YahooQuoteSummaryResult {
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        response.quote_summary.result.unwrap().into_iter().next().unwrap()
    }

    #[test]
    fn test_format_sector() {
        assert_eq!(format_sector("technology"), "Technology");
        assert_eq!(format_sector("basic_materials"), "Basic Materials");
        assert_eq!(format_sector("Financial Services"), "Financial Services");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(" Apple ")), Some("Apple".to_string()));
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_map_quote_summary_full() {
        let result = parse_result(
            r#"{"quoteSummary": {"result": [{
                "price": {
                    "longName": "Microsoft Corporation",
                    "shortName": "Microsoft",
                    "regularMarketPrice": {"raw": 415.5}
                },
                "summaryProfile": {"sector": "Technology", "industry": "Software - Infrastructure"},
                "summaryDetail": {
                    "marketCap": {"raw": 3090000000000},
                    "trailingPE": {"raw": 36.123},
                    "forwardPE": {"raw": 31.9},
                    "dividendYield": {"raw": 0.0072}
                },
                "financialData": {"currentPrice": {"raw": 415.56}}
            }]}}"#,
        );

        let summary = map_quote_summary("MSFT", &result);
        assert_eq!(summary.symbol, "MSFT");
        assert_eq!(summary.source.as_deref(), Some("YAHOO"));
        assert_eq!(summary.long_name.as_deref(), Some("Microsoft Corporation"));
        assert_eq!(summary.short_name.as_deref(), Some("Microsoft"));
        assert_eq!(summary.sector.as_deref(), Some("Technology"));
        assert_eq!(summary.industry.as_deref(), Some("Software - Infrastructure"));
        assert_eq!(summary.market_cap, Some(3090000000000.0));
        assert_eq!(summary.current_price, Some(415.56));
        assert_eq!(summary.regular_market_price, Some(415.5));
        assert_eq!(summary.trailing_pe, Some(36.123));
        assert_eq!(summary.forward_pe, Some(31.9));
        assert_eq!(summary.dividend_yield, Some(0.0072));
    }

    #[test]
    fn test_map_quote_summary_sparse() {
        let result = parse_result(
            r#"{"quoteSummary": {"result": [{
                "price": {"shortName": "Berkshire Hathaway", "longName": ""},
                "summaryDetail": {"trailingPE": {}, "dividendYield": {}}
            }]}}"#,
        );

        let summary = map_quote_summary("BRK-B", &result);
        assert_eq!(summary.long_name, None);
        assert_eq!(summary.short_name.as_deref(), Some("Berkshire Hathaway"));
        assert_eq!(summary.sector, None);
        assert_eq!(summary.market_cap, None);
        assert_eq!(summary.current_price, None);
        assert_eq!(summary.trailing_pe, None);
        assert_eq!(summary.dividend_yield, None);
    }
}
