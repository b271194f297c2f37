use serde::{Deserialize, Serialize};

/// Point-in-time equity data as reported by a provider.
///
/// Every figure is the raw provider value. Callers decide on fallbacks
/// (for example trailing vs forward P/E) and on rounding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EquitySummary {
    /// Symbol the summary was requested for
    pub symbol: String,

    /// Provider that supplied this summary (e.g., "YAHOO")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Long-form company name (e.g., "Apple Inc.")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    /// Short-form company name (e.g., "Apple")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Business sector (e.g., "Technology")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Industry within sector (e.g., "Consumer Electronics")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Market capitalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,

    /// Live quote price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,

    /// Regular market session price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_market_price: Option<f64>,

    /// Trailing twelve month price-to-earnings ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_pe: Option<f64>,

    /// Forward price-to-earnings ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_pe: Option<f64>,

    /// Dividend yield (as fraction, e.g., 0.025 for 2.5%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
}

impl EquitySummary {
    /// Create an empty summary for a symbol
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Set the long-form name
    pub fn long_name(mut self, name: impl Into<String>) -> Self {
        self.long_name = Some(name.into());
        self
    }

    /// Set the short-form name
    pub fn short_name(mut self, name: impl Into<String>) -> Self {
        self.short_name = Some(name.into());
        self
    }

    /// Set the sector
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Set the industry
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equity_summary_builder() {
        let summary = EquitySummary::new("AAPL")
            .long_name("Apple Inc.")
            .short_name("Apple")
            .sector("Technology")
            .industry("Consumer Electronics");

        assert_eq!(summary.symbol, "AAPL");
        assert_eq!(summary.long_name, Some("Apple Inc.".to_string()));
        assert_eq!(summary.short_name, Some("Apple".to_string()));
        assert_eq!(summary.sector, Some("Technology".to_string()));
        assert_eq!(summary.industry, Some("Consumer Electronics".to_string()));
        assert!(summary.market_cap.is_none());
    }

    #[test]
    fn test_equity_summary_serialization() {
        let summary = EquitySummary {
            long_name: Some("Test Company".to_string()),
            trailing_pe: Some(21.5),
            ..EquitySummary::new("TEST")
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("Test Company"));
        assert!(json.contains("21.5"));
        // Optional None fields should not be serialized
        assert!(!json.contains("dividend_yield"));
    }
}
