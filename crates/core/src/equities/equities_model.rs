//! Equity catalog domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing one catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equity {
    pub ticker: String,
    pub company_name: String,
    pub sector: String,
    pub industry: String,
    /// Zero when the provider does not report it
    pub market_cap: i64,
    pub current_price: Decimal,
    pub pe_ratio: Option<Decimal>,
    /// Percentage, e.g. 2.34 for 2.34%
    pub dividend_yield: Option<Decimal>,
}

/// Result of refreshing a single ticker
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Updated(Equity),
    Failed { ticker: String, reason: String },
}

impl RefreshOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, RefreshOutcome::Updated(_))
    }
}

/// Totals for one catalog refresh run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshSummary {
    pub total: usize,
    pub updated: usize,
    pub failed: Vec<String>,
}

impl RefreshSummary {
    pub fn record(&mut self, outcome: &RefreshOutcome) {
        self.total += 1;
        match outcome {
            RefreshOutcome::Updated(_) => self.updated += 1,
            RefreshOutcome::Failed { ticker, .. } => self.failed.push(ticker.clone()),
        }
    }
}
