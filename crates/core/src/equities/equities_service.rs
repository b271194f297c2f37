use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use super::equities_model::{RefreshOutcome, RefreshSummary};
use super::equities_traits::{EquityRepositoryTrait, EquityServiceTrait};
use crate::errors::Result;
use crate::market_data::MarketDataGatewayTrait;

/// Refreshes catalog entries from the market data gateway.
pub struct EquityService {
    repository: Arc<dyn EquityRepositoryTrait>,
    gateway: Arc<dyn MarketDataGatewayTrait>,
}

impl EquityService {
    pub fn new(
        repository: Arc<dyn EquityRepositoryTrait>,
        gateway: Arc<dyn MarketDataGatewayTrait>,
    ) -> Self {
        Self {
            repository,
            gateway,
        }
    }

    async fn fetch_and_store(&self, ticker: &str) -> Result<crate::equities::Equity> {
        let equity = self.gateway.fetch_equity(ticker).await?;
        self.repository.upsert_equity(equity).await
    }
}

#[async_trait]
impl EquityServiceTrait for EquityService {
    async fn refresh_equity(&self, ticker: &str) -> RefreshOutcome {
        match self.fetch_and_store(ticker).await {
            Ok(equity) => RefreshOutcome::Updated(equity),
            Err(e) => RefreshOutcome::Failed {
                ticker: ticker.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// Refreshes every ticker in order. A failing ticker is logged and
    /// skipped; it is picked up again on the next run.
    async fn refresh_catalog(&self, tickers: &[String]) -> RefreshSummary {
        let total = tickers.len();
        let mut summary = RefreshSummary::default();

        for (i, ticker) in tickers.iter().enumerate() {
            let outcome = self.refresh_equity(ticker).await;
            match &outcome {
                RefreshOutcome::Updated(equity) => info!(
                    "[{}/{}] {}... {} - ${}",
                    i + 1,
                    total,
                    ticker,
                    equity.company_name,
                    equity.current_price
                ),
                RefreshOutcome::Failed { reason, .. } => {
                    warn!("[{}/{}] {}... Error: {}", i + 1, total, ticker, reason)
                }
            }
            summary.record(&outcome);
        }

        info!(
            "Equities table updated: {} of {} tickers refreshed, {} failed",
            summary.updated,
            summary.total,
            summary.failed.len()
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equities::Equity;
    use crate::errors::{DatabaseError, Error};
    use crate::puzzles::PriceBar;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::{BTreeMap, HashSet};
    use std::sync::Mutex;
    use stockle_market_data::{HistoryRange, MarketDataError};

    // =========================================================================
    // Mocks
    // =========================================================================

    #[derive(Default)]
    struct MockEquityRepository {
        rows: Mutex<BTreeMap<String, Equity>>,
        fail_on: HashSet<String>,
    }

    #[async_trait]
    impl EquityRepositoryTrait for MockEquityRepository {
        fn get_equity(&self, ticker: &str) -> Result<Option<Equity>> {
            Ok(self.rows.lock().unwrap().get(ticker).cloned())
        }

        fn list_equities(&self) -> Result<Vec<Equity>> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn upsert_equity(&self, equity: Equity) -> Result<Equity> {
            if self.fail_on.contains(&equity.ticker) {
                return Err(Error::Database(DatabaseError::QueryFailed(
                    "disk I/O error".to_string(),
                )));
            }
            self.rows
                .lock()
                .unwrap()
                .insert(equity.ticker.clone(), equity.clone());
            Ok(equity)
        }
    }

    struct MockGateway {
        unknown: HashSet<String>,
        price: Decimal,
    }

    #[async_trait]
    impl MarketDataGatewayTrait for MockGateway {
        async fn fetch_equity(&self, ticker: &str) -> Result<Equity> {
            if self.unknown.contains(ticker) {
                return Err(MarketDataError::SymbolNotFound(ticker.to_string()).into());
            }
            Ok(Equity {
                ticker: ticker.to_string(),
                company_name: format!("{} Corp", ticker),
                sector: "Technology".to_string(),
                industry: "Software".to_string(),
                market_cap: 1_000,
                current_price: self.price,
                pe_ratio: None,
                dividend_yield: None,
            })
        }

        async fn fetch_price_history(
            &self,
            _ticker: &str,
            _range: HistoryRange,
        ) -> Result<Vec<PriceBar>> {
            Ok(Vec::new())
        }
    }

    fn tickers(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    // =========================================================================
    // Tests
    // =========================================================================

    #[tokio::test]
    async fn test_refresh_catalog_continues_past_failures() {
        let repository = Arc::new(MockEquityRepository {
            fail_on: HashSet::from(["MSFT".to_string()]),
            ..Default::default()
        });
        let gateway = Arc::new(MockGateway {
            unknown: HashSet::from(["ZZZZ".to_string()]),
            price: dec!(10.5),
        });
        let service = EquityService::new(repository.clone(), gateway);

        let summary = service
            .refresh_catalog(&tickers(&["AAPL", "ZZZZ", "MSFT", "NVDA"]))
            .await;

        assert_eq!(summary.total, 4);
        assert_eq!(summary.updated, 2);
        assert_eq!(summary.failed, tickers(&["ZZZZ", "MSFT"]));

        let stored: Vec<String> = repository
            .list_equities()
            .unwrap()
            .into_iter()
            .map(|e| e.ticker)
            .collect();
        assert_eq!(stored, tickers(&["AAPL", "NVDA"]));
    }

    #[tokio::test]
    async fn test_refresh_equity_overwrites_existing_row() {
        let repository = Arc::new(MockEquityRepository::default());
        let first = EquityService::new(
            repository.clone(),
            Arc::new(MockGateway {
                unknown: HashSet::new(),
                price: dec!(10),
            }),
        );
        assert!(first.refresh_equity("AAPL").await.is_updated());

        let second = EquityService::new(
            repository.clone(),
            Arc::new(MockGateway {
                unknown: HashSet::new(),
                price: dec!(12.34),
            }),
        );
        assert!(second.refresh_equity("AAPL").await.is_updated());

        let row = repository.get_equity("AAPL").unwrap().unwrap();
        assert_eq!(row.current_price, dec!(12.34));
        assert_eq!(repository.list_equities().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_equity_reports_failure_reason() {
        let service = EquityService::new(
            Arc::new(MockEquityRepository::default()),
            Arc::new(MockGateway {
                unknown: HashSet::from(["ZZZZ".to_string()]),
                price: dec!(1),
            }),
        );

        match service.refresh_equity("ZZZZ").await {
            RefreshOutcome::Failed { ticker, reason } => {
                assert_eq!(ticker, "ZZZZ");
                assert!(reason.contains("Symbol not found"));
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_refresh_empty_catalog() {
        let service = EquityService::new(
            Arc::new(MockEquityRepository::default()),
            Arc::new(MockGateway {
                unknown: HashSet::new(),
                price: dec!(1),
            }),
        );
        assert_eq!(service.refresh_catalog(&[]).await, RefreshSummary::default());
    }
}
