use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar as reported by a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalBar {
    /// Session timestamp of the bar
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl HistoricalBar {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Whether all prices are finite numbers.
    pub fn is_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_historical_bar_new() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap();
        let bar = HistoricalBar::new(ts, 148.0, 152.0, 147.5, 150.25, 1_000_000);
        assert_eq!(bar.timestamp, ts);
        assert_eq!(bar.close, 150.25);
        assert_eq!(bar.volume, 1_000_000);
        assert!(bar.is_finite());
    }

    #[test]
    fn test_historical_bar_not_finite() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap();
        let bar = HistoricalBar::new(ts, f64::NAN, 152.0, 147.5, 150.25, 0);
        assert!(!bar.is_finite());
    }
}
