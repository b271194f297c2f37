use stockle_market_data::HistoryRange;
use thiserror::Error;

use crate::tickers::DEFAULT_TICKERS;

pub const DB_PATH_VAR: &str = "STOCKLE_DB_PATH";
pub const TICKERS_VAR: &str = "STOCKLE_TICKERS";
pub const HISTORY_RANGE_VAR: &str = "STOCKLE_HISTORY_RANGE";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The database credential is absent. Nothing has connected yet when this
    /// is returned, so the run stops here.
    #[error("Database credential {0} not set.")]
    MissingCredential(&'static str),

    #[error("Invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Settings for one fetcher run, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: String,
    pub tickers: Vec<String>,
    pub history_range: HistoryRange,
}

impl Config {
    /// Reads the process environment. `main` loads any `.env` file first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup(DB_PATH_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCredential(DB_PATH_VAR))?;

        let tickers = match lookup(TICKERS_VAR) {
            Some(raw) => {
                let parsed = parse_tickers(&raw);
                if parsed.is_empty() {
                    return Err(ConfigError::Invalid {
                        var: TICKERS_VAR,
                        value: raw,
                    });
                }
                parsed
            }
            None => DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect(),
        };

        let history_range = match lookup(HISTORY_RANGE_VAR) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: HISTORY_RANGE_VAR,
                value: raw.clone(),
            })?,
            None => HistoryRange::default(),
        };

        Ok(Self {
            db_path,
            tickers,
            history_range,
        })
    }
}

/// Splits a comma separated list, upper-casing and dropping blanks and repeats.
fn parse_tickers(raw: &str) -> Vec<String> {
    let mut tickers: Vec<String> = Vec::new();
    for ticker in raw.split(',').map(|s| s.trim().to_ascii_uppercase()) {
        if !ticker.is_empty() && !tickers.contains(&ticker) {
            tickers.push(ticker);
        }
    }
    tickers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_missing_db_path_is_an_error() {
        assert_eq!(load(&[]), Err(ConfigError::MissingCredential(DB_PATH_VAR)));
        assert_eq!(
            load(&[(DB_PATH_VAR, "   ")]),
            Err(ConfigError::MissingCredential(DB_PATH_VAR))
        );
        assert_eq!(
            ConfigError::MissingCredential(DB_PATH_VAR).to_string(),
            "Database credential STOCKLE_DB_PATH not set."
        );
    }

    #[test]
    fn test_defaults() {
        let config = load(&[(DB_PATH_VAR, "./db/stockle.db")]).unwrap();
        assert_eq!(config.db_path, "./db/stockle.db");
        assert_eq!(config.tickers.len(), DEFAULT_TICKERS.len());
        assert_eq!(config.history_range, HistoryRange::FiveYears);
    }

    #[test]
    fn test_ticker_override() {
        let config = load(&[
            (DB_PATH_VAR, "stockle.db"),
            (TICKERS_VAR, " aapl, MSFT,,brk-b , AAPL"),
        ])
        .unwrap();
        assert_eq!(config.tickers, vec!["AAPL", "MSFT", "BRK-B"]);
    }

    #[test]
    fn test_blank_ticker_override_is_rejected() {
        let err = load(&[(DB_PATH_VAR, "stockle.db"), (TICKERS_VAR, " , ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: TICKERS_VAR, .. }));
    }

    #[test]
    fn test_history_range() {
        let config = load(&[(DB_PATH_VAR, "stockle.db"), (HISTORY_RANGE_VAR, "10y")]).unwrap();
        assert_eq!(config.history_range, HistoryRange::TenYears);

        let err = load(&[(DB_PATH_VAR, "stockle.db"), (HISTORY_RANGE_VAR, "3w")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: HISTORY_RANGE_VAR,
                value: "3w".to_string()
            }
        );
    }
}
