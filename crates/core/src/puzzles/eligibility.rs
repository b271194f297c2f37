use chrono::NaiveDate;

use crate::constants::{PUZZLE_LOOKBACK_DAYS, PUZZLE_POOL_SIZE};
use crate::utils::time_utils::window_start;

/// Which catalog entries may become the next puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityRules {
    /// A ticker used on any day in `[today - lookback_days, today]` is excluded
    pub lookback_days: i64,
    /// Maximum number of candidates kept after exclusion
    pub pool_size: i64,
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self {
            lookback_days: PUZZLE_LOOKBACK_DAYS,
            pool_size: PUZZLE_POOL_SIZE,
        }
    }
}

impl EligibilityRules {
    /// Inclusive lower bound of the exclusion window.
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        window_start(today, self.lookback_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_rules() {
        let rules = EligibilityRules::default();
        assert_eq!(rules.lookback_days, 30);
        assert_eq!(rules.pool_size, 50);
        assert_eq!(rules.window_start(date(2024, 3, 31)), date(2024, 3, 1));
    }

    #[test]
    fn test_window_start_crosses_month_and_year() {
        let rules = EligibilityRules::default();
        assert_eq!(rules.window_start(date(2024, 3, 15)), date(2024, 2, 14));
        assert_eq!(rules.window_start(date(2024, 1, 10)), date(2023, 12, 11));
    }

    #[test]
    fn test_custom_lookback() {
        let rules = EligibilityRules {
            lookback_days: 7,
            pool_size: 10,
        };
        assert_eq!(rules.window_start(date(2024, 3, 31)), date(2024, 3, 24));
    }
}
