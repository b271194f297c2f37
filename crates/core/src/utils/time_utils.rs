use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Timezone of the exchanges the catalog covers.
/// Bar dates and the puzzle calendar day are both taken in this zone.
pub const EXCHANGE_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a calendar date in the given timezone.
pub fn market_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's calendar date on the exchange.
pub fn market_date_today() -> NaiveDate {
    market_date_from_utc(Utc::now(), EXCHANGE_TZ)
}

/// First day of a trailing window of `days` days ending on `today`.
pub fn window_start(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_market_date_from_utc_same_day() {
        // 14:30 UTC is 09:30 or 10:30 in New York, same calendar day
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap();
        assert_eq!(
            market_date_from_utc(instant, EXCHANGE_TZ),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_market_date_from_utc_previous_day() {
        // 02:00 UTC is still the previous evening in New York
        let instant = Utc.with_ymd_and_hms(2024, 3, 2, 2, 0, 0).unwrap();
        assert_eq!(
            market_date_from_utc(instant, EXCHANGE_TZ),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_window_start() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(
            window_start(today, 30),
            NaiveDate::from_ymd_opt(2024, 2, 9).unwrap()
        );
    }
}
