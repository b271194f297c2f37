use rust_decimal::Decimal;

use crate::constants::PRICE_DECIMAL_PLACES;

/// Rounds a provider float to two decimal places.
///
/// The exact binary value of the float is rounded, so `2.675` (stored as
/// 2.67499999...) becomes `2.67`. Returns `None` for NaN and infinities.
pub fn round_price(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|d| d.round_dp(PRICE_DECIMAL_PLACES).normalize())
}

/// Rescales a fractional yield (0.0234) to a percentage (2.34), then rounds.
pub fn fraction_to_percent(value: f64) -> Option<Decimal> {
    round_price(value * 100.0)
}
