/// Decimal places kept for prices, ratios and yields
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Placeholder stored when the provider has no sector or industry
pub const UNKNOWN_CLASSIFICATION: &str = "Unknown";

/// Days a used puzzle ticker stays ineligible
pub const PUZZLE_LOOKBACK_DAYS: i64 = 30;

/// Size of the ranked candidate pool the daily puzzle is drawn from
pub const PUZZLE_POOL_SIZE: i64 = 50;

/// Number of outcome buckets in a guess distribution (0 through 6)
pub const DISTRIBUTION_BUCKETS: usize = 7;

/// Inclusive bounds for the simulated number of plays
pub const MIN_SIMULATED_PLAYS: u32 = 15;
pub const MAX_SIMULATED_PLAYS: u32 = 25;

/// Inclusive bounds for the center of the simulated guess counts
pub const MIN_SIMULATED_MEAN: f64 = 2.8;
pub const MAX_SIMULATED_MEAN: f64 = 5.0;

/// Spread of the simulated guess counts
pub const SIMULATED_STD_DEV: f64 = 1.2;
