// Calculator windows, all counted in data points of the input series.
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;
pub const MOMENTUM_PERIOD: usize = 14;

pub const SMA_FAST_PERIOD: usize = 20;
pub const SMA_SLOW_PERIOD: usize = 50;
// Fast/slow SMA ratio bands for calling a trend direction
pub const TREND_BULLISH_RATIO: f64 = 1.02;
pub const TREND_BEARISH_RATIO: f64 = 0.98;
// A pivot must be the extreme of its +/- window neighborhood
pub const PIVOT_WINDOW: usize = 5;

// Volume profiling
pub const VALUE_AREA_THRESHOLD: f64 = 0.70;
pub const ZONE_WINDOW: usize = 24;
pub const ZONE_VOLUME_FACTOR: f64 = 1.5;

// Log-return volatility scaling, token markets trade every day of the year
pub const TRADING_DAYS_PER_YEAR: f64 = 365.0;
pub const VOLATILITY_INDEX_DAYS: f64 = 30.0;
pub const IMPLIED_VOLATILITY_FACTOR: f64 = 1.1;

// Polling subscription cadence
pub const UPDATE_INTERVAL_MS: u64 = 60_000;

// Segment size for the historical-range variant
pub const HISTORICAL_SEGMENT_MS: i64 = 24 * 60 * 60 * 1000;
