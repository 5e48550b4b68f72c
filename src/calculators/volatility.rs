use crate::config::constants::{
    IMPLIED_VOLATILITY_FACTOR, TRADING_DAYS_PER_YEAR, VOLATILITY_INDEX_DAYS,
};
use crate::types::analysis::VolatilityMetrics;
use crate::utils::stats;

/// All four metrics derive from the log returns of the price series.
/// Implied volatility is a heuristic markup over the historical figure, not
/// a market-derived quote.
pub fn analyze(prices: &[f64]) -> VolatilityMetrics {
    let returns = stats::log_returns(prices);
    let historical = stats::stdev(&returns) * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;

    VolatilityMetrics {
        historical_volatility: historical,
        implied_volatility: historical * IMPLIED_VOLATILITY_FACTOR,
        volatility_index: historical * (VOLATILITY_INDEX_DAYS / TRADING_DAYS_PER_YEAR).sqrt(),
        volatility_skew: stats::skewness(&returns),
    }
}
