use crate::config::constants::{TREND_BEARISH_RATIO, TREND_BULLISH_RATIO};
use crate::config::settings::AnalyzerConfig;
use crate::types::analysis::{TrendAnalysis, TrendDirection};
use crate::utils::stats;

pub fn analyze(prices: &[f64], config: &AnalyzerConfig) -> TrendAnalysis {
    let (support, resistance) = pivot_levels(prices, config.pivot_window);
    TrendAnalysis {
        direction: direction(prices, config),
        strength: strength(prices),
        support,
        resistance,
    }
}

fn direction(prices: &[f64], config: &AnalyzerConfig) -> TrendDirection {
    let fast = stats::sma(prices, config.sma_fast_period);
    let slow = stats::sma(prices, config.sma_slow_period);
    if fast > TREND_BULLISH_RATIO * slow {
        TrendDirection::Bullish
    } else if fast < TREND_BEARISH_RATIO * slow {
        TrendDirection::Bearish
    } else {
        TrendDirection::Sideways
    }
}

/// Mean absolute period-over-period price change.
fn strength(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }
    prices.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>() / (prices.len() - 1) as f64
}

/// Local minima become support pivots, local maxima resistance pivots. A
/// pivot must be the extreme of its +/- `window` neighborhood. Levels are
/// deduplicated and sorted ascending.
fn pivot_levels(prices: &[f64], window: usize) -> (Vec<f64>, Vec<f64>) {
    let mut support = Vec::new();
    let mut resistance = Vec::new();
    if window == 0 || prices.len() < 2 * window + 1 {
        return (support, resistance);
    }

    for i in window..prices.len() - window {
        let neighborhood = &prices[i - window..=i + window];
        let price = prices[i];
        let max = neighborhood.iter().copied().fold(f64::MIN, f64::max);
        let min = neighborhood.iter().copied().fold(f64::MAX, f64::min);
        if price == max {
            resistance.push(price);
        }
        if price == min {
            support.push(price);
        }
    }

    dedup_levels(&mut support);
    dedup_levels(&mut resistance);
    (support, resistance)
}

fn dedup_levels(levels: &mut Vec<f64>) {
    levels.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    levels.dedup();
}
