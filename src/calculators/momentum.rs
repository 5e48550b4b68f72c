use crate::config::settings::AnalyzerConfig;
use crate::types::analysis::{MacdData, MomentumData};
use crate::utils::stats;

pub fn analyze(prices: &[f64], config: &AnalyzerConfig) -> MomentumData {
    MomentumData {
        rsi: rsi(prices, config.rsi_period),
        macd: macd(
            prices,
            config.macd_fast_period,
            config.macd_slow_period,
            config.macd_signal_period,
        ),
        momentum: momentum(prices, config.momentum_period),
    }
}

/// Relative Strength Index over the trailing `period` changes. A series too
/// short to hold a full window reads as neutral 50.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 50.0;
    }
    let changes: Vec<f64> = prices[prices.len() - period - 1..]
        .windows(2)
        .map(|w| w[1] - w[0])
        .collect();

    let avg_gain = changes.iter().copied().filter(|c| *c > 0.0).sum::<f64>() / period as f64;
    let avg_loss = -changes.iter().copied().filter(|c| *c < 0.0).sum::<f64>() / period as f64;
    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// MACD line, signal line, and histogram at the latest point.
pub fn macd(prices: &[f64], fast: usize, slow: usize, signal: usize) -> MacdData {
    let fast_series = stats::ema_series(prices, fast);
    let slow_series = stats::ema_series(prices, slow);
    let macd_line: Vec<f64> = fast_series
        .iter()
        .zip(&slow_series)
        .map(|(f, s)| f - s)
        .collect();
    let signal_series = stats::ema_series(&macd_line, signal);

    let value = macd_line.last().copied().unwrap_or(0.0);
    let signal_value = signal_series.last().copied().unwrap_or(0.0);
    MacdData {
        value,
        signal: signal_value,
        histogram: value - signal_value,
    }
}

/// Percent change between the latest price and the price `period` points
/// earlier; shorter series fall back to the first point as reference.
pub fn momentum(prices: &[f64], period: usize) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }
    let last = prices[prices.len() - 1];
    let reference = if prices.len() > period {
        prices[prices.len() - 1 - period]
    } else {
        prices[0]
    };
    if reference == 0.0 {
        return 0.0;
    }
    (last - reference) / reference * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_is_bounded_for_mixed_series() {
        let prices: Vec<f64> = (0..40)
            .map(|i| 100.0 + ((i * 7) % 13) as f64 - 6.0)
            .collect();
        let value = rsi(&prices, 14);
        assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn rsi_saturates_at_100_without_losses() {
        let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        assert_eq!(rsi(&prices, 14), 100.0);
    }

    #[test]
    fn rsi_approaches_zero_without_gains() {
        let prices: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
        assert!(rsi(&prices, 14) < 1.0);
    }

    #[test]
    fn rsi_is_neutral_on_short_series() {
        assert_eq!(rsi(&[100.0, 110.0, 105.0, 115.0], 14), 50.0);
    }

    #[test]
    fn macd_is_positive_in_an_uptrend() {
        let prices: Vec<f64> = (0..60).map(|i| 100.0 * 1.01f64.powi(i)).collect();
        let data = macd(&prices, 12, 26, 9);
        assert!(data.value > 0.0);
        assert!((data.value - data.signal - data.histogram).abs() < 1e-12);
    }

    #[test]
    fn macd_is_zero_on_flat_prices() {
        let prices = vec![50.0; 60];
        let data = macd(&prices, 12, 26, 9);
        assert!(data.value.abs() < 1e-12);
        assert!(data.signal.abs() < 1e-12);
        assert!(data.histogram.abs() < 1e-12);
    }

    #[test]
    fn macd_handles_tiny_series() {
        let data = macd(&[100.0, 110.0], 12, 26, 9);
        assert!(data.value.is_finite());
        assert!(data.signal.is_finite());
    }

    #[test]
    fn momentum_is_percent_change_over_the_period() {
        let mut prices = vec![100.0; 15];
        prices.push(110.0);
        // 16 points: reference is 15 points back from the last, price 100
        assert!((momentum(&prices, 14) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn momentum_falls_back_to_the_first_point() {
        assert!((momentum(&[100.0, 105.0, 120.0], 14) - 20.0).abs() < 1e-9);
    }
}
