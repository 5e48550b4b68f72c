//! Small numeric helpers shared by the calculators.

/// Natural-log returns of consecutive prices. Pairs containing a
/// non-positive price are skipped.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .filter(|w| w[0] > 0.0 && w[1] > 0.0)
        .map(|w| (w[1] / w[0]).ln())
        .collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn stdev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    (values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
}

/// Third standardized moment. Zero for flat or empty input.
pub fn skewness(values: &[f64]) -> f64 {
    let sigma = stdev(values);
    if values.is_empty() || sigma == 0.0 {
        return 0.0;
    }
    let mu = mean(values);
    values.iter().map(|v| ((v - mu) / sigma).powi(3)).sum::<f64>() / values.len() as f64
}

/// Trailing simple moving average. A slice shorter than the period averages
/// in full instead of failing.
pub fn sma(values: &[f64], period: usize) -> f64 {
    if values.is_empty() || period == 0 {
        return 0.0;
    }
    if values.len() < period {
        return mean(values);
    }
    mean(&values[values.len() - period..])
}

/// Exponential moving average over the whole slice, one output per input.
/// The first `period` outputs are expanding averages, which seeds the
/// recursion with SMA(period) instead of the raw first value.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() || period == 0 {
        return Vec::new();
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out: Vec<f64> = Vec::with_capacity(values.len());
    let mut warmup_sum = 0.0;
    for (i, &value) in values.iter().enumerate() {
        if i < period {
            warmup_sum += value;
            out.push(warmup_sum / (i + 1) as f64);
        } else {
            let prev = out[i - 1];
            out.push(value * alpha + prev * (1.0 - alpha));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_stdev_of_flat_series() {
        let flat = [5.0; 10];
        assert_eq!(mean(&flat), 5.0);
        assert_eq!(stdev(&flat), 0.0);
        assert_eq!(skewness(&flat), 0.0);
    }

    #[test]
    fn stdev_of_known_series() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((stdev(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn skewness_sign_follows_the_tail() {
        let right_tailed = [1.0, 1.0, 1.0, 1.0, 10.0];
        let left_tailed = [10.0, 10.0, 10.0, 10.0, 1.0];
        assert!(skewness(&right_tailed) > 0.0);
        assert!(skewness(&left_tailed) < 0.0);
    }

    #[test]
    fn log_returns_skip_non_positive_prices() {
        let prices = [100.0, 0.0, 110.0, 121.0];
        let returns = log_returns(&prices);
        assert_eq!(returns.len(), 1);
        assert!((returns[0] - (121.0f64 / 110.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn sma_uses_trailing_window() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(sma(&values, 3), 5.0);
        // shorter than the period: average everything
        assert_eq!(sma(&values[..2], 3), 1.5);
    }

    #[test]
    fn ema_series_warms_up_with_expanding_average() {
        let values = [2.0, 4.0, 6.0, 8.0, 10.0];
        let ema = ema_series(&values, 3);
        assert_eq!(ema.len(), values.len());
        assert_eq!(ema[0], 2.0);
        assert_eq!(ema[1], 3.0);
        assert_eq!(ema[2], 4.0);
        // alpha = 0.5 from here on
        assert_eq!(ema[3], 6.0);
        assert_eq!(ema[4], 8.0);
    }

    #[test]
    fn empty_input_is_harmless() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(stdev(&[]), 0.0);
        assert_eq!(sma(&[], 14), 0.0);
        assert!(ema_series(&[], 12).is_empty());
        assert!(log_returns(&[]).is_empty());
    }
}
