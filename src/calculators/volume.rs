use std::collections::BTreeMap;

use crate::config::settings::AnalyzerConfig;
use crate::types::analysis::{
    HistoricalDataPoint, ValueAreas, VolumeAnalysis, VolumeZone, ZoneKind,
};
use crate::utils::stats;

/// Price-bucketed volume histogram, its value area, and rolling
/// accumulation/distribution zones.
pub fn profile(series: &[HistoricalDataPoint], config: &AnalyzerConfig) -> VolumeAnalysis {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for point in series {
        *buckets.entry(format!("{:.2}", point.price)).or_insert(0.0) += point.volume;
    }

    VolumeAnalysis {
        value_areas: value_areas(&buckets, config.value_area_threshold),
        volume_zones: volume_zones(series, config),
        volume_profile: buckets,
    }
}

/// The smallest descending-volume prefix of buckets whose cumulative volume
/// exceeds the threshold share of the total.
fn value_areas(buckets: &BTreeMap<String, f64>, threshold: f64) -> ValueAreas {
    let total: f64 = buckets.values().sum();
    if total <= 0.0 {
        return ValueAreas {
            high: 0.0,
            low: 0.0,
            value: 0.0,
        };
    }

    let mut ranked: Vec<(f64, f64)> = buckets
        .iter()
        .filter_map(|(level, volume)| level.parse::<f64>().ok().map(|price| (price, *volume)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut covered: Vec<f64> = Vec::new();
    let mut cumulative = 0.0;
    for (price, volume) in ranked {
        covered.push(price);
        cumulative += volume;
        if cumulative / total > threshold {
            break;
        }
    }

    ValueAreas {
        high: covered.iter().copied().fold(f64::MIN, f64::max),
        low: covered.iter().copied().fold(f64::MAX, f64::min),
        value: stats::mean(&covered),
    }
}

/// Slides a fixed window over the series; a window whose volume exceeds the
/// configured multiple of the series-wide average becomes a zone, tagged by
/// the price change across it.
fn volume_zones(series: &[HistoricalDataPoint], config: &AnalyzerConfig) -> Vec<VolumeZone> {
    let window = config.zone_window;
    if window == 0 || series.len() <= window {
        return Vec::new();
    }

    let volumes: Vec<f64> = series.iter().map(|p| p.volume).collect();
    let average_volume = stats::mean(&volumes);

    let mut zones = Vec::new();
    for i in window..series.len() {
        let slice = &series[i - window..i];
        let volume_sum: f64 = slice.iter().map(|p| p.volume).sum();
        if volume_sum <= config.zone_volume_factor * average_volume {
            continue;
        }
        let price_change = series[i].price - series[i - window].price;
        let average_price = slice.iter().map(|p| p.price).sum::<f64>() / window as f64;
        zones.push(VolumeZone {
            price: average_price,
            volume: volume_sum,
            kind: if price_change >= 0.0 {
                ZoneKind::Accumulation
            } else {
                ZoneKind::Distribution
            },
        });
    }
    zones
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp: i64, price: f64, volume: f64) -> HistoricalDataPoint {
        HistoricalDataPoint {
            timestamp,
            price,
            volume,
        }
    }

    fn rising_series(len: usize) -> Vec<HistoricalDataPoint> {
        (0..len)
            .map(|i| point(i as i64 * 1_000, 100.0 + i as f64, 1_000.0))
            .collect()
    }

    #[test]
    fn profile_buckets_by_rounded_price() {
        let series = vec![
            point(1_000, 100.004, 1_000.0),
            point(2_000, 99.996, 500.0),
            point(3_000, 110.0, 2_000.0),
        ];
        let analysis = profile(&series, &AnalyzerConfig::default());
        assert_eq!(analysis.volume_profile.get("100.00"), Some(&1_500.0));
        assert_eq!(analysis.volume_profile.get("110.00"), Some(&2_000.0));
    }

    #[test]
    fn value_area_covers_at_least_the_threshold_share() {
        let series = vec![
            point(1_000, 100.0, 5_000.0),
            point(2_000, 105.0, 3_000.0),
            point(3_000, 110.0, 1_000.0),
            point(4_000, 115.0, 1_000.0),
        ];
        let config = AnalyzerConfig::default();
        let analysis = profile(&series, &config);

        // 5000 alone is half the 10000 total; adding 3000 pushes it to 0.8
        assert_eq!(analysis.value_areas.high, 105.0);
        assert_eq!(analysis.value_areas.low, 100.0);
        assert_eq!(analysis.value_areas.value, 102.5);

        // idempotent on the same series
        let again = profile(&series, &config);
        assert_eq!(analysis.value_areas, again.value_areas);
    }

    #[test]
    fn short_series_produces_no_zones() {
        let analysis = profile(&rising_series(10), &AnalyzerConfig::default());
        assert!(analysis.volume_zones.is_empty());
    }

    #[test]
    fn rising_high_volume_windows_are_accumulation() {
        let analysis = profile(&rising_series(30), &AnalyzerConfig::default());
        assert!(!analysis.volume_zones.is_empty());
        assert!(analysis
            .volume_zones
            .iter()
            .all(|z| z.kind == ZoneKind::Accumulation));
    }

    #[test]
    fn falling_high_volume_windows_are_distribution() {
        let series: Vec<HistoricalDataPoint> = (0..30)
            .map(|i| point(i as i64 * 1_000, 200.0 - i as f64, 1_000.0))
            .collect();
        let analysis = profile(&series, &AnalyzerConfig::default());
        assert!(!analysis.volume_zones.is_empty());
        assert!(analysis
            .volume_zones
            .iter()
            .all(|z| z.kind == ZoneKind::Distribution));
    }
}
