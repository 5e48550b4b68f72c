use std::collections::BTreeMap;

use crate::types::analysis::LiquidityData;

/// Concentration, imbalance, and efficiency over a provider depth map.
/// Levels are ranked numerically ascending before the midpoint split, so the
/// lower half approximates bid-side depth; the exact buy/sell semantics stay
/// provider-defined.
pub fn analyze(depth: &BTreeMap<String, f64>) -> LiquidityData {
    let mut levels: Vec<(f64, f64)> = depth
        .iter()
        .filter_map(|(level, volume)| level.parse::<f64>().ok().map(|price| (price, *volume)))
        .collect();
    levels.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let total: f64 = levels.iter().map(|(_, volume)| volume).sum();
    if levels.is_empty() || total <= 0.0 {
        return LiquidityData::zeroed();
    }

    // Herfindahl index over volume shares, normalized back to [0, 1]
    let concentration = levels
        .iter()
        .map(|(_, volume)| (volume / total * 100.0).powi(2))
        .sum::<f64>()
        / 10_000.0;

    let mid = levels.len() / 2;
    let lower: f64 = levels[..mid].iter().map(|(_, volume)| volume).sum();
    let upper: f64 = levels[mid..].iter().map(|(_, volume)| volume).sum();
    let imbalance = (lower - upper).abs() / total;

    LiquidityData {
        depth: depth.clone(),
        concentration,
        imbalance,
        efficiency: 1.0 - concentration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth_of(levels: &[(&str, f64)]) -> BTreeMap<String, f64> {
        levels
            .iter()
            .map(|(level, volume)| (level.to_string(), *volume))
            .collect()
    }

    #[test]
    fn efficiency_complements_concentration() {
        let depth = depth_of(&[("100", 1_000.0), ("105", 1_200.0), ("110", 1_500.0)]);
        let data = analyze(&depth);
        assert!(data.concentration > 0.0 && data.concentration <= 1.0);
        assert!((data.efficiency + data.concentration - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_level_depth_is_fully_concentrated() {
        let data = analyze(&depth_of(&[("100", 5_000.0)]));
        assert!((data.concentration - 1.0).abs() < 1e-12);
        assert!(data.efficiency.abs() < 1e-12);
    }

    #[test]
    fn balanced_halves_have_zero_imbalance() {
        let depth = depth_of(&[("90", 1_000.0), ("95", 2_000.0), ("105", 2_000.0), ("110", 1_000.0)]);
        let data = analyze(&depth);
        assert!(data.imbalance.abs() < 1e-12);
    }

    #[test]
    fn lopsided_depth_shows_imbalance() {
        let depth = depth_of(&[("90", 9_000.0), ("95", 9_000.0), ("105", 1_000.0), ("110", 1_000.0)]);
        let data = analyze(&depth);
        assert!((data.imbalance - 0.8).abs() < 1e-12);
    }

    #[test]
    fn empty_depth_degrades_to_zeroed() {
        assert_eq!(analyze(&BTreeMap::new()), LiquidityData::zeroed());
    }

    #[test]
    fn zero_volume_depth_degrades_to_zeroed() {
        let depth = depth_of(&[("100", 0.0), ("105", 0.0)]);
        assert_eq!(analyze(&depth), LiquidityData::zeroed());
    }
}
