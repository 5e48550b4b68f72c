use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::Display;

/// A single market observation: price and traded volume at an epoch-ms
/// timestamp. Series are processed in order of arrival; callers should
/// supply ascending timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDataPoint {
    pub timestamp: i64,
    pub price: f64,
    pub volume: f64,
}

/// The price band covering the bulk of traded volume. `high`/`low` bound the
/// covered levels, `value` is their arithmetic mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAreas {
    pub high: f64,
    pub low: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ZoneKind {
    Accumulation,
    Distribution,
}

/// A rolling window of abnormally high volume, tagged by whether price rose
/// or fell across it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeZone {
    pub price: f64,
    pub volume: f64,
    #[serde(rename = "type")]
    pub kind: ZoneKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAnalysis {
    /// Traded volume bucketed by price rounded to 2 decimals.
    pub volume_profile: BTreeMap<String, f64>,
    pub value_areas: ValueAreas,
    pub volume_zones: Vec<VolumeZone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityData {
    pub depth: BTreeMap<String, f64>,
    pub concentration: f64,
    pub imbalance: f64,
    pub efficiency: f64,
}

impl LiquidityData {
    /// The shape reported when the depth provider fails or returns nothing.
    pub fn zeroed() -> Self {
        Self {
            depth: BTreeMap::new(),
            concentration: 0.0,
            imbalance: 0.0,
            efficiency: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdData {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumData {
    pub rsi: f64,
    pub macd: MacdData,
    /// Percent change against the price one momentum period earlier.
    pub momentum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityMetrics {
    pub historical_volatility: f64,
    pub implied_volatility: f64,
    pub volatility_index: f64,
    pub volatility_skew: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Sideways,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    pub strength: f64,
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTargets {
    pub entry: f64,
    pub target: f64,
    pub stop_loss: f64,
}

/// A chart pattern reported by the injected model. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternData {
    pub pattern: String,
    pub confidence: f64,
    pub price_targets: PriceTargets,
    pub timeframe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionMetrics {
    pub predicted_price: f64,
    pub confidence: f64,
    pub timeframe: String,
    pub supporting_factors: Vec<String>,
}

impl PredictionMetrics {
    /// Fallback when the model is unavailable: the last observed price with
    /// zero confidence.
    pub fn degraded(last_price: f64) -> Self {
        Self {
            predicted_price: last_price,
            confidence: 0.0,
            timeframe: "24h".to_string(),
            supporting_factors: vec!["insufficient data for prediction".to_string()],
        }
    }
}

/// The full bundle returned to callers. Recomputed per request, never
/// persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysisData {
    pub volume: VolumeAnalysis,
    pub liquidity: LiquidityData,
    pub patterns: Vec<PatternData>,
    pub predictions: PredictionMetrics,
    pub momentum: MomentumData,
    pub volatility: VolatilityMetrics,
    pub trend: TrendAnalysis,
}
