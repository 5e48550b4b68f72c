use crate::types::analysis::{HistoricalDataPoint, PatternData, PredictionMetrics};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Source of historical market data for a token identifier. Implementations
/// own transport, caching, and rate limiting; the engine only consumes the
/// returned series and depth map.
#[async_trait]
pub trait HistoricalDataProvider: Send + Sync {
    /// Returns the price/volume series known for the identifier.
    async fn fetch(&self, identifier: &str) -> Result<Vec<HistoricalDataPoint>>;

    /// Returns the liquidity depth map, price level to available volume.
    async fn get_liquidity(&self, identifier: &str) -> Result<BTreeMap<String, f64>>;
}

/// Pattern-detection and price-prediction capability. Opaque to the engine;
/// may be backed by any heuristic or learned model.
#[async_trait]
pub trait PredictionModel: Send + Sync {
    async fn detect_patterns(&self, series: &[HistoricalDataPoint]) -> Result<Vec<PatternData>>;

    async fn predict(&self, series: &[HistoricalDataPoint]) -> Result<PredictionMetrics>;
}
