//! Technical metrics engine for token market analysis: volume profiling,
//! liquidity depth metrics, momentum/volatility/trend indicators, and
//! model-backed pattern detection, merged into one bundle per request.

pub mod analyzer;
pub mod calculators;
pub mod config;
pub mod subscription;
pub mod types;
pub mod utils;

pub use analyzer::TechnicalAnalyzer;
pub use subscription::UpdateSubscription;
pub use types::analysis::{
    HistoricalDataPoint, LiquidityData, MacdData, MomentumData, PatternData, PredictionMetrics,
    PriceTargets, TechnicalAnalysisData, TrendAnalysis, TrendDirection, ValueAreas,
    VolatilityMetrics, VolumeAnalysis, VolumeZone, ZoneKind,
};
pub use types::capabilities::{HistoricalDataProvider, PredictionModel};
pub use types::errors::AnalysisError;
