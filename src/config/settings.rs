use crate::config::constants::{
    MACD_FAST_PERIOD, MACD_SIGNAL_PERIOD, MACD_SLOW_PERIOD, MOMENTUM_PERIOD, PIVOT_WINDOW,
    RSI_PERIOD, SMA_FAST_PERIOD, SMA_SLOW_PERIOD, UPDATE_INTERVAL_MS, VALUE_AREA_THRESHOLD,
    ZONE_VOLUME_FACTOR, ZONE_WINDOW,
};
use config::{Config, ConfigError, File};
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    pub level: String,
}

/// Tunables for every calculator plus the polling cadence. All fields are
/// optional in the config file and fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub rsi_period: usize,
    pub macd_fast_period: usize,
    pub macd_slow_period: usize,
    pub macd_signal_period: usize,
    pub momentum_period: usize,
    pub sma_fast_period: usize,
    pub sma_slow_period: usize,
    pub pivot_window: usize,
    pub value_area_threshold: f64,
    pub zone_window: usize,
    pub zone_volume_factor: f64,
    pub update_interval_ms: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            rsi_period: RSI_PERIOD,
            macd_fast_period: MACD_FAST_PERIOD,
            macd_slow_period: MACD_SLOW_PERIOD,
            macd_signal_period: MACD_SIGNAL_PERIOD,
            momentum_period: MOMENTUM_PERIOD,
            sma_fast_period: SMA_FAST_PERIOD,
            sma_slow_period: SMA_SLOW_PERIOD,
            pivot_window: PIVOT_WINDOW,
            value_area_threshold: VALUE_AREA_THRESHOLD,
            zone_window: ZONE_WINDOW,
            zone_volume_factor: ZONE_VOLUME_FACTOR,
            update_interval_ms: UPDATE_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    pub logger: LoggerConfig,
}

impl Settings {
    pub fn new(config_filename: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(config_filename))
            .build()?;
        s.try_deserialize()
    }
}
