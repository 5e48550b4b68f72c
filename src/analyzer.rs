use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculators::{liquidity, momentum, series, trend, volatility, volume};
use crate::config::constants::HISTORICAL_SEGMENT_MS;
use crate::config::settings::AnalyzerConfig;
use crate::subscription::UpdateSubscription;
use crate::types::analysis::{
    HistoricalDataPoint, LiquidityData, PredictionMetrics, TechnicalAnalysisData,
};
use crate::types::capabilities::{HistoricalDataProvider, PredictionModel};
use crate::types::errors::AnalysisError;

/// Orchestrates the calculators over a provider-supplied series and merges
/// their outputs into one [`TechnicalAnalysisData`] bundle. Holds no state
/// between calls; cloning is cheap and clones share the injected
/// capabilities.
#[derive(Clone)]
pub struct TechnicalAnalyzer {
    provider: Arc<dyn HistoricalDataProvider>,
    model: Arc<dyn PredictionModel>,
    config: AnalyzerConfig,
}

impl TechnicalAnalyzer {
    pub fn new(provider: Arc<dyn HistoricalDataProvider>, model: Arc<dyn PredictionModel>) -> Self {
        Self::with_config(provider, model, AnalyzerConfig::default())
    }

    pub fn with_config(
        provider: Arc<dyn HistoricalDataProvider>,
        model: Arc<dyn PredictionModel>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            provider,
            model,
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Full analysis of the identifier's current series. Provider errors and
    /// an empty series are fatal; liquidity and model failures degrade to
    /// their documented fallback values.
    pub async fn analyze(
        &self,
        identifier: &str,
    ) -> Result<TechnicalAnalysisData, AnalysisError> {
        debug!("analyzing {identifier}");
        let series = self
            .provider
            .fetch(identifier)
            .await
            .map_err(AnalysisError::failed)?;
        if series.is_empty() {
            return Err(AnalysisError::NoHistoricalData(identifier.to_string()));
        }
        series::validate(&series)?;
        Ok(self.assemble(identifier, &series).await)
    }

    /// Runs the capability calls concurrently, the synchronous calculators
    /// inline, and merges everything. Never fails: each async branch has a
    /// soft fallback.
    async fn assemble(
        &self,
        identifier: &str,
        series: &[HistoricalDataPoint],
    ) -> TechnicalAnalysisData {
        let (liquidity_result, patterns_result, prediction_result) = tokio::join!(
            self.provider.get_liquidity(identifier),
            self.model.detect_patterns(series),
            self.model.predict(series),
        );

        let liquidity = match liquidity_result {
            Ok(depth) => liquidity::analyze(&depth),
            Err(e) => {
                warn!("liquidity fetch failed for {identifier}, reporting zeroed depth: {e}");
                LiquidityData::zeroed()
            }
        };
        let patterns = match patterns_result {
            Ok(patterns) => patterns,
            Err(e) => {
                warn!("pattern detection failed for {identifier}: {e}");
                Vec::new()
            }
        };
        let last_price = series.last().map(|p| p.price).unwrap_or_default();
        let predictions = match prediction_result {
            Ok(prediction) => prediction,
            Err(e) => {
                warn!("prediction failed for {identifier}, falling back to last price: {e}");
                PredictionMetrics::degraded(last_price)
            }
        };

        let prices = series::prices(series);
        TechnicalAnalysisData {
            volume: volume::profile(series, &self.config),
            liquidity,
            patterns,
            predictions,
            momentum: momentum::analyze(&prices, &self.config),
            volatility: volatility::analyze(&prices),
            trend: trend::analyze(&prices, &self.config),
        }
    }

    /// One bundle per day-sized segment of the series inside `[start, end)`.
    /// Any fetch failure or an empty range degrades to an empty vec so
    /// report builders stay alive.
    pub async fn historical_analysis(
        &self,
        identifier: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<TechnicalAnalysisData> {
        let series = match self.provider.fetch(identifier).await {
            Ok(series) => series,
            Err(e) => {
                warn!("historical fetch failed for {identifier}: {e}");
                return Vec::new();
            }
        };

        let start_ms = start.timestamp_millis();
        let end_ms = end.timestamp_millis();
        let in_range: Vec<HistoricalDataPoint> = series
            .into_iter()
            .filter(|p| p.timestamp >= start_ms && p.timestamp < end_ms)
            .collect();
        if in_range.is_empty() {
            return Vec::new();
        }

        let mut segments: Vec<Vec<HistoricalDataPoint>> = Vec::new();
        let mut current_bucket = i64::MIN;
        for point in in_range {
            let bucket = (point.timestamp - start_ms) / HISTORICAL_SEGMENT_MS;
            if bucket != current_bucket || segments.is_empty() {
                segments.push(Vec::new());
                current_bucket = bucket;
            }
            if let Some(segment) = segments.last_mut() {
                segment.push(point);
            }
        }

        join_all(
            segments
                .iter()
                .map(|segment| self.assemble(identifier, segment)),
        )
        .await
    }

    /// Re-runs [`Self::analyze`] on a fixed interval and pushes each success
    /// to the callback. Per-tick errors are logged and swallowed so the
    /// subscription outlives provider hiccups.
    pub fn subscribe_to_updates<F>(&self, identifier: &str, callback: F) -> UpdateSubscription
    where
        F: Fn(TechnicalAnalysisData) + Send + Sync + 'static,
    {
        let analyzer = self.clone();
        let identifier = identifier.to_string();
        let id = Uuid::new_v4();
        let period = Duration::from_millis(self.config.update_interval_ms);
        info!(
            "starting analysis updates {id} for {identifier} every {}ms",
            period.as_millis()
        );

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                match analyzer.analyze(&identifier).await {
                    Ok(analysis) => callback(analysis),
                    Err(e) => warn!("analysis update {id} for {identifier} skipped: {e}"),
                }
            }
        });
        UpdateSubscription::new(id, task)
    }
}
