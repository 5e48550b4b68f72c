use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no data points supplied for analysis")]
    EmptyData,
    #[error("No historical data available for {0}")]
    NoHistoricalData(String),
    #[error("failed to perform technical analysis: {source}")]
    Failed {
        #[source]
        source: anyhow::Error,
    },
}

impl AnalysisError {
    pub fn failed(source: anyhow::Error) -> Self {
        Self::Failed { source }
    }
}
