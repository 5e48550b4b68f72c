use crate::types::analysis::HistoricalDataPoint;
use crate::types::errors::AnalysisError;

/// Rejects series the calculators cannot work with. Order of arrival is the
/// working order; no resorting or other transformation is applied.
pub fn validate(series: &[HistoricalDataPoint]) -> Result<(), AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::EmptyData);
    }
    Ok(())
}

pub fn prices(series: &[HistoricalDataPoint]) -> Vec<f64> {
    series.iter().map(|p| p.price).collect()
}

pub fn volumes(series: &[HistoricalDataPoint]) -> Vec<f64> {
    series.iter().map(|p| p.volume).collect()
}
