use crate::errors::{AppResult, DataError};
use crate::models::trip::TripRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub trips: usize,
    /// Sum of trip durations, in seconds
    pub total_duration: u64,
    /// Mean trip duration, in seconds
    pub mean_duration: f64,
}

pub fn duration_report(records: &[TripRecord]) -> AppResult<DurationReport> {
    if records.is_empty() {
        return Err(DataError::EmptyDataset.into());
    }

    let total_duration = records
        .iter()
        .try_fold(0u64, |acc, r| acc.checked_add(r.duration_secs))
        .ok_or(DataError::DurationOverflow)?;
    let mean_duration = total_duration as f64 / records.len() as f64;

    Ok(DurationReport {
        trips: records.len(),
        total_duration,
        mean_duration,
    })
}
