use crate::core::calculator::frequency::{Ranked, mode_of};
use crate::errors::{AppResult, DataError};
use crate::models::trip::TripRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub most_common_start: Ranked<String>,
    pub most_common_end: Ranked<String>,
    /// "<start> to <end>"; A→B and B→A are different trips.
    pub most_common_pair: Ranked<String>,
}

pub fn station_report(records: &[TripRecord]) -> AppResult<StationReport> {
    let most_common_start = mode_of(records.iter().map(|r| r.start_station.clone()))
        .ok_or(DataError::EmptyDataset)?;
    let most_common_end = mode_of(records.iter().map(|r| r.end_station.clone()))
        .ok_or(DataError::EmptyDataset)?;
    let most_common_pair =
        mode_of(records.iter().map(TripRecord::trip_label)).ok_or(DataError::EmptyDataset)?;

    Ok(StationReport {
        most_common_start,
        most_common_end,
        most_common_pair,
    })
}
