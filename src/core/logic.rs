use crate::core::reports::{
    DurationReport, StationReport, TimeReport, Timed, UserReport, duration_report, station_report,
    time_of_travel_report, user_report,
};
use crate::errors::{AppResult, DataError};
use crate::models::dataset::Dataset;
use crate::models::filter::FilterSpec;
use serde::Serialize;
use tracing::debug;

/// All four reports for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct FullReport {
    pub city: String,
    pub month: String,
    pub day: String,
    pub trips: usize,
    pub time_of_travel: Timed<TimeReport>,
    pub stations: Timed<StationReport>,
    pub trip_duration: Timed<DurationReport>,
    pub users: Timed<UserReport>,
}

pub struct Core;

impl Core {
    pub fn build_full_report(filter: &FilterSpec, dataset: &Dataset) -> AppResult<FullReport> {
        if dataset.is_empty() {
            return Err(DataError::EmptyDataset.into());
        }

        let records = &dataset.records;
        let time_of_travel = Timed::measure(|| time_of_travel_report(records))?;
        let stations = Timed::measure(|| station_report(records))?;
        let trip_duration = Timed::measure(|| duration_report(records))?;
        let users = Timed::measure(|| user_report(dataset))?;

        debug!(
            trips = dataset.len(),
            time_us = time_of_travel.elapsed.as_micros() as u64,
            stations_us = stations.elapsed.as_micros() as u64,
            duration_us = trip_duration.elapsed.as_micros() as u64,
            users_us = users.elapsed.as_micros() as u64,
            "Reports computed"
        );

        Ok(FullReport {
            city: filter.city.key().to_string(),
            month: filter.month.to_string(),
            day: filter.day.to_string(),
            trips: dataset.len(),
            time_of_travel,
            stations,
            trip_duration,
            users,
        })
    }
}
