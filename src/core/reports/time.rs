use crate::core::calculator::frequency::{Ranked, mode_of};
use crate::errors::{AppResult, DataError};
use crate::models::trip::TripRecord;
use crate::utils::date::{month_name, weekday_name};
use chrono::Weekday;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeReport {
    /// 1-based month number
    pub most_common_month: Ranked<u32>,
    #[serde(serialize_with = "serialize_ranked_weekday")]
    pub most_common_weekday: Ranked<Weekday>,
    pub most_common_hour: Ranked<u32>,
}

impl TimeReport {
    pub fn month_name(&self) -> String {
        month_name(self.most_common_month.value)
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.most_common_weekday.value)
    }
}

fn serialize_ranked_weekday<S: Serializer>(r: &Ranked<Weekday>, s: S) -> Result<S::Ok, S::Error> {
    Ranked {
        value: weekday_name(r.value),
        count: r.count,
    }
    .serialize(s)
}

/// Most frequent month, weekday and start hour of the selected trips.
pub fn time_of_travel_report(records: &[TripRecord]) -> AppResult<TimeReport> {
    let most_common_month = mode_of(records.iter().map(|r| r.month)).ok_or(DataError::EmptyDataset)?;
    let most_common_weekday =
        mode_of(records.iter().map(|r| r.weekday)).ok_or(DataError::EmptyDataset)?;
    let most_common_hour = mode_of(records.iter().map(|r| r.hour)).ok_or(DataError::EmptyDataset)?;

    Ok(TimeReport {
        most_common_month,
        most_common_weekday,
        most_common_hour,
    })
}
