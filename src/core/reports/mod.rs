//! The four statistics reports computed over a filtered dataset.
//!
//! Every report fails with `DataError::EmptyDataset` on an empty selection
//! rather than inventing a value.

pub mod duration;
pub mod stations;
pub mod time;
pub mod users;

pub use duration::{DurationReport, duration_report};
pub use stations::{StationReport, station_report};
pub use time::{TimeReport, time_of_travel_report};
pub use users::{BirthYearStats, Demographic, UserReport, user_report};

use crate::errors::AppResult;
use serde::Serialize;
use std::time::{Duration, Instant};

/// A report plus the time it took to compute.
#[derive(Debug, Clone, Serialize)]
pub struct Timed<T> {
    #[serde(flatten)]
    pub report: T,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn measure(f: impl FnOnce() -> AppResult<T>) -> AppResult<Self> {
        let start = Instant::now();
        let report = f()?;
        Ok(Timed {
            report,
            elapsed: start.elapsed(),
        })
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}
