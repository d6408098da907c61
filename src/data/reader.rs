//! CSV → TripRecord parsing.

use crate::errors::{AppResult, DataError};
use crate::models::city::City;
use crate::models::dataset::{BIRTH_YEAR_COLUMN, Dataset, DatasetSchema};
use crate::models::trip::TripRecord;
use crate::utils::date::parse_timestamp;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// One CSV row as written in the source files. Optional columns default to
/// `None` when the header lacks them, and empty cells read as `None` too.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Read every trip of `city` from CSV data, in file order.
pub fn parse_trips<R: Read>(city: City, reader: R) -> AppResult<Dataset> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| DataError::Malformed {
            row: 1,
            reason: e.to_string(),
        })?
        .clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DataError::MissingColumn(required.to_string()).into());
        }
    }
    let schema = DatasetSchema::from_columns(headers.iter());
    debug!(
        city = city.key(),
        has_gender = schema.has_gender,
        has_birth_year = schema.has_birth_year,
        "Source schema detected"
    );

    let mut records = Vec::new();
    let mut raw = StringRecord::new();
    loop {
        let more = rdr.read_record(&mut raw).map_err(|e| DataError::Malformed {
            row: records.len() + 2,
            reason: e.to_string(),
        })?;
        if !more {
            break;
        }
        let row = raw.position().map(|p| p.line() as usize).unwrap_or(records.len() + 2);
        let parsed: RawTrip = raw
            .deserialize(Some(&headers))
            .map_err(|e| DataError::Malformed {
                row,
                reason: e.to_string(),
            })?;
        records.push(to_record(parsed, row)?);
    }

    Ok(Dataset::new(city, schema, records))
}

fn to_record(raw: RawTrip, row: usize) -> AppResult<TripRecord> {
    let malformed = |reason: String| DataError::Malformed { row, reason };

    let start_time = parse_timestamp(&raw.start_time)
        .ok_or_else(|| malformed(format!("invalid Start Time '{}'", raw.start_time)))?;

    let end_time = match non_empty(raw.end_time) {
        Some(s) => Some(
            parse_timestamp(&s).ok_or_else(|| malformed(format!("invalid End Time '{}'", s)))?,
        ),
        None => None,
    };

    let duration_secs = parse_duration(&raw.trip_duration).ok_or_else(|| {
        malformed(format!("invalid Trip Duration '{}'", raw.trip_duration))
    })?;

    let birth_year = match non_empty(raw.birth_year) {
        Some(s) => Some(
            parse_year(&s).ok_or_else(|| malformed(format!("invalid {} '{}'", BIRTH_YEAR_COLUMN, s)))?,
        ),
        None => None,
    };

    Ok(
        TripRecord::new(start_time, raw.start_station, raw.end_station, duration_secs)
            .with_end_time(end_time)
            .with_user_type(non_empty(raw.user_type))
            .with_gender(non_empty(raw.gender))
            .with_birth_year(birth_year),
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Whole seconds. Decimal values (Washington writes milliseconds) are
/// rounded to the nearest second; negative or non-numeric values are rejected.
pub fn parse_duration(s: &str) -> Option<u64> {
    let s = s.trim();
    if let Ok(secs) = s.parse::<u64>() {
        return Some(secs);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v.round() as u64),
        _ => None,
    }
}

/// "1992" or "1992.0"; fractional years are rejected.
pub fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if let Ok(y) = s.parse::<i32>() {
        return Some(y);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i32::MAX as f64 => Some(v as i32),
        _ => None,
    }
}
