#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::models::trip::TripRecord;
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bks() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Directory with the small chicago / new_york_city / washington CSV samples
pub fn fixtures_dir() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .to_string_lossy()
        .to_string()
}

/// Create a fresh, empty data directory inside the system temp dir
pub fn temp_data_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp data dir");
    path
}

/// Build a trip from a "YYYY-MM-DD HH:MM:SS" start time
pub fn trip(start: &str, from: &str, to: &str, duration_secs: u64) -> TripRecord {
    let ts = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").expect("valid timestamp");
    TripRecord::new(ts, from, to, duration_secs)
}

/// Trips at the given hours of 2017-06-05 (a Monday), all A → B, 60s each
pub fn trips_at_hours(hours: &[u32]) -> Vec<TripRecord> {
    hours
        .iter()
        .map(|h| trip(&format!("2017-06-05 {:02}:00:00", h), "A", "B", 60))
        .collect()
}
