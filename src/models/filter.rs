//! Month / weekday filters selected by the user for a session.

use crate::errors::AppError;
use crate::models::city::City;
use crate::models::trip::TripRecord;
use crate::utils::date::{month_name, weekday_name};
use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

/// Months accepted by the month filter. Only January to June are covered
/// by the published datasets, so the list stops there.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month number (1 = January .. 6 = June)
    Month(u32),
}

impl MonthFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        let s = input.trim().to_lowercase();
        if s == "all" {
            return Some(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == s)
            .map(|idx| MonthFilter::Month(idx as u32 + 1))
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }

    pub fn choices() -> String {
        format!("all, {}", MONTHS.join(", "))
    }
}

impl FromStr for MonthFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonthFilter::from_input(s).ok_or_else(|| {
            AppError::Validation(format!(
                "unknown month '{}' (expected one of: {})",
                s,
                MonthFilter::choices()
            ))
        })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => f.write_str(&month_name(*m).to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Accepts "all" or a full day name, case-insensitive.
    pub fn from_input(input: &str) -> Option<Self> {
        let s = input.trim().to_lowercase();
        if s == "all" {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == s)
            .map(DayFilter::Day)
    }

    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == weekday,
        }
    }

    pub fn choices() -> String {
        let days: Vec<String> = WEEKDAYS
            .iter()
            .map(|d| weekday_name(*d).to_lowercase())
            .collect();
        format!("all, {}", days.join(", "))
    }
}

impl FromStr for DayFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayFilter::from_input(s).ok_or_else(|| {
            AppError::Validation(format!(
                "unknown day '{}' (expected one of: {})",
                s,
                DayFilter::choices()
            ))
        })
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => f.write_str(&weekday_name(*d).to_lowercase()),
        }
    }
}

/// A validated (city, month, weekday) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSpec {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Whole dataset for a city, no month or day restriction.
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }

    pub fn matches(&self, record: &TripRecord) -> bool {
        self.month.matches(record.month) && self.day.matches(record.weekday)
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={} month={} day={}", self.city.key(), self.month, self.day)
    }
}
