use crate::core::calculator::frequency::{FrequencyTable, Ranked};
use crate::errors::{AppResult, DataError};
use crate::models::dataset::Dataset;
use serde::Serialize;

/// Outcome of an optional demographic column for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Demographic<T> {
    /// The city's source has no such column at all.
    Unavailable,
    /// The column exists but no selected trip has a value.
    NoValues,
    Stats(T),
}

impl<T> Demographic<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Demographic::Unavailable)
    }

    pub fn stats(&self) -> Option<&T> {
        match self {
            Demographic::Stats(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: Ranked<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    /// User type → trips, most frequent first
    pub user_types: Vec<Ranked<String>>,
    #[serde(skip_serializing_if = "Demographic::is_unavailable")]
    pub gender: Demographic<Vec<Ranked<String>>>,
    #[serde(skip_serializing_if = "Demographic::is_unavailable")]
    pub birth_year: Demographic<BirthYearStats>,
}

impl UserReport {
    /// False when the source carries neither gender nor birth year.
    pub fn has_demographics(&self) -> bool {
        !(self.gender.is_unavailable() && self.birth_year.is_unavailable())
    }
}

pub fn user_report(dataset: &Dataset) -> AppResult<UserReport> {
    let records = &dataset.records;
    if records.is_empty() {
        return Err(DataError::EmptyDataset.into());
    }

    let user_types = records
        .iter()
        .filter_map(|r| r.user_type.clone())
        .collect::<FrequencyTable<String>>()
        .ranked();

    let gender = if dataset.schema.has_gender {
        let table: FrequencyTable<String> = records.iter().filter_map(|r| r.gender.clone()).collect();
        if table.is_empty() {
            Demographic::NoValues
        } else {
            Demographic::Stats(table.ranked())
        }
    } else {
        Demographic::Unavailable
    };

    let birth_year = if dataset.schema.has_birth_year {
        birth_year_stats(records.iter().filter_map(|r| r.birth_year))
            .map_or(Demographic::NoValues, Demographic::Stats)
    } else {
        Demographic::Unavailable
    };

    Ok(UserReport {
        user_types,
        gender,
        birth_year,
    })
}

fn birth_year_stats(years: impl Iterator<Item = i32>) -> Option<BirthYearStats> {
    let mut table = FrequencyTable::new();
    let mut earliest = i32::MAX;
    let mut most_recent = i32::MIN;

    for year in years {
        earliest = earliest.min(year);
        most_recent = most_recent.max(year);
        table.add(year);
    }

    let most_common = table.mode()?;
    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}
