use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,     // chicago.csv
    NewYorkCity, // new_york_city.csv
    Washington,  // washington.csv
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Key typed by the user at the city prompt.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the backing CSV inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Helper: convert user input (any case, `_` accepted in place of spaces)
    pub fn from_input(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase().replace('_', " ");
        City::ALL.into_iter().find(|c| c.key() == normalized)
    }

    /// Comma separated list of accepted keys, for prompts and error messages.
    pub fn choices() -> String {
        City::ALL
            .iter()
            .map(|c| c.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for City {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::from_input(s).ok_or_else(|| {
            AppError::Validation(format!("unknown city '{}' (expected one of: {})", s, City::choices()))
        })
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
