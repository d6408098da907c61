use crate::data::reader::parse_trips;
use crate::errors::{AppResult, DataError};
use crate::models::city::City;
use crate::models::dataset::Dataset;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Anything able to hand out the full, unfiltered trip list of a city.
pub trait TripSource {
    fn read(&self, city: City) -> AppResult<Dataset>;
}

/// Reads `<dir>/chicago.csv`, `<dir>/new_york_city.csv`, `<dir>/washington.csv`.
#[derive(Debug, Clone)]
pub struct CsvDirSource {
    dir: PathBuf,
}

impl CsvDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.dir.join(city.file_name())
    }
}

impl TripSource for CsvDirSource {
    #[instrument(skip_all, fields(city = city.key()))]
    fn read(&self, city: City) -> AppResult<Dataset> {
        let path = self.path_for(city);
        let file = File::open(&path).map_err(|e| DataError::SourceUnavailable {
            city: city.key().to_string(),
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let dataset = parse_trips(city, BufReader::new(file))?;
        debug!(path = %path.display(), rows = dataset.len(), "Source read");
        Ok(dataset)
    }
}
