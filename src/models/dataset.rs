use crate::models::city::City;
use crate::models::filter::FilterSpec;
use crate::models::trip::TripRecord;

pub const GENDER_COLUMN: &str = "Gender";
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Which optional columns the backing source actually carries.
///
/// Washington publishes neither gender nor birth year. That is a property
/// of the whole file, so it is recorded once here at load time and checked
/// before computing demographics, instead of probing individual records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSchema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl DatasetSchema {
    pub fn from_columns<'a>(columns: impl IntoIterator<Item = &'a str>) -> Self {
        let mut schema = DatasetSchema::default();
        for col in columns {
            match col.trim() {
                GENDER_COLUMN => schema.has_gender = true,
                BIRTH_YEAR_COLUMN => schema.has_birth_year = true,
                _ => {}
            }
        }
        schema
    }

    pub fn has_demographics(&self) -> bool {
        self.has_gender || self.has_birth_year
    }
}

/// Trips of one city, in source order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    pub schema: DatasetSchema,
    pub records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(city: City, schema: DatasetSchema, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            schema,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep only the records matching `filter`, preserving order. The schema
    /// describes the source, so it is carried over unchanged.
    pub fn retain_matching(mut self, filter: &FilterSpec) -> Self {
        self.records.retain(|r| filter.matches(r));
        self
    }
}
