//! Access to the trip files of each city.

pub mod reader;
pub mod source;

pub use reader::parse_trips;
pub use source::{CsvDirSource, TripSource};
