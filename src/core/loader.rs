use crate::data::TripSource;
use crate::errors::AppResult;
use crate::models::dataset::Dataset;
use crate::models::filter::FilterSpec;
use tracing::{debug, instrument};

/// Load the trips of `filter.city` and keep those matching the month and
/// weekday filters, in source order.
#[instrument(skip_all, fields(filter = %filter))]
pub fn load(source: &dyn TripSource, filter: &FilterSpec) -> AppResult<Dataset> {
    let dataset = source.read(filter.city)?;
    let total = dataset.len();

    let filtered = dataset.retain_matching(filter);
    debug!(total, kept = filtered.len(), "Filter applied");

    Ok(filtered)
}
