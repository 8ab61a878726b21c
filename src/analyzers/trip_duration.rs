//! Total, average and longest trip duration.

use tracing::debug;

use crate::analyzers::types::DurationReport;
use crate::trip::TripTable;

/// Returns `None` for an empty table, where the mean is undefined.
#[tracing::instrument(skip(table), fields(trips = table.len()))]
pub fn trip_duration_stats(table: &TripTable) -> Option<DurationReport> {
    if table.is_empty() {
        debug!("No trips to analyze");
        return None;
    }

    let durations = table.trips().iter().map(|t| t.record().trip_duration);
    let total: f64 = durations.clone().sum();
    let longest = durations.fold(0.0, f64::max);

    Some(DurationReport {
        trips: table.len(),
        total,
        mean: total / table.len() as f64,
        longest,
    })
}
