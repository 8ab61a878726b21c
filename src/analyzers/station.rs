//! Most popular stations and trips.

use tracing::debug;

use crate::analyzers::types::StationReport;
use crate::analyzers::utility::mode;
use crate::trip::TripTable;

/// Finds the most used start station, end station and start/end combination.
/// Ties are all reported. Returns `None` for an empty table.
#[tracing::instrument(skip(table), fields(trips = table.len()))]
pub fn station_stats(table: &TripTable) -> Option<StationReport> {
    if table.is_empty() {
        debug!("No trips to analyze");
        return None;
    }

    let records = || table.trips().iter().map(|t| t.record());

    let start_stations = mode(records().map(|r| r.start_station.as_str()));
    let end_stations = mode(records().map(|r| r.end_station.as_str()));
    let routes = mode(records().map(|r| format!("{} to {}", r.start_station, r.end_station)));

    Some(StationReport {
        start_stations: start_stations.into_iter().map(str::to_string).collect(),
        end_stations: end_stations.into_iter().map(str::to_string).collect(),
        routes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Schema;
    use crate::trip::fixtures::trip;

    #[test]
    fn test_empty_table_has_no_report() {
        let table = TripTable::new(Schema::default(), Vec::new());
        assert_eq!(station_stats(&table), None);
    }

    #[test]
    fn test_popular_stations() {
        let trips = vec![
            trip((2017, 1, 2), (8, 0), 60.0, "Canal St", "Clark St"),
            trip((2017, 1, 2), (9, 0), 60.0, "Canal St", "State St"),
            trip((2017, 1, 3), (9, 0), 60.0, "Clark St", "State St"),
            trip((2017, 1, 4), (9, 0), 60.0, "Clark St", "Canal St"),
            trip((2017, 1, 4), (9, 0), 60.0, "Canal St", "Clark St"),
        ];
        let report = station_stats(&TripTable::new(Schema::default(), trips)).unwrap();

        assert_eq!(report.start_stations, vec!["Canal St"]);
        assert_eq!(report.end_stations, vec!["Clark St", "State St"]);
        assert_eq!(report.routes, vec!["Canal St to Clark St"]);
    }

    #[test]
    fn test_route_is_joined_per_row() {
        // "A B" + "C" must not collide with "A" + "B C"
        let trips = vec![
            trip((2017, 1, 2), (8, 0), 60.0, "A B", "C"),
            trip((2017, 1, 2), (8, 0), 60.0, "A", "B C"),
        ];
        let report = station_stats(&TripTable::new(Schema::default(), trips)).unwrap();
        assert_eq!(report.routes, vec!["A B to C", "A to B C"]);
    }
}
