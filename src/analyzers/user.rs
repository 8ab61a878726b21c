//! Rider demographics.

use tracing::debug;

use crate::analyzers::types::{AgeStats, AgeSummary, GenderStats, UserReport};
use crate::analyzers::utility::{mean, mode, value_counts};
use crate::trip::TripTable;

/// Counts user types and, when the table has the columns, gender and age data.
///
/// Ages are `current_year - birth_year`. Missing cells are left out of every
/// count and average.
#[tracing::instrument(skip(table), fields(trips = table.len()))]
pub fn user_stats(table: &TripTable, current_year: i32) -> UserReport {
    let schema = table.schema();
    let records = || table.trips().iter().map(|t| t.record());

    let user_types = value_counts(records().filter_map(|r| r.user_type.as_deref()))
        .into_iter()
        .map(|(kind, count)| (kind.to_string(), count))
        .collect();

    let gender = schema.has_gender.then(|| {
        let rides = value_counts(records().filter_map(|r| r.gender.as_deref()));
        let mean_duration = rides
            .iter()
            .filter_map(|(gender, _)| {
                let durations: Vec<f64> = records()
                    .filter(|r| r.gender.as_deref() == Some(*gender))
                    .map(|r| r.trip_duration)
                    .collect();
                mean(&durations).map(|avg| (gender.to_string(), avg))
            })
            .collect();
        GenderStats {
            rides: rides
                .into_iter()
                .map(|(gender, count)| (gender.to_string(), count))
                .collect(),
            mean_duration,
        }
    });

    let ages = schema.has_birth_year.then(|| {
        let years: Vec<i32> = records().filter_map(|r| r.birth_year).collect();
        AgeStats {
            current_year,
            summary: age_summary(&years, current_year),
        }
    });

    if gender.is_none() && ages.is_none() {
        debug!("Table has no demographic columns");
    }

    UserReport {
        user_types,
        gender,
        ages,
    }
}

fn age_summary(years: &[i32], current_year: i32) -> Option<AgeSummary> {
    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;

    let mut most_common_birth_years = mode(years.iter().copied());
    most_common_birth_years.sort_unstable();

    let ages: Vec<f64> = years.iter().map(|y| f64::from(current_year - y)).collect();
    let mean_age = mean(&ages)?.round() as i64;

    Some(AgeSummary {
        earliest_birth_year: earliest,
        most_recent_birth_year: most_recent,
        most_common_birth_years,
        oldest: current_year - earliest,
        youngest: current_year - most_recent,
        mean_age,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Schema;
    use crate::trip::fixtures::{trip, with_user};

    fn demographics() -> Schema {
        Schema {
            has_gender: true,
            has_birth_year: true,
        }
    }

    fn sample(schema: Schema) -> TripTable {
        let t = |secs| trip((2017, 1, 2), (8, 0), secs, "A", "B");
        let trips = vec![
            with_user(t(100.0), "Subscriber", Some("Male"), Some(1980)),
            with_user(t(400.0), "Subscriber", Some("Female"), Some(1990)),
            with_user(t(50.0), "Customer", None, None),
            with_user(t(300.0), "Subscriber", Some("Male"), Some(1990)),
            with_user(t(200.0), "Subscriber", Some("Female"), Some(1980)),
        ];
        TripTable::new(schema, trips)
    }

    #[test]
    fn test_user_type_counts() {
        let report = user_stats(&sample(Schema::default()), 2017);
        assert_eq!(
            report.user_types,
            vec![("Subscriber".to_string(), 4), ("Customer".to_string(), 1)]
        );
    }

    #[test]
    fn test_demographics_absent_without_columns() {
        let report = user_stats(&sample(Schema::default()), 2017);
        assert!(report.gender.is_none());
        assert!(report.ages.is_none());
    }

    #[test]
    fn test_gender_counts_and_mean_duration() {
        let report = user_stats(&sample(demographics()), 2017);
        let gender = report.gender.unwrap();
        assert_eq!(
            gender.rides,
            vec![("Male".to_string(), 2), ("Female".to_string(), 2)]
        );
        assert_eq!(
            gender.mean_duration,
            vec![("Male".to_string(), 200.0), ("Female".to_string(), 300.0)]
        );
    }

    #[test]
    fn test_age_summary() {
        let report = user_stats(&sample(demographics()), 2020);
        let ages = report.ages.unwrap();
        assert_eq!(ages.current_year, 2020);
        let summary = ages.summary.unwrap();
        assert_eq!(summary.earliest_birth_year, 1980);
        assert_eq!(summary.most_recent_birth_year, 1990);
        assert_eq!(summary.most_common_birth_years, vec![1980, 1990]);
        assert_eq!(summary.oldest, 40);
        assert_eq!(summary.youngest, 30);
        assert_eq!(summary.mean_age, 35);
    }

    #[test]
    fn test_empty_table_keeps_schema_sections() {
        let report = user_stats(&TripTable::new(demographics(), Vec::new()), 2017);
        assert!(report.user_types.is_empty());
        assert!(report.gender.unwrap().rides.is_empty());
        assert_eq!(report.ages.unwrap().summary, None);
    }
}
