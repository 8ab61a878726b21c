//! CSV parser for city trip logs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, de};
use std::io::Read;

use crate::trip::{Schema, Trip, TripRecord, TripTable};

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses a trip start or end timestamp such as `2017-01-01 09:07:57`.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
}

/// Blank cells become `None`.
pub(crate) fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Accepts `1989` and `1989.0`; blank cells become `None`.
pub(crate) fn deserialize_birth_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = deserialize_optional_text(deserializer)? else {
        return Ok(None);
    };
    let year: f64 = raw
        .parse()
        .map_err(|_| de::Error::custom(format!("invalid birth year '{raw}'")))?;
    if !year.is_finite() {
        return Err(de::Error::custom(format!("invalid birth year '{raw}'")));
    }
    Ok(Some(year as i32))
}

/// Reads a whole trip log, deriving calendar fields for every row.
///
/// # Errors
///
/// Returns an error if the headers cannot be read or a row fails to
/// deserialize (missing required column, bad timestamp, non-numeric duration).
pub fn read_trips<R: Read>(reader: R) -> Result<TripTable, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let schema = Schema::from_headers(rdr.headers()?.iter());

    let mut trips = Vec::new();
    for result in rdr.deserialize() {
        let record: TripRecord = result?;
        trips.push(Trip::new(record));
    }

    Ok(TripTable::new(schema, trips))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const WITH_DEMOGRAPHICS: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
2,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,,
";

    const WITHOUT_DEMOGRAPHICS: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";

    #[test]
    fn test_parse_timestamp_formats() {
        let ts = parse_timestamp("2017-01-01 09:07:57").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2017, 1, 1));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (9, 7, 57));

        assert!(parse_timestamp("2017-01-01T09:07:57").is_some());
        assert!(parse_timestamp("2017-01-01 09:07:57.250").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_read_trips_with_demographics() {
        let table = read_trips(WITH_DEMOGRAPHICS.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.schema().has_gender);
        assert!(table.schema().has_birth_year);

        let first = table.trips()[0].record();
        assert_eq!(first.trip_duration, 321.0);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));

        let second = table.trips()[1].record();
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
        assert_eq!(table.trips()[1].month(), 5);
    }

    #[test]
    fn test_read_trips_without_demographics() {
        let table = read_trips(WITHOUT_DEMOGRAPHICS.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(!table.schema().has_gender);
        assert!(!table.schema().has_birth_year);
        assert_eq!(table.trips()[0].record().trip_duration, 489.066);
        assert_eq!(table.trips()[0].hour(), 8);
    }

    #[test]
    fn test_read_trips_rejects_bad_timestamp() {
        let data = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                    not-a-date,10,A,B,Customer\n";
        assert!(read_trips(data.as_bytes()).is_err());
    }
}
