//! Trip records and the in-memory table the analyzers work on.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::filter::{City, TimeFilter, weekday_name};
use crate::parser::{deserialize_birth_year, deserialize_optional_text, deserialize_timestamp};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// A single row deserialized from a city trip log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time", deserialize_with = "deserialize_timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(
        rename = "User Type",
        default,
        deserialize_with = "deserialize_optional_text"
    )]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default, deserialize_with = "deserialize_optional_text")]
    pub gender: Option<String>,
    #[serde(
        rename = "Birth Year",
        default,
        deserialize_with = "deserialize_birth_year"
    )]
    pub birth_year: Option<i32>,
}

/// A trip record plus the calendar fields derived from its start time.
///
/// The derived fields are computed once in [`Trip::new`] and have no setters,
/// so they always agree with `record.start_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    record: TripRecord,
    month: u32,
    weekday: Weekday,
    hour: u32,
}

impl Trip {
    pub fn new(record: TripRecord) -> Self {
        let start = record.start_time;
        Self {
            month: start.month(),
            weekday: start.weekday(),
            hour: start.hour(),
            record,
        }
    }

    pub fn record(&self) -> &TripRecord {
        &self.record
    }

    /// Calendar month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Day of week as `0..=6`, Monday first.
    pub fn day_of_week(&self) -> u32 {
        self.weekday.num_days_from_monday()
    }

    /// Hour of day, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn matches(&self, filter: &TimeFilter) -> bool {
        filter.month.matches(self.month) && filter.day.matches(self.weekday)
    }
}

/// Which optional columns a city's trip log carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut schema = Schema::default();
        for header in headers {
            match header.trim() {
                GENDER => schema.has_gender = true,
                BIRTH_YEAR => schema.has_birth_year = true,
                _ => {}
            }
        }
        schema
    }
}

/// An ordered collection of trips for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: Option<City>,
    schema: Schema,
    filter: TimeFilter,
    trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(schema: Schema, trips: Vec<Trip>) -> Self {
        Self {
            city: None,
            schema,
            filter: TimeFilter::default(),
            trips,
        }
    }

    pub fn with_city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    pub fn city(&self) -> Option<City> {
        self.city
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// The restriction this table was produced under.
    pub fn filter(&self) -> TimeFilter {
        self.filter
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Returns the subset of trips matching `filter`; `self` is left untouched.
    pub fn filtered(&self, filter: TimeFilter) -> TripTable {
        TripTable {
            city: self.city,
            schema: self.schema,
            filter,
            trips: self
                .trips
                .iter()
                .filter(|t| t.matches(&filter))
                .cloned()
                .collect(),
        }
    }

    /// Renders one trip as a JSON object keyed by column name, including the
    /// derived fields. Optional columns appear only if the schema has them.
    pub fn raw_row(&self, trip: &Trip) -> Value {
        let r = trip.record();
        let mut row = Map::new();
        row.insert(
            START_TIME.into(),
            Value::from(r.start_time.format("%Y-%m-%d %H:%M:%S").to_string()),
        );
        row.insert(END_TIME.into(), r.end_time.clone().into());
        row.insert(TRIP_DURATION.into(), r.trip_duration.into());
        row.insert(START_STATION.into(), r.start_station.clone().into());
        row.insert(END_STATION.into(), r.end_station.clone().into());
        row.insert(USER_TYPE.into(), r.user_type.clone().into());
        if self.schema.has_gender {
            row.insert(GENDER.into(), r.gender.clone().into());
        }
        if self.schema.has_birth_year {
            row.insert(BIRTH_YEAR.into(), r.birth_year.into());
        }
        row.insert("Month".into(), trip.month().into());
        row.insert("Day of Week".into(), weekday_name(trip.weekday()).into());
        row.insert("Hour".into(), trip.hour().into());
        Value::Object(row)
    }
}
