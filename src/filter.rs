//! Cities, month/day filters and the selection a user explores.
//!
//! Menu ordinals are part of the interactive contract: cities are numbered
//! `1..=3`, months `0..=6` with `0` meaning all, and days `0..=7` with `7`
//! meaning all.

use chrono::{Month, Weekday};
use std::fmt;

/// A city with its own trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Maps a menu ordinal (`1..=3`) to a city.
    pub fn from_ordinal(n: u32) -> Option<Self> {
        match n {
            1 => Some(City::Chicago),
            2 => Some(City::NewYorkCity),
            3 => Some(City::Washington),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u32 {
        match self {
            City::Chicago => 1,
            City::NewYorkCity => 2,
            City::Washington => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// File name of the city's trip log inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Months the trip logs cover, in menu order.
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays in canonical week order (Monday first).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub const MENU_MAX: u32 = 6;

    /// `0` selects all months, `1..=6` January through June.
    pub fn from_ordinal(n: u32) -> Option<Self> {
        match n {
            0 => Some(MonthFilter::All),
            n => FILTER_MONTHS
                .get(n as usize - 1)
                .copied()
                .map(MonthFilter::Only),
        }
    }

    pub fn is_all(self) -> bool {
        matches!(self, MonthFilter::All)
    }

    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.number_from_month() == month,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub const MENU_MAX: u32 = 7;

    /// `0..=6` Monday through Sunday, `7` selects every day.
    pub fn from_ordinal(n: u32) -> Option<Self> {
        match n {
            7 => Some(DayFilter::All),
            n => WEEKDAYS.get(n as usize).copied().map(DayFilter::Only),
        }
    }

    pub fn is_all(self) -> bool {
        matches!(self, DayFilter::All)
    }

    pub fn matches(self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d == day,
        }
    }
}

/// The month and day restriction applied to a trip table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeFilter {
    pub month: MonthFilter,
    pub day: DayFilter,
}

/// The (city, month, day) triple chosen for one exploration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub filter: TimeFilter,
}

impl Selection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self {
            city,
            filter: TimeFilter { month, day },
        }
    }

    /// Every city with neither month nor day restricted.
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_ordinals_round_trip() {
        for city in City::ALL {
            assert_eq!(City::from_ordinal(city.ordinal()), Some(city));
        }
        assert_eq!(City::from_ordinal(0), None);
        assert_eq!(City::from_ordinal(4), None);
    }

    #[test]
    fn test_month_filter_ordinals() {
        assert_eq!(MonthFilter::from_ordinal(0), Some(MonthFilter::All));
        assert_eq!(
            MonthFilter::from_ordinal(3),
            Some(MonthFilter::Only(Month::March))
        );
        assert_eq!(
            MonthFilter::from_ordinal(6),
            Some(MonthFilter::Only(Month::June))
        );
        assert_eq!(MonthFilter::from_ordinal(7), None);
    }

    #[test]
    fn test_day_filter_ordinals() {
        assert_eq!(DayFilter::from_ordinal(0), Some(DayFilter::Only(Weekday::Mon)));
        assert_eq!(DayFilter::from_ordinal(6), Some(DayFilter::Only(Weekday::Sun)));
        assert_eq!(DayFilter::from_ordinal(7), Some(DayFilter::All));
        assert_eq!(DayFilter::from_ordinal(8), None);
    }

    #[test]
    fn test_filters_match() {
        assert!(MonthFilter::All.matches(11));
        assert!(MonthFilter::Only(Month::May).matches(5));
        assert!(!MonthFilter::Only(Month::May).matches(6));
        assert!(DayFilter::All.matches(Weekday::Sat));
        assert!(!DayFilter::Only(Weekday::Fri).matches(Weekday::Sat));
    }
}
