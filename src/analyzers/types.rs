//! Report types produced by the analyzers.

/// One row of a relative-frequency chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyBar<T> {
    pub label: T,
    pub count: usize,
    /// Integer share of all trips in the table, `0..=100`.
    pub percent: usize,
}

/// Most common value of a calendar field plus its chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    /// First of the tied winners, in calendar order.
    pub most_common: String,
    pub bars: Vec<FrequencyBar<String>>,
}

/// Time-of-day patterns for a non-empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReport {
    pub trips: usize,
    /// Absent when the table was restricted to a single month.
    pub months: Option<Breakdown>,
    /// Absent when the table was restricted to a single weekday.
    pub weekdays: Option<Breakdown>,
    pub busiest_hours: Vec<u32>,
    /// Always 24 entries, hour 0 first.
    pub hours: Vec<FrequencyBar<u32>>,
}

/// Most popular stations; every field lists all tied winners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationReport {
    pub start_stations: Vec<String>,
    pub end_stations: Vec<String>,
    /// `"<start> to <end>"` combinations.
    pub routes: Vec<String>,
}

/// Trip duration totals in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationReport {
    pub trips: usize,
    pub total: f64,
    pub mean: f64,
    pub longest: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderStats {
    pub rides: Vec<(String, usize)>,
    /// Mean trip duration in seconds, in the same order as `rides`.
    pub mean_duration: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeSummary {
    pub earliest_birth_year: i32,
    pub most_recent_birth_year: i32,
    pub most_common_birth_years: Vec<i32>,
    pub oldest: i32,
    pub youngest: i32,
    pub mean_age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeStats {
    pub current_year: i32,
    /// `None` when no trip carries a birth year.
    pub summary: Option<AgeSummary>,
}

/// Rider demographics. The optional blocks follow the table schema.
#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
    pub user_types: Vec<(String, usize)>,
    pub gender: Option<GenderStats>,
    pub ages: Option<AgeStats>,
}
