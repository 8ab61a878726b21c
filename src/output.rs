//! Text rendering of selections, analyzer reports and raw trip rows.

use anyhow::Result;
use std::io::Write;
use std::time::Duration;

use crate::analyzers::types::{
    Breakdown, DurationReport, FrequencyBar, StationReport, TimeReport, UserReport,
};
use crate::duration::format_duration;
use crate::filter::{DayFilter, MonthFilter, Selection, weekday_name};
use crate::trip::{Trip, TripTable};

pub const TIME_HEADING: &str = "Calculating The Most Frequent Times of Travel...";
pub const STATION_HEADING: &str = "Calculating The Most Popular Stations and Trip...";
pub const DURATION_HEADING: &str = "Calculating Trip Duration...";
pub const USER_HEADING: &str = "Calculating User Stats...";
pub const NO_DATA: &str = "No trips match this selection.";

const BAR_BLOCK: char = '█';

/// Describes a selection, e.g. `You have selected to view data from Chicago in March on a Monday`.
pub fn selection_description(selection: &Selection) -> String {
    let mut text = format!(
        "You have selected to view data from {}",
        selection.city.name()
    );
    if let MonthFilter::Only(month) = selection.filter.month {
        text.push_str(" in ");
        text.push_str(month.name());
    }
    if let DayFilter::Only(day) = selection.filter.day {
        text.push_str(" on a ");
        text.push_str(weekday_name(day));
    }
    text
}

pub fn rule() -> String {
    "-".repeat(40)
}

pub fn write_heading<W: Write>(out: &mut W, heading: &str) -> Result<()> {
    writeln!(out, "\n{heading}\n")?;
    Ok(())
}

pub fn write_footer<W: Write>(out: &mut W, elapsed: Duration) -> Result<()> {
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", rule())?;
    Ok(())
}

fn bar(percent: usize) -> String {
    BAR_BLOCK.to_string().repeat(percent)
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_breakdown<W: Write>(
    out: &mut W,
    breakdown: &Breakdown,
    most_common_label: &str,
    chart_label: &str,
) -> Result<()> {
    writeln!(out, "{most_common_label}: {}", breakdown.most_common)?;
    writeln!(out, "{chart_label}")?;
    for FrequencyBar { label, percent, .. } in &breakdown.bars {
        writeln!(out, "{:12}: {:2}", label, bar(*percent))?;
    }
    Ok(())
}

pub fn write_time_report<W: Write>(out: &mut W, report: Option<&TimeReport>) -> Result<()> {
    let Some(report) = report else {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    };

    if let Some(months) = &report.months {
        write_breakdown(
            out,
            months,
            "Most common month",
            "Chart of the frequencies of months:",
        )?;
        writeln!(out)?;
    }

    if let Some(weekdays) = &report.weekdays {
        write_breakdown(
            out,
            weekdays,
            "Most common day of the week",
            "Chart of the frequencies of days of week:",
        )?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "Most common starting hour: {}",
        join(&report.busiest_hours)
    )?;
    writeln!(out, "Chart of the frequencies of start hours:")?;
    for FrequencyBar { label, percent, .. } in &report.hours {
        writeln!(out, "{:2}:00 {:2}", label, bar(*percent))?;
    }
    Ok(())
}

pub fn write_station_report<W: Write>(out: &mut W, report: Option<&StationReport>) -> Result<()> {
    let Some(report) = report else {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    };

    writeln!(
        out,
        "Most commonly used start station: {}",
        join(&report.start_stations)
    )?;
    writeln!(
        out,
        "Most commonly used end station: {}",
        join(&report.end_stations)
    )?;
    writeln!(
        out,
        "Most frequently used station combination: {}",
        join(&report.routes)
    )?;
    Ok(())
}

pub fn write_duration_report<W: Write>(
    out: &mut W,
    report: Option<&DurationReport>,
) -> Result<()> {
    let Some(report) = report else {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    };

    writeln!(out, "Total travel duration: {}", format_duration(report.total))?;
    writeln!(out, "Average travel duration: {}", format_duration(report.mean))?;
    writeln!(out, "Longest trip duration: {}", format_duration(report.longest))?;
    Ok(())
}

pub fn write_user_report<W: Write>(out: &mut W, report: &UserReport) -> Result<()> {
    writeln!(out, "User Type Counts:")?;
    if report.user_types.is_empty() {
        writeln!(out, "no data")?;
    }
    for (kind, count) in &report.user_types {
        writeln!(out, "{kind:12}: {count:8}")?;
    }

    if let Some(gender) = &report.gender {
        writeln!(out, "\nGender Data:")?;
        writeln!(out, "\tRides:")?;
        if gender.rides.is_empty() {
            writeln!(out, "\tno data")?;
        }
        for (name, count) in &gender.rides {
            writeln!(out, "\t{name:7}: {count:8}")?;
        }

        writeln!(out, "\n\tAverage Duration:")?;
        if gender.mean_duration.is_empty() {
            writeln!(out, "\tno data")?;
        }
        for (name, secs) in &gender.mean_duration {
            writeln!(out, "\t{name:7}: {}", format_duration(*secs))?;
        }
    }

    if let Some(ages) = &report.ages {
        writeln!(out, "\nAge Data:")?;
        match &ages.summary {
            None => writeln!(out, "\tno data")?,
            Some(summary) => {
                writeln!(out, "\tEarliest Birth Year: \t{}", summary.earliest_birth_year)?;
                writeln!(out, "\tMost Recent Birth Year: {}", summary.most_recent_birth_year)?;
                writeln!(
                    out,
                    "\tMost Common Birth Year: {}",
                    join(&summary.most_common_birth_years)
                )?;
                writeln!(out, "\tOldest Rider: \t\t{}", summary.oldest)?;
                writeln!(out, "\tYoungest Rider: \t{}", summary.youngest)?;
                writeln!(out, "\tAverage Rider Age: \t{}", summary.mean_age)?;
            }
        }
    }
    Ok(())
}

/// Prints each trip as one JSON object per line.
pub fn write_raw_rows<W: Write>(out: &mut W, table: &TripTable, rows: &[Trip]) -> Result<()> {
    for trip in rows {
        writeln!(out, "{}", serde_json::to_string(&table.raw_row(trip))?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::{AgeStats, GenderStats};
    use crate::filter::City;
    use chrono::{Month, Weekday};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_selection_description() {
        let all = Selection::unfiltered(City::NewYorkCity);
        assert_eq!(
            selection_description(&all),
            "You have selected to view data from New York City"
        );

        let narrow = Selection::new(
            City::Chicago,
            MonthFilter::Only(Month::March),
            DayFilter::Only(Weekday::Mon),
        );
        assert_eq!(
            selection_description(&narrow),
            "You have selected to view data from Chicago in March on a Monday"
        );
    }

    #[test]
    fn test_no_data_reports() {
        let text = render(|w| write_time_report(w, None));
        assert_eq!(text.trim(), NO_DATA);
        let text = render(|w| write_station_report(w, None));
        assert_eq!(text.trim(), NO_DATA);
        let text = render(|w| write_duration_report(w, None));
        assert_eq!(text.trim(), NO_DATA);
    }

    #[test]
    fn test_bars_are_block_characters() {
        let report = TimeReport {
            trips: 4,
            months: Some(Breakdown {
                most_common: "March".into(),
                bars: vec![FrequencyBar {
                    label: "March".into(),
                    count: 4,
                    percent: 3,
                }],
            }),
            weekdays: None,
            busiest_hours: vec![7, 8],
            hours: Vec::new(),
        };
        let text = render(|w| write_time_report(w, Some(&report)));
        assert!(text.contains("Most common month: March"));
        assert!(text.contains("March       : ███"));
        assert!(text.contains("Most common starting hour: 7, 8"));
        assert!(!text.contains("day of the week"));
    }

    #[test]
    fn test_user_report_sections_follow_report() {
        let bare = UserReport {
            user_types: vec![("Subscriber".into(), 3)],
            gender: None,
            ages: None,
        };
        let text = render(|w| write_user_report(w, &bare));
        assert!(text.contains("Subscriber  :        3"));
        assert!(!text.contains("Gender Data"));
        assert!(!text.contains("Age Data"));

        let full = UserReport {
            user_types: Vec::new(),
            gender: Some(GenderStats {
                rides: Vec::new(),
                mean_duration: Vec::new(),
            }),
            ages: Some(AgeStats {
                current_year: 2017,
                summary: None,
            }),
        };
        let text = render(|w| write_user_report(w, &full));
        assert!(text.contains("Gender Data"));
        assert!(text.contains("Age Data"));
        assert!(text.contains("no data"));
    }

    #[test]
    fn test_footer_ends_with_rule() {
        let text = render(|w| write_footer(w, Duration::from_millis(5)));
        assert!(text.contains("This took 0.005 seconds."));
        assert!(text.ends_with(&format!("{}\n", rule())));
    }
}
