//! Most frequent times of travel.

use chrono::Month;
use tracing::debug;

use crate::analyzers::types::{Breakdown, FrequencyBar, TimeReport};
use crate::analyzers::utility::pct;
use crate::filter::{WEEKDAYS, weekday_name};
use crate::trip::TripTable;

/// Computes month, weekday and start-hour frequencies.
///
/// The month chart is skipped when the table was filtered to one month, and
/// likewise for weekdays. Returns `None` for an empty table.
#[tracing::instrument(skip(table), fields(trips = table.len()))]
pub fn time_stats(table: &TripTable) -> Option<TimeReport> {
    if table.is_empty() {
        debug!("No trips to analyze");
        return None;
    }

    let total = table.len();
    let mut month_counts = [0usize; 12];
    let mut day_counts = [0usize; 7];
    let mut hour_counts = [0usize; 24];

    for trip in table.trips() {
        month_counts[trip.month() as usize - 1] += 1;
        day_counts[trip.day_of_week() as usize] += 1;
        hour_counts[trip.hour() as usize] += 1;
    }

    let filter = table.filter();

    let months = if filter.month.is_all() {
        let names = std::iter::successors(Some(Month::January), |m| Some(m.succ()))
            .map(|m| m.name().to_string());
        breakdown(names.zip(month_counts), total)
    } else {
        None
    };

    let weekdays = if filter.day.is_all() {
        let names = WEEKDAYS.iter().map(|d| weekday_name(*d).to_string());
        breakdown(names.zip(day_counts), total)
    } else {
        None
    };

    let busiest = hour_counts.iter().copied().max().unwrap_or(0);
    let busiest_hours = (0u32..)
        .zip(hour_counts)
        .filter(|(_, count)| *count == busiest)
        .map(|(hour, _)| hour)
        .collect();

    let hours = (0u32..)
        .zip(hour_counts)
        .map(|(hour, count)| FrequencyBar {
            label: hour,
            count,
            percent: pct(count, total),
        })
        .collect();

    Some(TimeReport {
        trips: total,
        months,
        weekdays,
        busiest_hours,
        hours,
    })
}

/// Builds a chart from per-category counts given in calendar order.
///
/// The chart begins at the first category present and stops at the first
/// absent one after it. The most common value is the earliest category with
/// the highest count.
fn breakdown<I>(counts: I, total: usize) -> Option<Breakdown>
where
    I: IntoIterator<Item = (String, usize)>,
{
    let counts: Vec<(String, usize)> = counts.into_iter().collect();

    let mut most_common: Option<(&String, usize)> = None;
    for (label, count) in &counts {
        if *count > most_common.map_or(0, |(_, c)| c) {
            most_common = Some((label, *count));
        }
    }
    let most_common = most_common?.0.clone();

    let bars = counts
        .iter()
        .skip_while(|(_, count)| *count == 0)
        .take_while(|(_, count)| *count > 0)
        .map(|(label, count)| FrequencyBar {
            label: label.clone(),
            count: *count,
            percent: pct(*count, total),
        })
        .collect();

    Some(Breakdown { most_common, bars })
}
