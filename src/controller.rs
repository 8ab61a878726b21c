//! Interactive prompt loop: choose a selection, print every report, browse
//! raw rows and optionally start over.
//!
//! The session reads from any [`BufRead`] and writes to any [`Write`], so the
//! whole dialogue can be scripted. End of input at any prompt ends the
//! session.

use anyhow::Result;
use chrono::{Datelike, Local};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use crate::analyzers::{station_stats, time_stats, trip_duration_stats, user_stats};
use crate::filter::{City, DayFilter, FILTER_MONTHS, MonthFilter, Selection, WEEKDAYS, weekday_name};
use crate::loader::load_data;
use crate::output::{
    self, DURATION_HEADING, STATION_HEADING, TIME_HEADING, USER_HEADING, selection_description,
};
use crate::trip::TripTable;

const PAGE_SIZE: usize = 5;

pub struct Explorer<R, W> {
    input: R,
    out: W,
    data_dir: PathBuf,
    current_year: i32,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(input: R, out: W, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            input,
            out,
            data_dir: data_dir.into(),
            current_year: Local::now().year(),
        }
    }

    /// Overrides the year rider ages are computed against.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs exploration passes until the user declines to restart or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(selection) = self.get_filters()? else {
                break;
            };

            if let Some(table) = self.generate_stats(&selection)? {
                let step = self.ask_yes(
                    "\nWould you like to step through raw data? Type \"yes\" to step through: ",
                )?;
                match step {
                    None => break,
                    Some(true) => {
                        if !self.step_through(&table)? {
                            break;
                        }
                    }
                    Some(false) => {}
                }
            }

            if self.ask_yes("\nWould you like to restart? Type \"yes\" to restart: ")? != Some(true) {
                break;
            }
        }

        info!("Session ended");
        Ok(())
    }

    /// Asks for city, month and day. `None` if input ended first.
    pub fn get_filters(&mut self) -> Result<Option<Selection>> {
        writeln!(self.out, "Hello! Let's explore some US bikeshare data!")?;
        writeln!(self.out, "Choose a city to explore:")?;
        for city in City::ALL {
            writeln!(self.out, "{}) {}", city.ordinal(), city.name())?;
        }
        let Some(city) = self
            .prompt_choice(1..=3)?
            .and_then(City::from_ordinal)
        else {
            return Ok(None);
        };

        let Some(filter_by_time) = self.ask_yes(
            "\nWould you like to filter by time? Type \"yes\" to add time filters: ",
        )?
        else {
            return Ok(None);
        };
        if !filter_by_time {
            return Ok(Some(Selection::unfiltered(city)));
        }

        writeln!(self.out, "\nChoose a month to explore:")?;
        writeln!(self.out, "0) All")?;
        for (n, month) in (1..).zip(FILTER_MONTHS) {
            writeln!(self.out, "{n}) {}", month.name())?;
        }
        let Some(month) = self
            .prompt_choice(0..=MonthFilter::MENU_MAX)?
            .and_then(MonthFilter::from_ordinal)
        else {
            return Ok(None);
        };

        writeln!(self.out, "\nChoose a day of the week to explore:")?;
        for (n, day) in (0..).zip(WEEKDAYS) {
            writeln!(self.out, "{n}) {}", weekday_name(day))?;
        }
        writeln!(self.out, "{}) All", DayFilter::MENU_MAX)?;
        let Some(day) = self
            .prompt_choice(0..=DayFilter::MENU_MAX)?
            .and_then(DayFilter::from_ordinal)
        else {
            return Ok(None);
        };

        Ok(Some(Selection::new(city, month, day)))
    }

    /// Loads the selection and prints all four reports.
    ///
    /// A load failure is reported to the user and yields `Ok(None)`; it only
    /// ends the current pass.
    #[tracing::instrument(skip(self), fields(city = %selection.city))]
    pub fn generate_stats(&mut self, selection: &Selection) -> Result<Option<TripTable>> {
        writeln!(self.out, "{}", output::rule())?;

        let table = match load_data(&self.data_dir, selection) {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "Trip data could not be loaded");
                writeln!(self.out, "Unable to load data: {e}")?;
                return Ok(None);
            }
        };
        info!(trips = table.len(), "Selection loaded");

        writeln!(self.out, "{}", selection_description(selection))?;

        output::write_heading(&mut self.out, TIME_HEADING)?;
        let started = Instant::now();
        let report = time_stats(&table);
        output::write_time_report(&mut self.out, report.as_ref())?;
        output::write_footer(&mut self.out, started.elapsed())?;

        output::write_heading(&mut self.out, STATION_HEADING)?;
        let started = Instant::now();
        let report = station_stats(&table);
        output::write_station_report(&mut self.out, report.as_ref())?;
        output::write_footer(&mut self.out, started.elapsed())?;

        output::write_heading(&mut self.out, DURATION_HEADING)?;
        let started = Instant::now();
        let report = trip_duration_stats(&table);
        output::write_duration_report(&mut self.out, report.as_ref())?;
        output::write_footer(&mut self.out, started.elapsed())?;

        output::write_heading(&mut self.out, USER_HEADING)?;
        let started = Instant::now();
        let report = user_stats(&table, self.current_year);
        output::write_user_report(&mut self.out, &report)?;
        output::write_footer(&mut self.out, started.elapsed())?;

        Ok(Some(table))
    }

    /// Pages through the table five rows at a time until the user types `no`
    /// or the rows run out. Returns `false` if input ended.
    pub fn step_through(&mut self, table: &TripTable) -> Result<bool> {
        for page in table.trips().chunks(PAGE_SIZE) {
            output::write_raw_rows(&mut self.out, table, page)?;
            match self.read_line("\nContinue viewing raw data? Type \"no\" to exit: ")? {
                None => return Ok(false),
                Some(answer) if answer.trim().eq_ignore_ascii_case("no") => return Ok(true),
                Some(_) => {}
            }
        }
        writeln!(self.out, "No more rows.")?;
        Ok(true)
    }

    /// Re-asks until the answer is a number inside `range`.
    fn prompt_choice(&mut self, range: RangeInclusive<u32>) -> Result<Option<u32>> {
        loop {
            let Some(line) = self.read_line("Choose: ")? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(n) => match u32::try_from(n) {
                    Ok(n) if range.contains(&n) => return Ok(Some(n)),
                    _ => writeln!(
                        self.out,
                        "Please choose a number from {} to {}",
                        range.start(),
                        range.end()
                    )?,
                },
                Err(_) => writeln!(self.out, "Please enter a number")?,
            }
        }
    }

    fn ask_yes(&mut self, prompt: &str) -> Result<Option<bool>> {
        Ok(self
            .read_line(prompt)?
            .map(|answer| answer.trim().eq_ignore_ascii_case("yes")))
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
