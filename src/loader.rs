//! Loads a city's trip log from the data directory and applies the
//! month/day restriction of a [`Selection`].

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LoadError, Result};
use crate::filter::{City, Selection};
use crate::parser::read_trips;
use crate::trip::TripTable;

/// Resolves the trip log location for `city` inside `data_dir`.
pub fn city_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

/// Reads every trip for `city`, without any time restriction.
///
/// The file handle is closed before this returns.
///
/// # Errors
///
/// [`LoadError::DataUnavailable`] if the file cannot be opened,
/// [`LoadError::Malformed`] if it cannot be parsed.
#[tracing::instrument(skip(data_dir), fields(data_dir = %data_dir.display()))]
pub fn load_city(data_dir: &Path, city: City) -> Result<TripTable> {
    let path = city_path(data_dir, city);
    let file = File::open(&path).map_err(|source| LoadError::DataUnavailable {
        city,
        path: path.clone(),
        source,
    })?;

    let table = read_trips(BufReader::new(file))
        .map_err(|source| LoadError::Malformed { path, source })?
        .with_city(city);

    debug!(rows = table.len(), schema = ?table.schema(), "Trip log loaded");
    Ok(table)
}

/// Loads the selection's city and keeps only the trips matching its filter.
#[tracing::instrument(skip(data_dir), fields(city = %selection.city))]
pub fn load_data(data_dir: &Path, selection: &Selection) -> Result<TripTable> {
    let all = load_city(data_dir, selection.city)?;
    let table = all.filtered(selection.filter);
    debug!(
        total = all.len(),
        kept = table.len(),
        "Applied time filter"
    );
    Ok(table)
}
