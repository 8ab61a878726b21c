//! Errors raised while loading a city's trip log.

use std::path::PathBuf;

use thiserror::Error;

use crate::filter::City;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no trip data available for {city} at {}", path.display())]
    DataUnavailable {
        city: City,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed trip data in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
