//! Descriptive statistics over a trip table.
//!
//! Each analyzer takes the filtered table and returns a report value; the
//! text rendering lives in [`crate::output`]. Time, station and duration
//! analyzers return `None` when there are no trips to describe.

pub mod station;
pub mod time;
pub mod trip_duration;
pub mod types;
pub mod user;
pub mod utility;

pub use station::station_stats;
pub use time::time_stats;
pub use trip_duration::trip_duration_stats;
pub use user::user_stats;
