// In crates/core-types/src/error.rs

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("short window ({short}) must be less than long window ({long})")]
    InvalidWindows { short: usize, long: usize },

    #[error("price series is empty")]
    EmptySeries,

    #[error("price series is not in strictly ascending date order at {date}")]
    UnorderedSeries { date: NaiveDate },
}

pub type Result<T> = std::result::Result<T, Error>;
