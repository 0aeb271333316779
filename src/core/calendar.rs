// File: src/core/calendar.rs
use crate::error::{Result, VocabError};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Source of the current UTC time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// The UTC calendar day of `now()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midnight UTC of `day`.
    pub fn at_day(day: NaiveDate) -> Self {
        Self(day.and_time(chrono::NaiveTime::default()).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Encodes a date as the integer `YYYYMMDD`.
/// Years outside 0..=9999 have no four-digit form and are rejected.
pub fn compute_seed(date: NaiveDate) -> Result<u64> {
    let year = date.year();
    if !(0..=9999).contains(&year) {
        return Err(VocabError::InvalidInput(format!(
            "year {} cannot be encoded as YYYYMMDD",
            year
        )));
    }
    Ok(year as u64 * 10_000 + date.month() as u64 * 100 + date.day() as u64)
}

/// Day-granularity stamp stored as `createdAt`.
pub fn day_stamp(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DAY_FORMAT)
        .map_err(|e| VocabError::InvalidInput(format!("malformed date '{}': {}", s, e)))
}
