//! Calendar days as the dashboard sees them.
//!
//! The remote service stores check-in dates as ISO timestamps. They are turned
//! into a [`CheckDay`] once, when a response is decoded, so every comparison in
//! the stats and calendar code is plain date equality.

use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc,
};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckDay(NaiveDate);

impl CheckDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Normalise a wire date into the calendar day it denotes in `offset`.
    ///
    /// Timestamps carrying an offset are shifted into `offset`; naive
    /// timestamps and bare dates keep the date as written.
    pub fn parse_wire(raw: &str, offset: &FixedOffset) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(stamp.with_timezone(offset).date_naive()));
        }
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Self(stamp.date()));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().map(Self)
    }

    /// Midnight of this day in `offset`, written in UTC the way the remote
    /// service stores it (`2025-01-04T23:00:00.000Z`).
    ///
    /// `None` when the shifted instant falls outside chrono's range.
    pub fn to_wire(self, offset: &FixedOffset) -> Option<String> {
        let shift = Duration::seconds(i64::from(offset.local_minus_utc()));
        let utc = self.0.and_time(NaiveTime::MIN).checked_sub_signed(shift)?;
        let stamp = DateTime::<Utc>::from_naive_utc_and_offset(utc, Utc);
        Some(stamp.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<NaiveDate> for CheckDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CheckDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for CheckDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
