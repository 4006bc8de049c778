//! Wall-clock date and time strings.
//!
//! Dates are stored as `YYYY-MM-DD` and times as zero-padded `HH:MM`. Because
//! both are fixed width, ordering the parsed values is the same as ordering
//! the stored strings.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CalGridError, CalGridResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> CalGridResult<NaiveDate> {
    let s = s.trim();
    if s.len() != 10 {
        return Err(CalGridError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| CalGridError::InvalidDate(s.to_string()))
}

/// Parse a zero-padded 24-hour `HH:MM` time.
pub fn parse_time(s: &str) -> CalGridResult<NaiveTime> {
    let s = s.trim();
    let bytes = s.as_bytes();
    let well_shaped = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());

    if !well_shaped {
        return Err(CalGridError::InvalidTime(s.to_string()));
    }

    NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|_| CalGridError::InvalidTime(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Serde adapter storing a `NaiveTime` as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter storing a `NaiveDate` as `YYYY-MM-DD`.
pub mod ymd {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_date(&s).map_err(serde::de::Error::custom)
    }
}
