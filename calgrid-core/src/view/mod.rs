//! Month, week and day views: navigation, titles and grids.
//!
//! Weeks start on Sunday.

mod bucket;
mod grid;

pub use bucket::{events_in_hour, events_on, laid_out_hour};
pub use grid::{DayGrid, HourRow, MonthCell, MonthGrid, WeekGrid, WeekRow};

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use std::fmt;
use std::str::FromStr;

use crate::error::CalGridError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewKind {
    #[default]
    Month,
    Week,
    Day,
}

impl ViewKind {
    /// Move `steps` months, weeks or days from `date`. Negative steps move
    /// backwards. Month steps clamp to the last day of the target month.
    /// Dates past chrono's range leave `date` unchanged.
    pub fn shift(self, date: NaiveDate, steps: i32) -> NaiveDate {
        let n = steps.unsigned_abs();
        let forward = steps >= 0;

        let shifted = match (self, forward) {
            (ViewKind::Month, true) => date.checked_add_months(Months::new(n)),
            (ViewKind::Month, false) => date.checked_sub_months(Months::new(n)),
            (ViewKind::Week, true) => date.checked_add_days(Days::new(u64::from(n) * 7)),
            (ViewKind::Week, false) => date.checked_sub_days(Days::new(u64::from(n) * 7)),
            (ViewKind::Day, true) => date.checked_add_days(Days::new(u64::from(n))),
            (ViewKind::Day, false) => date.checked_sub_days(Days::new(u64::from(n))),
        };

        shifted.unwrap_or(date)
    }

    pub fn previous(self, date: NaiveDate) -> NaiveDate {
        self.shift(date, -1)
    }

    pub fn next(self, date: NaiveDate) -> NaiveDate {
        self.shift(date, 1)
    }

    /// Heading for the view anchored at `date`, e.g. "March 2025",
    /// "16 Mar, 25 - 22 Mar, 25" or "20 March 2025".
    pub fn title(self, date: NaiveDate) -> String {
        match self {
            ViewKind::Month => date.format("%B %Y").to_string(),
            ViewKind::Week => format!(
                "{} - {}",
                start_of_week(date).format("%-d %b, %y"),
                end_of_week(date).format("%-d %b, %y")
            ),
            ViewKind::Day => date.format("%-d %B %Y").to_string(),
        }
    }
}

impl FromStr for ViewKind {
    type Err = CalGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(ViewKind::Month),
            "week" => Ok(ViewKind::Week),
            "day" => Ok(ViewKind::Day),
            _ => Err(CalGridError::UnknownView(s.to_string())),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ViewKind::Month => "month",
            ViewKind::Week => "week",
            ViewKind::Day => "day",
        };
        write!(f, "{}", name)
    }
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

/// The Saturday on or after `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    let offset = 6 - date.weekday().num_days_from_sunday();
    date.checked_add_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}

/// 12-hour label for an hour row: "12 AM", "1 AM" .. "12 PM" .. "11 PM".
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        1..=11 => format!("{} AM", hour),
        12 => "12 PM".to_string(),
        _ => format!("{} PM", hour - 12),
    }
}

/// Top of the hour, used to pre-fill the start time when adding from a slot.
pub fn slot_start_time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}
