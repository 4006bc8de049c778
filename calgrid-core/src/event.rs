//! The stored event record.
//!
//! Events are serialized with the field names of the stored list
//! (`id`, `title`, `date`, `startTime`, `endTime`, `attendees`). Date and
//! times are typed here, so a record with a malformed date or time string is
//! rejected when the list is read rather than when it is rendered.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::time;

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque identifier, stable across edits
    pub id: String,
    pub title: String,
    #[serde(with = "time::ymd")]
    pub date: NaiveDate,
    #[serde(with = "time::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "time::hhmm")]
    pub end_time: NaiveTime,
    /// Free text, as entered
    pub attendees: String,
}

impl Event {
    /// Create an event with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        attendees: impl Into<String>,
    ) -> Self {
        Event {
            id: generate_id(),
            title: title.into(),
            date,
            start_time,
            end_time,
            attendees: attendees.into(),
        }
    }

    /// Hour of day the event starts in. This is the hour bucket it renders in.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Whether the event ends strictly after it starts.
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }

    /// e.g. "09:00 - 10:30"
    pub fn render_time_range(&self) -> String {
        format!(
            "{} - {}",
            time::format_time(self.start_time),
            time::format_time(self.end_time)
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Generate a new event id.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::time::{parse_date, parse_time};

    /// Build an event on 2025-03-20 with a fixed id.
    pub fn event(id: &str, start: &str, end: &str) -> Event {
        event_on(id, "2025-03-20", start, end)
    }

    pub fn event_on(id: &str, date: &str, start: &str, end: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            date: parse_date(date).unwrap(),
            start_time: parse_time(start).unwrap(),
            end_time: parse_time(end).unwrap(),
            attendees: "alice, bob".to_string(),
        }
    }
}
