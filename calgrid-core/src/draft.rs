//! User-entered event fields, before validation.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CalGridError, CalGridResult};
use crate::event::Event;
use crate::time::{self, parse_date, parse_time};
use crate::view::slot_start_time;

/// The raw fields of the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub attendees: String,
}

/// Draft fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub attendees: String,
}

impl EventDraft {
    /// Blank draft pre-filled with a date (adding from a month cell).
    pub fn for_date(date: NaiveDate) -> Self {
        EventDraft {
            date: time::format_date(date),
            ..Default::default()
        }
    }

    /// Draft pre-filled with a date and the top of an hour (adding from a
    /// day or week slot).
    pub fn for_slot(date: NaiveDate, hour: u32) -> Self {
        EventDraft {
            date: time::format_date(date),
            start_time: time::format_time(slot_start_time(hour)),
            ..Default::default()
        }
    }

    /// Draft holding an existing event's values (editing).
    pub fn from_event(event: &Event) -> Self {
        EventDraft {
            title: event.title.clone(),
            date: time::format_date(event.date),
            start_time: time::format_time(event.start_time),
            end_time: time::format_time(event.end_time),
            attendees: event.attendees.clone(),
        }
    }

    /// Check every field and collect all problems.
    pub fn validate(&self) -> CalGridResult<EventFields> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push("Event title is mandatory".to_string());
        }

        let date = required(&self.date, "Date is mandatory", &mut errors)
            .and_then(|s| collect(parse_date(s), &mut errors));
        let start_time = required(&self.start_time, "Start time is mandatory", &mut errors)
            .and_then(|s| collect(parse_time(s), &mut errors));
        let end_time = required(&self.end_time, "End time is mandatory", &mut errors)
            .and_then(|s| collect(parse_time(s), &mut errors));

        if let (Some(start), Some(end)) = (start_time, end_time)
            && end <= start
        {
            errors.push("End time must be after start time".to_string());
        }

        if self.attendees.is_empty() {
            errors.push("Attendees is mandatory".to_string());
        }

        match (date, start_time, end_time) {
            (Some(date), Some(start_time), Some(end_time)) if errors.is_empty() => Ok(EventFields {
                title: self.title.clone(),
                date,
                start_time,
                end_time,
                attendees: self.attendees.clone(),
            }),
            _ => Err(CalGridError::Validation(errors)),
        }
    }
}

impl EventFields {
    /// Build an event carrying these fields under the given id.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            attendees: self.attendees,
        }
    }
}

fn required<'a>(value: &'a str, message: &str, errors: &mut Vec<String>) -> Option<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(message.to_string());
        None
    } else {
        Some(value)
    }
}

fn collect<T>(result: CalGridResult<T>, errors: &mut Vec<String>) -> Option<T> {
    result.map_err(|e| errors.push(e.to_string())).ok()
}
