//! Grouping events into the day and hour buckets fed to the layout engine.

use chrono::NaiveDate;
use log::{debug, warn};

use crate::event::Event;
use crate::layout::{LaidOutEvent, layout};

/// Events on `date`, in stored order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    let day_events: Vec<&Event> = events.iter().filter(|e| e.date == date).collect();

    for event in day_events.iter().filter(|e| !e.is_well_formed()) {
        warn!(
            "event=malformed_range id={} date={} start={} end={}",
            event.id, event.date, event.start_time, event.end_time
        );
    }

    day_events
}

/// Events among `day_events` whose start time falls in `hour`.
pub fn events_in_hour<'a>(day_events: &[&'a Event], hour: u32) -> Vec<&'a Event> {
    day_events
        .iter()
        .copied()
        .filter(|e| e.start_hour() == hour)
        .collect()
}

/// Lay out the bucket for one hour of one day.
pub fn laid_out_hour(day_events: &[&Event], hour: u32) -> Vec<LaidOutEvent> {
    let bucket = events_in_hour(day_events, hour);
    if bucket.is_empty() {
        return Vec::new();
    }

    let laid_out = layout(bucket);
    debug!(
        "event=layout hour={} size={} max_active={}",
        hour,
        laid_out.len(),
        laid_out.iter().map(|l| l.active_count).max().unwrap_or(0)
    );
    laid_out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::test_support::event_on;

    #[test]
    fn test_events_on_filters_by_date_and_keeps_order() {
        let events = vec![
            event_on("a", "2025-03-20", "10:00", "11:00"),
            event_on("b", "2025-03-21", "10:00", "11:00"),
            event_on("c", "2025-03-20", "08:00", "09:00"),
        ];
        let date = crate::time::parse_date("2025-03-20").unwrap();
        let ids: Vec<&str> = events_on(&events, date).iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_hour_bucket_uses_start_hour_only() {
        let events = vec![
            event_on("a", "2025-03-20", "09:59", "11:00"),
            event_on("b", "2025-03-20", "10:00", "10:30"),
            event_on("c", "2025-03-20", "08:00", "10:30"),
        ];
        let day: Vec<&Event> = events.iter().collect();

        let ids: Vec<&str> = events_in_hour(&day, 9).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);

        let ids: Vec<&str> = events_in_hour(&day, 10).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_buckets_never_mix_hours() {
        // a runs into hour 10, but b is laid out alone in its own bucket
        let events = vec![
            event_on("a", "2025-03-20", "09:30", "10:30"),
            event_on("b", "2025-03-20", "10:00", "10:15"),
        ];
        let day: Vec<&Event> = events.iter().collect();

        let ten = laid_out_hour(&day, 10);
        assert_eq!(ten.len(), 1);
        assert_eq!(ten[0].active_count, 1);
        assert!(laid_out_hour(&day, 11).is_empty());
    }
}
